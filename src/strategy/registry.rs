//! Strategy registry for name lookup.
//!
//! The registry maps strategy names to implementations. Engine construction
//! resolves every player's strategy through it up front, so an unknown name
//! fails before any game starts.

use rustc_hash::FxHashMap;

use crate::core::SimError;

use super::{GreedyMax, MinTiles, Strategy};

/// Registry of named strategies.
///
/// ## Example
///
/// ```
/// use shutbox::strategy::StrategyRegistry;
///
/// let registry = StrategyRegistry::with_builtins();
/// assert!(registry.get("greedy_max").is_ok());
/// assert!(registry.get("optimal_play").is_err());
/// ```
#[derive(Default)]
pub struct StrategyRegistry {
    strategies: FxHashMap<String, Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in strategies registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GreedyMax));
        registry.register(Box::new(MinTiles));
        registry
    }

    /// Register a strategy under its own name.
    ///
    /// Panics if the name is already taken.
    pub fn register(&mut self, strategy: Box<dyn Strategy>) {
        let name = strategy.name();
        if self.strategies.contains_key(name) {
            panic!("strategy {name:?} already registered");
        }
        self.strategies.insert(name.to_string(), strategy);
    }

    /// Look up a strategy by name.
    pub fn get(&self, name: &str) -> Result<&dyn Strategy, SimError> {
        self.strategies
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| SimError::UnknownStrategy(name.to_string()))
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered strategies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// True if no strategies are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}
