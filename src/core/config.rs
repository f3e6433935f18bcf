//! Game configuration.
//!
//! A `GameSpec` describes one game: the player roster (names and strategy
//! names), the tile count, and the die faces. Specs are validated eagerly
//! at engine construction so that misconfiguration never reaches gameplay.

use serde::{Deserialize, Serialize};

use super::SimError;

/// Standard Shut the Box board: tiles 1 through 9.
pub const DEFAULT_TILE_COUNT: u8 = 9;

/// Standard six-sided dice.
pub const DEFAULT_DIE_FACES: u8 = 6;

/// Upper bound on the tile count, fixed by the rack's bitmask representation.
pub const MAX_TILE_COUNT: u8 = 16;

/// One player's entry in the roster: a display name and a strategy name
/// resolved against the [`StrategyRegistry`](crate::strategy::StrategyRegistry).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub strategy: String,
}

impl PlayerSpec {
    /// Create a new player spec.
    pub fn new(name: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strategy: strategy.into(),
        }
    }
}

/// Configuration for a single game.
///
/// ## Example
///
/// ```
/// use shutbox::core::GameSpec;
///
/// let spec = GameSpec::new("greedy_max", "min_tiles");
/// assert_eq!(spec.tile_count, 9);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSpec {
    /// Player roster, in turn order.
    pub players: Vec<PlayerSpec>,

    /// Number of tiles on the board (1..=16).
    pub tile_count: u8,

    /// Faces per die.
    pub die_faces: u8,

    /// Simulation run identifier carried into every event.
    pub sim_id: u64,

    /// Game identifier within the simulation.
    pub game_id: u64,
}

impl GameSpec {
    /// Create a two-player spec with default board and dice.
    ///
    /// Players are named `P1` and `P2`, matching the batch runner's reports.
    pub fn new(p1_strategy: impl Into<String>, p2_strategy: impl Into<String>) -> Self {
        Self {
            players: vec![
                PlayerSpec::new("P1", p1_strategy),
                PlayerSpec::new("P2", p2_strategy),
            ],
            tile_count: DEFAULT_TILE_COUNT,
            die_faces: DEFAULT_DIE_FACES,
            sim_id: 0,
            game_id: 0,
        }
    }

    /// Set the tile count (builder pattern).
    #[must_use]
    pub fn with_tile_count(mut self, tile_count: u8) -> Self {
        self.tile_count = tile_count;
        self
    }

    /// Set the die faces (builder pattern).
    #[must_use]
    pub fn with_die_faces(mut self, die_faces: u8) -> Self {
        self.die_faces = die_faces;
        self
    }

    /// Set the simulation and game identifiers (builder pattern).
    #[must_use]
    pub fn with_ids(mut self, sim_id: u64, game_id: u64) -> Self {
        self.sim_id = sim_id;
        self.game_id = game_id;
        self
    }

    /// The number of players in the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Player display names, in turn order.
    #[must_use]
    pub fn player_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    /// Validate the spec.
    ///
    /// Rejects empty/oversized boards, zero-faced dice, and rosters that
    /// are not 2-8 players.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.tile_count == 0 {
            return Err(SimError::InvalidConfig(
                "tile count must be at least 1".to_string(),
            ));
        }
        if self.tile_count > MAX_TILE_COUNT {
            return Err(SimError::InvalidConfig(format!(
                "tile count must be at most {MAX_TILE_COUNT}, got {}",
                self.tile_count
            )));
        }
        if self.die_faces == 0 {
            return Err(SimError::InvalidConfig(
                "dice must have at least one face".to_string(),
            ));
        }
        if !(2..=8).contains(&self.players.len()) {
            return Err(SimError::InvalidConfig(format!(
                "player count must be 2-8, got {}",
                self.players.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_valid() {
        let spec = GameSpec::new("greedy_max", "min_tiles");
        assert_eq!(spec.tile_count, 9);
        assert_eq!(spec.die_faces, 6);
        assert_eq!(spec.player_count(), 2);
        assert_eq!(spec.player_names(), vec!["P1", "P2"]);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_zero_tiles_rejected() {
        let spec = GameSpec::new("greedy_max", "min_tiles").with_tile_count(0);
        assert!(matches!(spec.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_oversized_board_rejected() {
        let spec = GameSpec::new("greedy_max", "min_tiles").with_tile_count(17);
        assert!(matches!(spec.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_faces_rejected() {
        let spec = GameSpec::new("greedy_max", "min_tiles").with_die_faces(0);
        assert!(matches!(spec.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_single_player_rejected() {
        let mut spec = GameSpec::new("greedy_max", "min_tiles");
        spec.players.truncate(1);
        assert!(matches!(spec.validate(), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_setters() {
        let spec = GameSpec::new("greedy_max", "greedy_max")
            .with_tile_count(12)
            .with_die_faces(8)
            .with_ids(3, 17);

        assert_eq!(spec.tile_count, 12);
        assert_eq!(spec.die_faces, 8);
        assert_eq!(spec.sim_id, 3);
        assert_eq!(spec.game_id, 17);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_spec_serialization() {
        let spec = GameSpec::new("greedy_max", "min_tiles").with_ids(1, 2);
        let json = serde_json::to_string(&spec).unwrap();
        let deserialized: GameSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, deserialized);
    }
}
