//! Player identity.

use serde::{Deserialize, Serialize};

/// Index of a player in the game's roster, 0-based.
///
/// Turn order is roster order: `PlayerId(0)` rolls first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Wrap a roster index.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The roster index as a usize, for indexing turn records.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Every id in a roster of the given size, in turn order.
    ///
    /// ```
    /// use shutbox::core::PlayerId;
    ///
    /// let order: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(order, [PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_display() {
        let second = PlayerId::new(1);
        assert_eq!(second.index(), 1);
        assert_eq!(second.to_string(), "Player 1");
    }

    #[test]
    fn test_all_follows_turn_order() {
        let order: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(order, [PlayerId(0), PlayerId(1), PlayerId(2)]);
    }

    #[test]
    fn test_serializes_as_bare_index() {
        let json = serde_json::to_string(&PlayerId::new(1)).unwrap();
        assert_eq!(json, "1");
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlayerId::new(1));
    }
}
