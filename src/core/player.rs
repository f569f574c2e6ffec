//! Player identification and per-seat storage.
//!
//! ## PlayerId
//!
//! Opaque seat identifier handed out by a game room when a player joins.
//! Ids are never reused within a room, so a player who leaves cannot be
//! confused with a later arrival.
//!
//! ## PlayerMap
//!
//! Seat-ordered storage keyed by `PlayerId`. Insertion order is preserved,
//! which is how the room determines its host (first seated player).

use serde::{Deserialize, Serialize};

/// Seat identifier within one game room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat number.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data in join order.
///
/// ```
/// use bingo_engine::core::{PlayerId, PlayerMap};
///
/// let mut seats: PlayerMap<&str> = PlayerMap::new();
/// seats.insert(PlayerId::new(0), "alice");
/// seats.insert(PlayerId::new(1), "bob");
///
/// assert_eq!(seats.get(PlayerId::new(1)), Some(&"bob"));
/// assert_eq!(seats.get(PlayerId::new(7)), None);
/// assert_eq!(seats.first(), Some(PlayerId::new(0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    entries: Vec<(PlayerId, T)>,
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> PlayerMap<T> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a player's entry. New players go to the back.
    pub fn insert(&mut self, player: PlayerId, value: T) {
        match self.get_mut(player) {
            Some(slot) => *slot = value,
            None => self.entries.push((player, value)),
        }
    }

    /// Remove a player's entry, keeping the order of the rest.
    pub fn remove(&mut self, player: PlayerId) -> Option<T> {
        let pos = self.entries.iter().position(|(id, _)| *id == player)?;
        Some(self.entries.remove(pos).1)
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.entries.iter().find(|(id, _)| *id == player).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.entries.iter_mut().find(|(id, _)| *id == player).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.get(player).is_some()
    }

    /// Number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The earliest seated player still present.
    #[must_use]
    pub fn first(&self) -> Option<PlayerId> {
        self.entries.first().map(|(id, _)| *id)
    }

    /// Iterate over (PlayerId, &T) pairs in join order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.entries.iter().map(|(id, v)| (*id, v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in join order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.entries.iter_mut().map(|(id, v)| (*id, v))
    }

    /// Iterate over all player IDs in join order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.raw(), 0);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_insert_preserves_join_order() {
        let mut map = PlayerMap::new();
        map.insert(PlayerId::new(5), 'a');
        map.insert(PlayerId::new(2), 'b');
        map.insert(PlayerId::new(9), 'c');

        let ids: Vec<_> = map.player_ids().collect();
        assert_eq!(ids, vec![PlayerId::new(5), PlayerId::new(2), PlayerId::new(9)]);
        assert_eq!(map.first(), Some(PlayerId::new(5)));
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut map = PlayerMap::new();
        map.insert(PlayerId::new(0), 1);
        map.insert(PlayerId::new(0), 2);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(PlayerId::new(0)), Some(&2));
    }

    #[test]
    fn test_remove() {
        let mut map = PlayerMap::new();
        map.insert(PlayerId::new(0), "host");
        map.insert(PlayerId::new(1), "guest");

        assert_eq!(map.remove(PlayerId::new(0)), Some("host"));
        assert_eq!(map.remove(PlayerId::new(0)), None);
        assert_eq!(map.first(), Some(PlayerId::new(1)));
        assert!(!map.contains(PlayerId::new(0)));
    }

    #[test]
    fn test_iter_mut() {
        let mut map = PlayerMap::new();
        map.insert(PlayerId::new(0), 1);
        map.insert(PlayerId::new(1), 2);

        for (_, v) in map.iter_mut() {
            *v *= 10;
        }

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &10), (PlayerId::new(1), &20)]);
    }

    #[test]
    fn test_serialization() {
        let mut map = PlayerMap::new();
        map.insert(PlayerId::new(3), true);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<bool> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_missing_player_lookup() {
        let mut map: PlayerMap<i32> = PlayerMap::new();
        assert_eq!(map.get(PlayerId::new(4)), None);
        assert_eq!(map.get_mut(PlayerId::new(4)), None);
    }
}
