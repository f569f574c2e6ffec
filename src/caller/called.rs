//! The ordered history of called numbers.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Column, MAX_NUMBER};

/// Numbers called so far, oldest first.
///
/// Membership is O(1). Pushing a number twice, or a number outside
/// 1..=75, is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<u8>", into = "Vec<u8>")]
pub struct CalledNumbers {
    order: Vec<u8>,
    seen: FxHashSet<u8>,
}

impl CalledNumbers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a called number. Returns `true` if it was new.
    pub fn push(&mut self, number: u8) -> bool {
        if Column::for_number(number).is_none() || !self.seen.insert(number) {
            return false;
        }
        self.order.push(number);
        true
    }

    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        self.seen.contains(&number)
    }

    /// The most recently called number.
    #[must_use]
    pub fn current(&self) -> Option<u8> {
        self.order.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True once every number has been called.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.order.len() == usize::from(MAX_NUMBER)
    }

    /// Oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.order
    }

    /// Newest first.
    pub fn recent(&self) -> impl Iterator<Item = u8> + '_ {
        self.order.iter().rev().copied()
    }
}

impl From<Vec<u8>> for CalledNumbers {
    fn from(numbers: Vec<u8>) -> Self {
        numbers.into_iter().collect()
    }
}

impl From<CalledNumbers> for Vec<u8> {
    fn from(called: CalledNumbers) -> Self {
        called.order
    }
}

impl FromIterator<u8> for CalledNumbers {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut called = Self::new();
        called.extend(iter);
        called
    }
}

impl Extend<u8> for CalledNumbers {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for number in iter {
            self.push(number);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let called: CalledNumbers = vec![12, 25, 38, 47, 61].into();
        assert_eq!(called.as_slice(), &[12, 25, 38, 47, 61]);
        assert_eq!(called.current(), Some(61));
        assert_eq!(called.len(), 5);
    }

    #[test]
    fn test_duplicates_and_out_of_range_ignored() {
        let mut called = CalledNumbers::new();
        assert!(called.push(8));
        assert!(!called.push(8));
        assert!(!called.push(0));
        assert!(!called.push(76));

        assert_eq!(called.as_slice(), &[8]);
        assert!(called.contains(8));
        assert!(!called.contains(76));
    }

    #[test]
    fn test_recent_is_newest_first() {
        let called: CalledNumbers = [8, 19, 33].into_iter().collect();
        let recent: Vec<_> = called.recent().collect();
        assert_eq!(recent, vec![33, 19, 8]);
    }

    #[test]
    fn test_exhausted() {
        let mut called: CalledNumbers = (1..=74).collect();
        assert!(!called.is_exhausted());
        called.push(75);
        assert!(called.is_exhausted());
    }

    #[test]
    fn test_serde_as_list() {
        let called: CalledNumbers = vec![52, 67].into();
        let json = serde_json::to_string(&called).unwrap();
        assert_eq!(json, "[52,67]");

        let restored: CalledNumbers = serde_json::from_str("[52,67,52]").unwrap();
        assert_eq!(restored, called);
    }

    #[test]
    fn test_empty() {
        let called = CalledNumbers::new();
        assert!(called.is_empty());
        assert_eq!(called.current(), None);
    }
}
