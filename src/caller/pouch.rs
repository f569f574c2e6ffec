//! The pouch of undrawn numbers.

use crate::board::MAX_NUMBER;
use crate::core::BoardRng;

/// All 75 numbers in a random order, drawn one at a time.
#[derive(Clone, Debug)]
pub struct Pouch {
    remaining: Vec<u8>,
}

impl Pouch {
    /// Fill and shuffle a new pouch.
    pub fn new(rng: &mut BoardRng) -> Self {
        let mut remaining: Vec<u8> = (1..=MAX_NUMBER).collect();
        rng.shuffle(&mut remaining);
        Self { remaining }
    }

    /// Take the next number. `None` once the pouch is empty.
    pub fn draw(&mut self) -> Option<u8> {
        self.remaining.pop()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}
