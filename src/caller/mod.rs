//! Number calling: the called-number history boards are derived from,
//! and the pouch numbers are drawn out of.

pub mod called;
pub mod pouch;

pub use called::CalledNumbers;
pub use pouch::Pouch;
