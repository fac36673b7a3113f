//! Shift resolution: reinterpreting a typed word under each spatial offset.

pub mod resolver;
pub mod scorer;

pub use resolver::{Candidate, Offset, ShiftResolver, Token, OFFSETS};
pub use scorer::{select, Correction};
