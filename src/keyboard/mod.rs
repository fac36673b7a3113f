//! Keyboard layouts and the adjacency graph built from them.

pub mod graph;
pub mod layout;

pub use graph::{Direction, Key, KeyId, Keyboard};
pub use layout::{Hand, KeyRecord};
