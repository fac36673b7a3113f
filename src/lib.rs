//! # offkey
//!
//! Corrects words typed with hands offset from the home row.
//!
//! A keyboard layout is modeled as a graph of adjacent keys. Given a typed
//! word, the shift resolver reconstructs the keystroke sequence (including
//! the caps-lock presses implied by case changes), remaps it through each
//! spatial offset, and ranks the surviving reinterpretations against a
//! dictionary and a word-frequency table.
//!
//! ## Features
//!
//! - Keyboard adjacency graph built from JSON layout records
//! - Built-in QWERTY layout and English dictionary
//! - Caps-lock reconstruction from case transitions
//! - Dictionary and frequency scoring behind injectable traits

pub mod cli;
pub mod error;
pub mod keyboard;
pub mod shift;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
