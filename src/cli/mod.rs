//! Command-line interface for offkey.

pub mod args;
pub mod commands;
pub mod output;
