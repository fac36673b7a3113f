//! Word-frequency rank table.
//!
//! A flat mapping from known word to integer rank, lower meaning more
//! common. Used only as a tie-breaker between dictionary-valid candidates.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{OffkeyError, Result};
use crate::spelling::COMMON_WORDS;

/// Rank assigned to words absent from the table: effectively "rarest known".
pub const UNRANKED: u32 = u32::MAX;

/// Read-only word → rank mapping.
#[derive(Debug, Clone, Default)]
pub struct WordRank {
    ranks: HashMap<String, u32>,
}

impl WordRank {
    /// Create an empty rank table.
    pub fn new() -> Self {
        WordRank::default()
    }

    /// Register a word at the given rank.
    pub fn insert(&mut self, word: &str, rank: u32) {
        self.ranks.insert(word.to_lowercase(), rank);
    }

    /// The rank of a word, [`UNRANKED`] when unknown.
    pub fn rank(&self, word: &str) -> u32 {
        self.ranks
            .get(&word.to_lowercase())
            .copied()
            .unwrap_or(UNRANKED)
    }

    /// Number of ranked words.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// True when no words are ranked.
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Load a rank table from a file with `word rank` lines.
    ///
    /// Malformed lines are a fatal configuration error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut table = WordRank::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let mut parts = line.split_whitespace();
            let entry = parts
                .next()
                .zip(parts.next())
                .and_then(|(word, rank)| rank.parse::<u32>().ok().map(|rank| (word, rank)));
            match entry {
                Some((word, rank)) => table.insert(word, rank),
                None => {
                    return Err(OffkeyError::frequency(format!(
                        "malformed rank line {}: {line:?}",
                        line_num + 1
                    )))
                }
            }
        }

        Ok(table)
    }

    /// The built-in English ranks: position in the common-word list.
    pub fn english() -> Self {
        let mut table = WordRank::new();
        for (position, word) in COMMON_WORDS.iter().enumerate() {
            table.insert(word, position as u32 + 1);
        }
        table
    }
}
