//! Word dictionary with frequency-aware suggestions.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{OffkeyError, Result};
use crate::spelling::levenshtein;
use crate::spelling::{Dictionary, COMMON_WORDS};

/// Maximum edit distance for suggestions.
const MAX_SUGGEST_DISTANCE: usize = 2;

/// Maximum number of suggestions returned per word.
const MAX_SUGGESTIONS: usize = 5;

/// A dictionary of known words and their frequencies.
///
/// Lookup is case-insensitive; words are stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    words: HashMap<String, u32>,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary::default()
    }

    /// Add a word with the given frequency, replacing any previous entry.
    pub fn add_word(&mut self, word: &str, frequency: u32) {
        self.words.insert(word.to_lowercase(), frequency);
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Get the frequency of a word, 0 when unknown.
    pub fn frequency(&self, word: &str) -> u32 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Number of unique words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Load a dictionary from a text file with one word per line.
    ///
    /// Repeated words accumulate frequency; blank lines are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = SpellingDictionary::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                let frequency = dictionary.frequency(word) + 1;
                dictionary.add_word(word, frequency);
            }
        }

        Ok(dictionary)
    }

    /// Load a dictionary from a frequency file with `word frequency` lines.
    pub fn load_from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut dictionary = SpellingDictionary::new();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let mut parts = line.split_whitespace();
            let entry = parts.next().zip(parts.next()).and_then(|(word, freq)| {
                freq.parse::<u32>().ok().map(|freq| (word, freq))
            });
            match entry {
                Some((word, frequency)) => dictionary.add_word(word, frequency),
                None => {
                    return Err(OffkeyError::frequency(format!(
                        "malformed dictionary line {}: {line:?}",
                        line_num + 1
                    )))
                }
            }
        }

        Ok(dictionary)
    }

    /// The built-in English dictionary, frequencies descending with rank.
    pub fn english() -> Self {
        let mut dictionary = SpellingDictionary::new();
        for (position, word) in COMMON_WORDS.iter().enumerate() {
            dictionary.add_word(word, (COMMON_WORDS.len() - position) as u32 * 100);
        }
        dictionary
    }

    /// Ordered suggestions for a possibly misspelled word.
    ///
    /// Scans the dictionary with a threshold-bounded edit distance and
    /// orders hits by distance, then frequency, then alphabetically for
    /// determinism. A word already in the dictionary suggests itself.
    pub fn suggestions(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        if self.contains(&word) {
            return vec![word];
        }

        let mut hits: Vec<(usize, u32, &str)> = self
            .words
            .iter()
            .filter_map(|(candidate, &frequency)| {
                levenshtein::distance_within(&word, candidate, MAX_SUGGEST_DISTANCE)
                    .map(|distance| (distance, frequency, candidate.as_str()))
            })
            .collect();

        hits.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)).then(a.2.cmp(b.2)));
        hits.truncate(MAX_SUGGESTIONS);
        hits.into_iter().map(|(_, _, word)| word.to_string()).collect()
    }
}

impl Dictionary for SpellingDictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        self.contains(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        self.suggestions(word)
    }
}
