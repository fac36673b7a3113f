//! Candidate scoring and best-guess selection.
//!
//! The dictionary and frequency table are injected capabilities, so tests
//! run against doubles instead of process-wide state.

use crate::error::{OffkeyError, Result};
use crate::shift::resolver::{Candidate, Offset, ShiftResolver};
use crate::spelling::levenshtein;
use crate::spelling::rank::WordRank;
use crate::spelling::Dictionary;

/// The outcome of correcting one typed word.
#[derive(Debug, Clone)]
pub struct Correction {
    /// The word as typed.
    pub input: String,
    /// The best-guess corrected word.
    pub guess: String,
    /// The offset that produced the guess.
    pub offset: Offset,
    /// Every surviving candidate, identity first, for diagnostics.
    pub candidates: Vec<Candidate>,
}

/// Choose the best guess among surviving candidates.
///
/// A single dictionary-valid candidate wins outright. Among several valid
/// candidates the lowest frequency rank (most common word) wins. When none
/// is valid, each candidate is scored by the similarity ratio between it and
/// its dictionary's top suggestion, highest ratio winning; a candidate with
/// no suggestion scores 0. Ties resolve to the earliest candidate, identity
/// first.
pub fn select(
    input: &str,
    candidates: Vec<Candidate>,
    dictionary: &dyn Dictionary,
    ranks: &WordRank,
) -> Result<Correction> {
    if candidates.is_empty() {
        return Err(OffkeyError::uncorrectable(format!(
            "every reinterpretation of {input:?} was discarded"
        )));
    }

    let valid: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| dictionary.is_valid_word(&c.word))
        .map(|(i, _)| i)
        .collect();

    let chosen = match valid.len() {
        1 => valid[0],
        0 => best_by_suggestion(&candidates, dictionary),
        _ => valid
            .iter()
            .copied()
            .min_by_key(|&i| ranks.rank(&candidates[i].word))
            .unwrap_or(0),
    };

    let best = &candidates[chosen];
    log::debug!(
        "{input:?} -> {:?} via {} ({} valid of {} candidates)",
        best.word,
        best.offset,
        valid.len(),
        candidates.len()
    );

    Ok(Correction {
        input: input.to_string(),
        guess: best.word.clone(),
        offset: best.offset,
        candidates,
    })
}

/// Fallback when no candidate is a dictionary word: nearest top suggestion.
fn best_by_suggestion(candidates: &[Candidate], dictionary: &dyn Dictionary) -> usize {
    let mut best = 0;
    let mut best_ratio = -1.0;
    for (i, candidate) in candidates.iter().enumerate() {
        let ratio = dictionary
            .suggest(&candidate.word)
            .first()
            .map(|suggestion| levenshtein::ratio(&candidate.word, suggestion))
            .unwrap_or(0.0);
        if ratio > best_ratio {
            best = i;
            best_ratio = ratio;
        }
    }
    best
}

impl<'a> ShiftResolver<'a> {
    /// Resolve and score in one step: the best-guess correction for a word.
    pub fn correct(
        &self,
        word: &str,
        dictionary: &dyn Dictionary,
        ranks: &WordRank,
    ) -> Result<Correction> {
        let candidates = self.candidates(word)?;
        select(word, candidates, dictionary, ranks)
    }
}
