//! Spelling collaborators: dictionary lookup, suggestions, and word ranks.

pub mod dictionary;
pub mod levenshtein;
pub mod rank;

pub use dictionary::SpellingDictionary;
pub use rank::WordRank;

/// The spell-check capability consumed by candidate scoring.
///
/// Kept as a trait so the scorer depends on an injected capability rather
/// than a process-wide dictionary, and tests can supply doubles.
pub trait Dictionary {
    /// Whether the word is correctly spelled.
    fn is_valid_word(&self, word: &str) -> bool;

    /// Candidate replacements for a word, best first. Possibly empty.
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// Common English words, most frequent first. Shared by the built-in
/// dictionary (frequencies) and the built-in rank table (positions).
pub(crate) const COMMON_WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say",
    "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so",
    "up", "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like",
    "time", "no", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some",
    "could", "them", "see", "other", "than", "then", "now", "look", "only", "come", "its", "over",
    "think", "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way",
    "even", "new", "want", "because", "any", "these", "give", "day", "most", "us", "is", "was",
    "are", "been", "has", "had", "were", "said", "did", "hello", "world", "word", "home", "help",
    "hand", "right", "life", "love", "house", "water", "place", "find", "tell", "ask", "man",
    "thing", "woman", "try", "leave", "call",
];
