//! Reconstructs keystroke sequences and enumerates shifted reinterpretations.
//!
//! A typist whose hands sit one key away from the home row produces the
//! neighbor of every key they mean to press, including the caps-lock key.
//! Correction therefore works on keystrokes, not characters: the typed word
//! is tokenized into keys, virtual caps-lock presses are inserted where the
//! observed case changes, and the whole sequence is remapped through each
//! spatial offset. Each offset that keeps every keystroke on the board
//! yields one candidate word.

use std::fmt;

use crate::error::{OffkeyError, Result};
use crate::keyboard::{Direction, KeyId, Keyboard};

/// One observed keystroke: a key plus the character it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub key: KeyId,
    pub ch: char,
}

/// The offset applied to produce a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// No offset: the user may not have been shifted at all.
    Identity,
    /// Every keystroke moved one key in this direction.
    Toward(Direction),
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Identity => write!(f, "identity"),
            Offset::Toward(direction) => write!(f, "{direction}"),
        }
    }
}

/// All candidate offsets, identity first.
pub const OFFSETS: [Offset; 7] = [
    Offset::Identity,
    Offset::Toward(Direction::Left),
    Offset::Toward(Direction::TopLeft),
    Offset::Toward(Direction::TopRight),
    Offset::Toward(Direction::Right),
    Offset::Toward(Direction::BottomLeft),
    Offset::Toward(Direction::BottomRight),
];

/// One fully remapped reinterpretation of the input word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub offset: Offset,
    pub word: String,
}

/// Case state tracked during caps reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Lower,
    Upper,
}

impl Case {
    fn toggled(self) -> Case {
        match self {
            Case::Lower => Case::Upper,
            Case::Upper => Case::Lower,
        }
    }
}

/// Enumerates the plausible shifted reinterpretations of typed words over an
/// immutable keyboard.
pub struct ShiftResolver<'a> {
    keyboard: &'a Keyboard,
}

impl<'a> ShiftResolver<'a> {
    pub fn new(keyboard: &'a Keyboard) -> Self {
        ShiftResolver { keyboard }
    }

    /// Convert a typed word into keystroke tokens via the reverse index.
    ///
    /// A character with no key mapping makes correction impossible for the
    /// whole word and is reported as an error, not skipped.
    pub fn tokenize(&self, word: &str) -> Result<Vec<Token>> {
        word.chars()
            .map(|ch| match self.keyboard.key_for_char(ch) {
                Some(key) => Ok(Token { key, ch }),
                None => Err(OffkeyError::UnmappedChar(ch)),
            })
            .collect()
    }

    /// Insert the virtual caps-lock keystrokes implied by case transitions.
    ///
    /// Scans left to right tracking whether each character matches its key's
    /// lower or upper letter (initially lower); a change of state emits one
    /// caps-key token before the current token. Existing caps tokens toggle
    /// the tracked state instead of being compared, so running the pass over
    /// an already reconstructed sequence changes nothing.
    pub fn reconstruct_caps(&self, tokens: &[Token]) -> Result<Vec<Token>> {
        let mut result = Vec::with_capacity(tokens.len());
        let mut state = Case::Lower;

        for &token in tokens {
            let key = self.keyboard.key(token.key);
            if key.caps_mod {
                state = state.toggled();
                result.push(token);
                continue;
            }

            let observed = if token.ch == key.upper && token.ch != key.lower {
                Case::Upper
            } else {
                Case::Lower
            };
            if observed != state {
                let caps = self.keyboard.caps_key().ok_or_else(|| {
                    OffkeyError::layout("layout has no caps-lock key to reconstruct case changes")
                })?;
                result.push(Token {
                    key: caps,
                    ch: self.keyboard.key(caps).lower,
                });
                state = observed;
            }
            result.push(token);
        }

        Ok(result)
    }

    /// Remap a keystroke sequence through one offset and render the word.
    ///
    /// Returns `None` when any keystroke has no neighbor in that direction
    /// or lands on a non-physical key: such a candidate cannot be a real
    /// word. Caps-lock keys toggle rather than type, so they contribute no
    /// letter.
    fn remap(&self, tokens: &[Token], offset: Offset) -> Option<String> {
        let mut word = String::with_capacity(tokens.len());
        for token in tokens {
            let target = match offset {
                Offset::Identity => token.key,
                Offset::Toward(direction) => self.keyboard.neighbor(token.key, direction)?,
            };
            let key = self.keyboard.key(target);
            if key.caps_mod {
                continue;
            }
            if !key.physical {
                return None;
            }
            word.push(key.lower);
        }
        Some(word)
    }

    /// The surviving reinterpretations of a typed word, identity first.
    pub fn candidates(&self, word: &str) -> Result<Vec<Candidate>> {
        let tokens = self.tokenize(word)?;
        let tokens = self.reconstruct_caps(&tokens)?;

        let candidates: Vec<Candidate> = OFFSETS
            .iter()
            .filter_map(|&offset| {
                self.remap(&tokens, offset)
                    .map(|word| Candidate { offset, word })
            })
            .collect();

        log::debug!(
            "{word:?}: {} of {} offsets survive",
            candidates.len(),
            OFFSETS.len()
        );
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::layout::CAPS_LETTER;

    fn qwerty() -> Keyboard {
        Keyboard::qwerty()
    }

    #[test]
    fn test_tokenize_maps_every_char() {
        let keyboard = qwerty();
        let resolver = ShiftResolver::new(&keyboard);

        let tokens = resolver.tokenize("hj").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].ch, 'h');
        assert_eq!(tokens[0].key, keyboard.key_for_char('h').unwrap());
    }

    #[test]
    fn test_tokenize_unmapped_char_is_error() {
        let keyboard = qwerty();
        let resolver = ShiftResolver::new(&keyboard);

        match resolver.tokenize("h7") {
            Err(OffkeyError::UnmappedChar('7')) => {}
            other => panic!("expected UnmappedChar('7'), got {other:?}"),
        }
    }

    #[test]
    fn test_caps_reconstruction_inserts_before_transition() {
        let keyboard = qwerty();
        let resolver = ShiftResolver::new(&keyboard);

        // "AJ": one transition to upper before position 0, none after.
        let tokens = resolver.tokenize("AJ").unwrap();
        let reconstructed = resolver.reconstruct_caps(&tokens).unwrap();

        assert_eq!(reconstructed.len(), 3);
        assert_eq!(reconstructed[0].key, keyboard.caps_key().unwrap());
        assert_eq!(reconstructed[1].ch, 'A');
        assert_eq!(reconstructed[2].ch, 'J');
    }

    #[test]
    fn test_caps_reconstruction_round_trip_back_to_lower() {
        let keyboard = qwerty();
        let resolver = ShiftResolver::new(&keyboard);

        // "Hi" transitions to upper at 'H' and back to lower at 'i'.
        let tokens = resolver.tokenize("Hi").unwrap();
        let reconstructed = resolver.reconstruct_caps(&tokens).unwrap();

        let caps = keyboard.caps_key().unwrap();
        let caps_positions: Vec<usize> = reconstructed
            .iter()
            .enumerate()
            .filter(|(_, t)| t.key == caps)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(caps_positions, vec![0, 2]);
    }

    #[test]
    fn test_caps_reconstruction_is_idempotent() {
        let keyboard = qwerty();
        let resolver = ShiftResolver::new(&keyboard);

        let tokens = resolver.tokenize("AJ").unwrap();
        let once = resolver.reconstruct_caps(&tokens).unwrap();
        let twice = resolver.reconstruct_caps(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_caps_reconstruction_without_caps_key_is_layout_error() {
        use crate::keyboard::KeyRecord;

        // A layout with no caps-mod key cannot represent case transitions.
        let records = vec![KeyRecord {
            letter: 'h',
            upper: 'H',
            caps_mod: false,
            hand: None,
            physical: true,
            left: None,
            top_left: None,
            top_right: None,
            right: None,
            bottom_left: None,
            bottom_right: None,
        }];
        let keyboard = Keyboard::build(&records).unwrap();
        let resolver = ShiftResolver::new(&keyboard);

        match resolver.candidates("H") {
            Err(OffkeyError::Layout(_)) => {}
            other => panic!("expected Layout error, got {other:?}"),
        }
        // Lowercase input needs no caps token and still resolves.
        assert!(resolver.candidates("h").is_ok());
    }

    #[test]
    fn test_caps_reconstruction_lowercase_is_noop() {
        let keyboard = qwerty();
        let resolver = ShiftResolver::new(&keyboard);

        let tokens = resolver.tokenize("hello").unwrap();
        let reconstructed = resolver.reconstruct_caps(&tokens).unwrap();
        assert_eq!(tokens, reconstructed);
    }

    #[test]
    fn test_candidates_identity_first() {
        let keyboard = qwerty();
        let resolver = ShiftResolver::new(&keyboard);

        let candidates = resolver.candidates("hello").unwrap();
        assert!(!candidates.is_empty());
        assert_eq!(candidates[0].offset, Offset::Identity);
        assert_eq!(candidates[0].word, "hello");
    }

    #[test]
    fn test_candidates_right_shift_recovers_hello() {
        let keyboard = qwerty();
        let resolver = ShiftResolver::new(&keyboard);

        let candidates = resolver.candidates("gwkki").unwrap();
        let right = candidates
            .iter()
            .find(|c| c.offset == Offset::Toward(Direction::Right))
            .expect("right-shift candidate should survive");
        assert_eq!(right.word, "hello");
    }

    #[test]
    fn test_candidates_discard_edge_falls() {
        let keyboard = qwerty();
        let resolver = ShiftResolver::new(&keyboard);

        // 'p' has no right neighbor, so the right-shift candidate dies.
        let candidates = resolver.candidates("p").unwrap();
        assert!(candidates
            .iter()
            .all(|c| c.offset != Offset::Toward(Direction::Right)));
        assert_eq!(candidates[0].offset, Offset::Identity);
    }

    #[test]
    fn test_candidates_discard_nonphysical_targets() {
        let keyboard = qwerty();
        let resolver = ShiftResolver::new(&keyboard);

        // 'z' left-shifts onto the left-shift placeholder.
        let candidates = resolver.candidates("zz").unwrap();
        assert!(candidates
            .iter()
            .all(|c| c.offset != Offset::Toward(Direction::Left)));
    }

    #[test]
    fn test_caps_token_emits_no_letter() {
        let keyboard = qwerty();
        let resolver = ShiftResolver::new(&keyboard);

        let candidates = resolver.candidates("AJ").unwrap();
        assert_eq!(candidates[0].word, "aj");
        assert!(!candidates[0].word.contains(CAPS_LETTER));
    }

    #[test]
    fn test_shift_round_trip_over_opposites() {
        // Shifting one step toward D and then toward D's opposite returns
        // every key to itself wherever both links exist.
        let keyboard = qwerty();
        for (id, key) in keyboard.keys() {
            for direction in Direction::ALL {
                if let Some(there) = key.neighbor(direction) {
                    assert_eq!(
                        keyboard.neighbor(there, direction.opposite()),
                        Some(id),
                        "{:?} did not round-trip via {direction}",
                        key.lower
                    );
                }
            }
        }
    }
}
