//! The keyboard adjacency graph.
//!
//! [`Keyboard`] owns every [`Key`] in input order; neighbor links are indices
//! into that collection, resolved once at build time through a lower-letter
//! index instead of rescanning the key list per neighbor. The reverse index
//! maps every lower and upper letter to its owning key.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{OffkeyError, Result};
use crate::keyboard::layout::{self, Hand, KeyRecord};

/// Handle of a key inside its owning [`Keyboard`].
pub type KeyId = usize;

/// One of the six spatial offsets defining key adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    TopLeft,
    TopRight,
    Right,
    BottomLeft,
    BottomRight,
}

impl Direction {
    /// All directions, in candidate enumeration order.
    pub const ALL: [Direction; 6] = [
        Direction::Left,
        Direction::TopLeft,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomLeft,
        Direction::BottomRight,
    ];

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::TopLeft => Direction::BottomRight,
            Direction::TopRight => Direction::BottomLeft,
            Direction::Right => Direction::Left,
            Direction::BottomLeft => Direction::TopRight,
            Direction::BottomRight => Direction::TopLeft,
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::TopLeft => 1,
            Direction::TopRight => 2,
            Direction::Right => 3,
            Direction::BottomLeft => 4,
            Direction::BottomRight => 5,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::TopLeft => "top-left",
            Direction::TopRight => "top-right",
            Direction::Right => "right",
            Direction::BottomLeft => "bottom-left",
            Direction::BottomRight => "bottom-right",
        };
        write!(f, "{name}")
    }
}

/// One physical key, fully linked into its keyboard.
#[derive(Debug, Clone)]
pub struct Key {
    /// The character produced unshifted.
    pub lower: char,
    /// The character produced with shift/caps active.
    pub upper: char,
    /// Whether pressing this key toggles caps-lock interpretation.
    pub caps_mod: bool,
    /// Hand designation from the layout, if any.
    pub hand: Option<Hand>,
    /// Whether this is a real, typeable key.
    pub physical: bool,
    neighbors: [Option<KeyId>; 6],
}

impl Key {
    /// The neighboring key in the given direction, if one exists.
    pub fn neighbor(&self, direction: Direction) -> Option<KeyId> {
        self.neighbors[direction.index()]
    }
}

/// An immutable keyboard: the full set of keys plus the character reverse
/// index. Built once at startup, never mutated.
#[derive(Debug, Clone)]
pub struct Keyboard {
    keys: Vec<Key>,
    by_char: HashMap<char, KeyId>,
    caps: Option<KeyId>,
}

impl Keyboard {
    /// Build a fully linked keyboard from ordered layout records.
    ///
    /// Neighbor letters that name no key in the layout yield absent
    /// neighbors (edge-of-keyboard keys legitimately have them). Two keys
    /// sharing a letter is rejected: silently letting the later key win the
    /// reverse index would hide a data error.
    pub fn build(records: &[KeyRecord]) -> Result<Keyboard> {
        let mut keys = Vec::with_capacity(records.len());
        let mut by_lower: HashMap<char, KeyId> = HashMap::new();

        for (id, record) in records.iter().enumerate() {
            if let Some(previous) = by_lower.insert(record.letter, id) {
                return Err(OffkeyError::layout(format!(
                    "keys {previous} and {id} share the letter {:?}",
                    record.letter
                )));
            }
            keys.push(Key {
                lower: record.letter,
                upper: record.upper,
                caps_mod: record.caps_mod,
                hand: record.hand,
                physical: record.physical,
                neighbors: [None; 6],
            });
        }

        for (id, record) in records.iter().enumerate() {
            for direction in Direction::ALL {
                keys[id].neighbors[direction.index()] = record
                    .neighbor(direction)
                    .and_then(|letter| by_lower.get(&letter).copied());
            }
        }

        let mut by_char = by_lower;
        for (id, key) in keys.iter().enumerate() {
            if key.upper == key.lower {
                continue;
            }
            if let Some(&previous) = by_char.get(&key.upper) {
                return Err(OffkeyError::layout(format!(
                    "keys {previous} and {id} share the letter {:?}",
                    key.upper
                )));
            }
            by_char.insert(key.upper, id);
        }

        let caps = keys.iter().position(|key| key.caps_mod);

        log::debug!(
            "built keyboard: {} keys, {} indexed characters",
            keys.len(),
            by_char.len()
        );

        Ok(Keyboard {
            keys,
            by_char,
            caps,
        })
    }

    /// The built-in US QWERTY keyboard.
    pub fn qwerty() -> Keyboard {
        Keyboard::build(&layout::qwerty()).expect("built-in QWERTY layout is well-formed")
    }

    /// Load and build a keyboard from a JSON layout file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Keyboard> {
        let records = layout::load_records(path)?;
        Keyboard::build(&records)
    }

    /// The key behind a handle.
    pub fn key(&self, id: KeyId) -> &Key {
        &self.keys[id]
    }

    /// Keys in layout order.
    pub fn keys(&self) -> impl Iterator<Item = (KeyId, &Key)> {
        self.keys.iter().enumerate()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when the keyboard has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Reverse lookup: the key producing this character (lower or upper).
    pub fn key_for_char(&self, c: char) -> Option<KeyId> {
        self.by_char.get(&c).copied()
    }

    /// The caps-lock key, if the layout defines one.
    pub fn caps_key(&self) -> Option<KeyId> {
        self.caps
    }

    /// The neighbor of a key in the given direction.
    pub fn neighbor(&self, id: KeyId, direction: Direction) -> Option<KeyId> {
        self.keys[id].neighbor(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::layout::CAPS_LETTER;

    fn record(letter: char, upper: char) -> KeyRecord {
        KeyRecord {
            letter,
            upper,
            caps_mod: false,
            hand: None,
            physical: true,
            left: None,
            top_left: None,
            top_right: None,
            right: None,
            bottom_left: None,
            bottom_right: None,
        }
    }

    #[test]
    fn test_build_links_neighbors() {
        let mut h = record('h', 'H');
        h.right = Some('j');
        let mut j = record('j', 'J');
        j.left = Some('h');

        let keyboard = Keyboard::build(&[h, j]).unwrap();
        let h_id = keyboard.key_for_char('h').unwrap();
        let j_id = keyboard.key_for_char('j').unwrap();

        assert_eq!(keyboard.neighbor(h_id, Direction::Right), Some(j_id));
        assert_eq!(keyboard.neighbor(j_id, Direction::Left), Some(h_id));
        assert_eq!(keyboard.neighbor(h_id, Direction::Left), None);
    }

    #[test]
    fn test_unknown_neighbor_letter_is_absent() {
        let mut h = record('h', 'H');
        h.right = Some('x');

        let keyboard = Keyboard::build(&[h]).unwrap();
        let h_id = keyboard.key_for_char('h').unwrap();
        assert_eq!(keyboard.neighbor(h_id, Direction::Right), None);
    }

    #[test]
    fn test_duplicate_lower_letter_rejected() {
        let result = Keyboard::build(&[record('a', 'A'), record('a', 'B')]);
        assert!(matches!(result, Err(OffkeyError::Layout(_))));
    }

    #[test]
    fn test_duplicate_upper_letter_rejected() {
        let result = Keyboard::build(&[record('a', 'X'), record('b', 'X')]);
        assert!(matches!(result, Err(OffkeyError::Layout(_))));
    }

    #[test]
    fn test_reverse_index_covers_both_cases() {
        let keyboard = Keyboard::build(&[record('a', 'A')]).unwrap();
        assert_eq!(keyboard.key_for_char('a'), keyboard.key_for_char('A'));
        assert_eq!(keyboard.key_for_char('b'), None);
    }

    #[test]
    fn test_qwerty_adjacency() {
        let keyboard = Keyboard::qwerty();
        let key_of = |c: char| keyboard.key_for_char(c).unwrap();

        assert_eq!(
            keyboard.neighbor(key_of('g'), Direction::Right),
            Some(key_of('h'))
        );
        assert_eq!(
            keyboard.neighbor(key_of('k'), Direction::Right),
            Some(key_of('l'))
        );
        assert_eq!(
            keyboard.neighbor(key_of('i'), Direction::Right),
            Some(key_of('o'))
        );
        // Board edge.
        assert_eq!(keyboard.neighbor(key_of('p'), Direction::Right), None);
    }

    #[test]
    fn test_qwerty_caps_key() {
        let keyboard = Keyboard::qwerty();
        let caps = keyboard.caps_key().unwrap();
        assert!(keyboard.key(caps).caps_mod);
        assert_eq!(keyboard.key(caps).lower, CAPS_LETTER);
        assert_eq!(
            keyboard.neighbor(caps, Direction::Right),
            keyboard.key_for_char('a')
        );
    }

    #[test]
    fn test_qwerty_neighbor_symmetry() {
        // Well-formed layout data: every link is mirrored by its opposite.
        let keyboard = Keyboard::qwerty();
        for (id, key) in keyboard.keys() {
            for direction in Direction::ALL {
                if let Some(neighbor) = key.neighbor(direction) {
                    assert_eq!(
                        keyboard.neighbor(neighbor, direction.opposite()),
                        Some(id),
                        "asymmetric link {:?} -> {:?} ({direction})",
                        key.lower,
                        keyboard.key(neighbor).lower,
                    );
                }
            }
        }
    }
}
