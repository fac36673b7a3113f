//! Keyboard layout records.
//!
//! A layout is an ordered collection of [`KeyRecord`]s, usually loaded from a
//! JSON file. Each record names its own letters and, for each of the six
//! spatial directions, the lower-case letter of the neighboring key (absent
//! when the keyboard simply ends there). Records reference each other by
//! letter; resolution into an actual graph happens in
//! [`Keyboard::build`](crate::keyboard::Keyboard::build).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::keyboard::graph::Direction;

/// Which hand normally operates a key. Informational: shifting is uniform
/// across both hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Left,
    Right,
}

/// One key of a layout, as stored in layout data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyRecord {
    /// The character produced unshifted.
    pub letter: char,
    /// The character produced with shift/caps active.
    pub upper: char,
    /// Whether pressing this key toggles caps-lock interpretation.
    #[serde(default)]
    pub caps_mod: bool,
    /// Hand designation, if the layout provides one.
    #[serde(default)]
    pub hand: Option<Hand>,
    /// Whether this is a real, typeable key. Placeholder keys (tab, shift)
    /// occupy grid positions but can never be part of a word.
    #[serde(default = "default_physical")]
    pub physical: bool,
    #[serde(default)]
    pub left: Option<char>,
    #[serde(default)]
    pub top_left: Option<char>,
    #[serde(default)]
    pub top_right: Option<char>,
    #[serde(default)]
    pub right: Option<char>,
    #[serde(default)]
    pub bottom_left: Option<char>,
    #[serde(default)]
    pub bottom_right: Option<char>,
}

fn default_physical() -> bool {
    true
}

impl KeyRecord {
    /// The letter of the neighboring key in the given direction, if any.
    pub fn neighbor(&self, direction: Direction) -> Option<char> {
        match direction {
            Direction::Left => self.left,
            Direction::TopLeft => self.top_left,
            Direction::TopRight => self.top_right,
            Direction::Right => self.right,
            Direction::BottomLeft => self.bottom_left,
            Direction::BottomRight => self.bottom_right,
        }
    }
}

/// Load layout records from a JSON file (an array of [`KeyRecord`]s).
///
/// Malformed records are a fatal configuration error.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<KeyRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let records: Vec<KeyRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}

/// Sentinel letter used by the built-in layout for the caps-lock key.
pub const CAPS_LETTER: char = '\u{21ea}'; // ⇪

/// Sentinel letter used by the built-in layout for the tab placeholder.
pub const TAB_LETTER: char = '\u{21e5}'; // ⇥

/// Sentinel letter used by the built-in layout for the left-shift placeholder.
pub const SHIFT_LETTER: char = '\u{21e7}'; // ⇧

const TOP_ROW: (&str, &str) = ("qwertyuiop", "QWERTYUIOP");
const HOME_ROW: (&str, &str) = ("asdfghjkl;", "ASDFGHJKL:");
const BOTTOM_ROW: (&str, &str) = ("zxcvbnm,./", "ZXCVBNM<>?");

/// The built-in US QWERTY layout.
///
/// Three staggered letter rows plus the caps-lock key and two non-physical
/// placeholders (tab, left shift) along the left edge, so shifts toward the
/// edge hit real grid positions rather than falling off the board.
pub fn qwerty() -> Vec<KeyRecord> {
    let rows: [(Vec<char>, Vec<char>); 3] = [
        (TOP_ROW.0.chars().collect(), TOP_ROW.1.chars().collect()),
        (HOME_ROW.0.chars().collect(), HOME_ROW.1.chars().collect()),
        (BOTTOM_ROW.0.chars().collect(), BOTTOM_ROW.1.chars().collect()),
    ];

    let mut records = Vec::new();
    for (row_idx, (lowers, uppers)) in rows.iter().enumerate() {
        for (col, (&lower, &upper)) in lowers.iter().zip(uppers.iter()).enumerate() {
            let above = row_idx.checked_sub(1).map(|r| &rows[r].0);
            let below = rows.get(row_idx + 1).map(|r| &r.0);
            records.push(KeyRecord {
                letter: lower,
                upper,
                caps_mod: false,
                hand: Some(if col < 5 { Hand::Left } else { Hand::Right }),
                physical: true,
                left: col.checked_sub(1).map(|c| lowers[c]),
                right: lowers.get(col + 1).copied(),
                // Row stagger: the key above-left shares this key's column
                // index in the row above, above-right is one column over.
                top_left: above.and_then(|r| r.get(col).copied()),
                top_right: above.and_then(|r| r.get(col + 1).copied()),
                bottom_left: below.and_then(|r| col.checked_sub(1).and_then(|c| r.get(c).copied())),
                bottom_right: below.and_then(|r| r.get(col).copied()),
            });
        }
    }

    // Left-edge column: tab above caps above left-shift, linked into the
    // letter grid so a one-column-left shift stays on the board.
    records.push(KeyRecord {
        letter: TAB_LETTER,
        upper: TAB_LETTER,
        caps_mod: false,
        hand: Some(Hand::Left),
        physical: false,
        left: None,
        top_left: None,
        top_right: None,
        right: Some('q'),
        bottom_left: None,
        bottom_right: Some(CAPS_LETTER),
    });
    records.push(KeyRecord {
        letter: CAPS_LETTER,
        upper: CAPS_LETTER,
        caps_mod: true,
        hand: Some(Hand::Left),
        physical: true,
        left: None,
        top_left: Some(TAB_LETTER),
        top_right: Some('q'),
        right: Some('a'),
        bottom_left: None,
        bottom_right: Some(SHIFT_LETTER),
    });
    records.push(KeyRecord {
        letter: SHIFT_LETTER,
        upper: SHIFT_LETTER,
        caps_mod: false,
        hand: Some(Hand::Left),
        physical: false,
        left: None,
        top_left: Some(CAPS_LETTER),
        top_right: Some('a'),
        right: Some('z'),
        bottom_left: None,
        bottom_right: None,
    });

    // Back-links from the letter grid into the edge column.
    for record in &mut records {
        match record.letter {
            'q' => {
                record.left = Some(TAB_LETTER);
                record.bottom_left = Some(CAPS_LETTER);
            }
            'a' => {
                record.left = Some(CAPS_LETTER);
                record.bottom_left = Some(SHIFT_LETTER);
            }
            'z' => {
                record.left = Some(SHIFT_LETTER);
            }
            _ => {}
        }
    }

    records
}
