//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OffkeyArgs, OutputFormat};
use crate::error::Result;
use crate::keyboard::{Direction, Hand, Keyboard};
use crate::shift::{Candidate, Correction};

/// One candidate reinterpretation, for diagnostics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CandidateOutput {
    pub offset: String,
    pub word: String,
}

/// Result structure for a corrected word.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionOutput {
    pub input: String,
    pub guess: String,
    pub offset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<CandidateOutput>>,
}

impl CorrectionOutput {
    pub fn from_correction(correction: &Correction, with_candidates: bool) -> Self {
        CorrectionOutput {
            input: correction.input.clone(),
            guess: correction.guess.clone(),
            offset: correction.offset.to_string(),
            candidates: with_candidates.then(|| {
                correction
                    .candidates
                    .iter()
                    .map(|Candidate { offset, word }| CandidateOutput {
                        offset: offset.to_string(),
                        word: word.clone(),
                    })
                    .collect()
            }),
        }
    }
}

/// One adjacency link in the layout view.
#[derive(Debug, Serialize, Deserialize)]
pub struct NeighborOutput {
    pub direction: String,
    pub letter: char,
}

/// One key of the layout view.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeyOutput {
    pub letter: char,
    pub upper: char,
    pub caps_mod: bool,
    pub physical: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand: Option<Hand>,
    pub neighbors: Vec<NeighborOutput>,
}

/// Result structure for the layout view.
#[derive(Debug, Serialize, Deserialize)]
pub struct LayoutOutput {
    pub keys: Vec<KeyOutput>,
}

impl LayoutOutput {
    pub fn from_keyboard(keyboard: &Keyboard) -> Self {
        let keys = keyboard
            .keys()
            .map(|(_, key)| KeyOutput {
                // Placeholder keys render as the hyphen sentinel.
                letter: if key.physical { key.lower } else { '-' },
                upper: key.upper,
                caps_mod: key.caps_mod,
                physical: key.physical,
                hand: key.hand,
                neighbors: Direction::ALL
                    .iter()
                    .filter_map(|&direction| {
                        key.neighbor(direction).map(|id| NeighborOutput {
                            direction: direction.to_string(),
                            letter: keyboard.key(id).lower,
                        })
                    })
                    .collect(),
            })
            .collect();
        LayoutOutput { keys }
    }
}

/// Human rendering for a result type.
pub trait HumanRender {
    fn render(&self, args: &OffkeyArgs);
}

impl HumanRender for CorrectionOutput {
    fn render(&self, args: &OffkeyArgs) {
        if args.verbosity() > 1 {
            println!("{} -> {} ({})", self.input, self.guess, self.offset);
        } else {
            println!("{}", self.guess);
        }
        if let Some(candidates) = &self.candidates {
            for candidate in candidates {
                println!("  {:12} {}", candidate.offset, candidate.word);
            }
        }
    }
}

impl HumanRender for LayoutOutput {
    fn render(&self, _args: &OffkeyArgs) {
        for key in &self.keys {
            let flags = match (key.caps_mod, key.physical) {
                (true, _) => " [caps]",
                (_, false) => " [placeholder]",
                _ => "",
            };
            print!("{} ({}){flags}:", key.letter, key.upper);
            for neighbor in &key.neighbors {
                print!(" {}={}", neighbor.direction, neighbor.letter);
            }
            println!();
        }
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanRender>(result: &T, args: &OffkeyArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            result.render(args);
            Ok(())
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
            Ok(())
        }
    }
}
