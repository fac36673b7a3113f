//! Command implementations for the offkey CLI.

use std::io::{self, BufRead, Write};

use log::info;

use crate::cli::args::{Command, CorrectArgs, OffkeyArgs};
use crate::cli::output::{output_result, CorrectionOutput, LayoutOutput};
use crate::error::Result;
use crate::keyboard::Keyboard;
use crate::shift::ShiftResolver;
use crate::spelling::{SpellingDictionary, WordRank};

/// Execute a CLI command.
pub fn execute_command(args: OffkeyArgs) -> Result<()> {
    match &args.command {
        Command::Correct(correct_args) => correct_words(correct_args.clone(), &args),
        Command::Interactive => interactive(&args),
        Command::Layout => show_layout(&args),
    }
}

/// Load the keyboard selected on the command line.
fn load_keyboard(args: &OffkeyArgs) -> Result<Keyboard> {
    match &args.layout {
        Some(path) => {
            info!("loading layout from {}", path.display());
            Keyboard::from_file(path)
        }
        None => Ok(Keyboard::qwerty()),
    }
}

/// Load the dictionary selected on the command line.
fn load_dictionary(args: &OffkeyArgs) -> Result<SpellingDictionary> {
    match &args.dictionary {
        Some(path) => {
            info!("loading dictionary from {}", path.display());
            SpellingDictionary::load_from_frequency_file(path)
        }
        None => Ok(SpellingDictionary::english()),
    }
}

/// Load the word-rank table selected on the command line.
fn load_ranks(args: &OffkeyArgs) -> Result<WordRank> {
    match &args.frequency {
        Some(path) => {
            info!("loading word ranks from {}", path.display());
            WordRank::load_from_file(path)
        }
        None => Ok(WordRank::english()),
    }
}

/// Correct words given on the command line.
fn correct_words(args: CorrectArgs, cli_args: &OffkeyArgs) -> Result<()> {
    let keyboard = load_keyboard(cli_args)?;
    let dictionary = load_dictionary(cli_args)?;
    let ranks = load_ranks(cli_args)?;
    let resolver = ShiftResolver::new(&keyboard);

    for word in &args.words {
        match resolver.correct(word, &dictionary, &ranks) {
            Ok(correction) => {
                let output = CorrectionOutput::from_correction(&correction, args.candidates);
                output_result(&output, cli_args)?;
            }
            // Word-local failures are reported, the remaining words still run.
            Err(e) if e.is_word_local() => eprintln!("{word}: uncorrectable ({e})"),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Read one word per line from stdin until a sentinel exit command.
fn interactive(cli_args: &OffkeyArgs) -> Result<()> {
    let keyboard = load_keyboard(cli_args)?;
    let dictionary = load_dictionary(cli_args)?;
    let ranks = load_ranks(cli_args)?;
    let resolver = ShiftResolver::new(&keyboard);

    if cli_args.verbosity() > 0 {
        println!("Type a word per line; \"exit\" or \"quit\" to stop.");
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if word == "exit" || word == "quit" {
            break;
        }

        match resolver.correct(word, &dictionary, &ranks) {
            Ok(correction) => {
                let output = CorrectionOutput::from_correction(&correction, false);
                output_result(&output, cli_args)?;
            }
            Err(e) if e.is_word_local() => eprintln!("{word}: uncorrectable ({e})"),
            Err(e) => return Err(e),
        }
        io::stdout().flush()?;
    }

    Ok(())
}

/// Show every key of the layout with its neighbors.
fn show_layout(cli_args: &OffkeyArgs) -> Result<()> {
    let keyboard = load_keyboard(cli_args)?;
    let output = LayoutOutput::from_keyboard(&keyboard);
    output_result(&output, cli_args)
}
