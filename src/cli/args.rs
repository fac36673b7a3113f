//! Command line argument parsing for the offkey CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// offkey - corrects words typed with hands offset from the home row
#[derive(Parser, Debug, Clone)]
#[command(name = "offkey")]
#[command(about = "Guess the intended word behind off-home-row typing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OffkeyArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Keyboard layout JSON file (built-in QWERTY when omitted)
    #[arg(long, value_name = "LAYOUT_FILE")]
    pub layout: Option<PathBuf>,

    /// Dictionary file with "word frequency" lines (built-in English when omitted)
    #[arg(long, value_name = "DICT_FILE")]
    pub dictionary: Option<PathBuf>,

    /// Word-rank file with "word rank" lines (built-in ranks when omitted)
    #[arg(long, value_name = "RANK_FILE")]
    pub frequency: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OffkeyArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON, one value per result
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct one or more typed words
    Correct(CorrectArgs),

    /// Read one word per line from stdin until "exit" or "quit"
    Interactive,

    /// Show every key of the layout with its neighbors
    Layout,
}

/// Arguments for one-shot correction
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Include the full candidate list in the output
    #[arg(short, long)]
    pub candidates: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_correct_command() {
        let args = OffkeyArgs::parse_from(["offkey", "correct", "gwkki"]);
        match args.command {
            Command::Correct(ref c) => assert_eq!(c.words, vec!["gwkki".to_string()]),
            _ => panic!("expected correct command"),
        }
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = OffkeyArgs::parse_from(["offkey", "-q", "-vvv", "interactive"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_format_and_layout_flags() {
        let args = OffkeyArgs::parse_from([
            "offkey",
            "--format",
            "json",
            "--layout",
            "dvorak.json",
            "layout",
        ]);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.layout.as_deref().unwrap().to_str(), Some("dvorak.json"));
    }
}
