//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use itertools::Itertools;
use termlaunch_core::style::TerminalStyle;

/// Command-line arguments for the `termlaunch` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use termlaunch_cli::cli_args::Args;
///
/// let args = Args::parse_from(["termlaunch", "-t", "vscode", "npm", "test"]);
/// assert_eq!(args.command_text().as_deref(), Some("npm test"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[command(about = "Open a new terminal window and run a command in it")]
pub struct Args {
    /// Where to open the command.
    #[arg(
        long,
        short = 't',
        default_value = "system",
        value_parser = PossibleValuesParser::new(TerminalStyle::NAMES)
            .try_map(|name| name.parse::<TerminalStyle>())
    )]
    pub terminal: TerminalStyle,

    /// Directory to run the command in.
    ///
    /// If not provided, defaults to the current directory. `~` is expanded.
    #[arg(long, short = 'C')]
    pub working_directory: Option<String>,

    /// Print the automation call that would open the terminal, but do not run it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// The command to run, joined with spaces.
    #[arg(trailing_var_arg = true)]
    pub command: Vec<String>,
}

impl Args {
    /// The command words joined with single spaces, or `None` if no command
    /// was given.
    pub fn command_text(&self) -> Option<String> {
        if self.command.is_empty() {
            return None;
        }

        Some(self.command.iter().join(" "))
    }
}
