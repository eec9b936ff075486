//! Termlaunch CLI Library
//!
//! This crate provides the command-line interface for termlaunch: it parses
//! the arguments, captures the host platform and working directory, and hands
//! the command to [`termlaunch_core::launcher`].
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`launch_command`]: Turning parsed arguments into a launch, dry run or help
//!
//! # Examples
//!
//! ```bash
//! # New Terminal.app / console window in the current directory
//! termlaunch cargo test
//!
//! # Integrated terminal of a running editor
//! termlaunch --terminal vscode npm run dev
//!
//! # Show the automation call without running it
//! termlaunch --dry-run -C ~/projects/app make
//! ```

pub mod cli_args;
pub mod launch_command;
