//! Termlaunch Core Library
//!
//! This crate opens a new terminal window, or the integrated terminal of an
//! editor, and runs a shell command in it. It is a dispatch table from
//! (operating system, terminal style) pairs to OS automation calls:
//!
//! - **macOS**: AppleScript through `osascript`, driving Terminal.app or
//!   simulating keystrokes through System Events
//! - **Windows**: PowerShell, starting a detached `cmd` console or sending
//!   keys to the editor window
//!
//! Any other host fails with [`error::Error::UnsupportedPlatform`] before a
//! process is spawned.
//!
//! # Examples
//!
//! Building the invocation without running it:
//!
//! ```
//! use termlaunch_core::launcher::prepare;
//! use termlaunch_core::platform::{LaunchContext, Platform};
//! use termlaunch_core::style::TerminalStyle;
//!
//! let context = LaunchContext::new(Platform::MacOs, "/tmp");
//! let invocation = prepare("echo hi", TerminalStyle::System, &context)?;
//! assert_eq!(invocation.program, "osascript");
//! assert!(invocation.script().unwrap().contains("cd '/tmp' && echo hi"));
//! # Ok::<(), termlaunch_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod escape;
pub mod execution;
pub mod launcher;
pub mod platform;
pub mod strategy;
pub mod style;
