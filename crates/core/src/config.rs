//! Launch settings and working directory resolution.
//!
//! There is no config file; these constants are what the launch scripts are
//! built from, and the working directory is resolved from an optional
//! command-line override with shell expansions like `~` applied.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Program that runs AppleScript on macOS.
pub const APPLESCRIPT_PROGRAM: &str = "osascript";
/// Program that runs the automation scripts on Windows.
pub const POWERSHELL_PROGRAM: &str = "powershell";
/// Console host started by the Windows system style.
pub const CONSOLE_HOST_PROGRAM: &str = "cmd";

/// macOS terminal application driven by the system style.
pub const MACOS_TERMINAL_APP: &str = "Terminal";

/// Pause after activating an IDE window, before sending keys.
pub const FOCUS_DELAY_MS: u64 = 300;
/// Pause after opening the integrated terminal, before typing.
pub const PANEL_DELAY_MS: u64 = 500;
/// Pause after typing the command, before pressing Enter.
pub const ENTER_DELAY_MS: u64 = 100;

/// Resolves the directory the command will be run in.
///
/// If an override is provided, uses that path with `~` expanded. Otherwise,
/// uses the current directory of this process.
///
/// # Errors
///
/// Returns an error if no override is given and the current directory cannot
/// be read.
///
/// # Examples
///
/// ```
/// use termlaunch_core::config::resolve_working_directory;
///
/// let explicit = resolve_working_directory(Some("/srv/app")).unwrap();
/// assert_eq!(explicit.to_str(), Some("/srv/app"));
///
/// let current = resolve_working_directory(None).unwrap();
/// assert!(current.is_absolute());
/// ```
pub fn resolve_working_directory(working_directory_override: Option<&str>) -> Result<PathBuf> {
    if let Some(working_directory) = working_directory_override {
        return Ok(PathBuf::from(
            shellexpand::tilde(working_directory).into_owned(),
        ));
    }

    std::env::current_dir().map_err(|e| {
        Error::io_error(
            "current working directory".to_string(),
            ".".to_string(),
            e,
        )
    })
}

/// Seconds form of a delay, as AppleScript's `delay` expects.
pub fn delay_seconds(delay_ms: u64) -> String {
    let seconds = delay_ms / 1000;
    let millis = delay_ms % 1000;
    if millis == 0 {
        seconds.to_string()
    } else {
        format!("{seconds}.{millis:03}")
            .trim_end_matches('0')
            .to_string()
    }
}
