//! Host platform detection and the ambient launch context.
//!
//! The host OS and working directory are read once per call and then passed
//! around explicitly, so the launcher itself never touches global state.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use log::debug;

use crate::config;
use crate::error::Result;

/// Operating system the launcher is running on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    /// Any other host. Carries the OS name for error reporting.
    Unsupported(String),
}

impl Platform {
    /// Maps a `std::env::consts::OS` style name to a platform.
    ///
    /// # Examples
    ///
    /// ```
    /// use termlaunch_core::platform::Platform;
    ///
    /// assert_eq!(Platform::from_os_name("macos"), Platform::MacOs);
    /// assert_eq!(Platform::from_os_name("windows"), Platform::Windows);
    /// assert_eq!(
    ///     Platform::from_os_name("linux"),
    ///     Platform::Unsupported("linux".to_string())
    /// );
    /// ```
    pub fn from_os_name(os_name: &str) -> Self {
        match os_name {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Detects the platform this binary was built for.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MacOs => f.write_str("macos"),
            Self::Windows => f.write_str("windows"),
            Self::Unsupported(name) => f.write_str(name),
        }
    }
}

/// Everything `launch` would otherwise read from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchContext {
    pub platform: Platform,
    pub working_directory: PathBuf,
}

impl LaunchContext {
    pub fn new(platform: Platform, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            platform,
            working_directory: working_directory.into(),
        }
    }

    /// Captures the host platform and working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the current directory
    /// cannot be read.
    pub fn detect(working_directory_override: Option<&str>) -> Result<Self> {
        let platform = Platform::detect();
        let working_directory = config::resolve_working_directory(working_directory_override)?;
        debug!(
            "Detected platform `{}`, working directory `{}`",
            platform,
            working_directory.display()
        );

        Ok(Self::new(platform, working_directory))
    }

    /// Working directory as text, for embedding into scripts.
    pub fn working_directory_text(&self) -> String {
        self.working_directory.to_string_lossy().into_owned()
    }
}
