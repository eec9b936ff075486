use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

/// Where the command should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalStyle {
    /// A new native terminal window.
    #[default]
    System,
    /// The integrated terminal of Visual Studio Code.
    Vscode,
    /// The integrated terminal of Cursor.
    Cursor,
}

impl TerminalStyle {
    pub const NAMES: [&'static str; 3] = ["system", "vscode", "cursor"];

    pub fn name(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Vscode => "vscode",
            Self::Cursor => "cursor",
        }
    }

    /// The editor targeted by this style, if it is an IDE style.
    pub fn ide_app(self) -> Option<IdeApp> {
        match self {
            Self::System => None,
            Self::Vscode => Some(IdeApp::VSCODE),
            Self::Cursor => Some(IdeApp::CURSOR),
        }
    }
}

impl FromStr for TerminalStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(Self::System),
            "vscode" => Ok(Self::Vscode),
            "cursor" => Ok(Self::Cursor),
            _ => Err(Error::UnknownStyle(s.to_string())),
        }
    }
}

impl Display for TerminalStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An editor with an integrated terminal panel reached by keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdeApp {
    /// Application name used to activate its window on macOS.
    pub application_name: &'static str,
    /// Process name looked up on Windows.
    pub process_name: &'static str,
}

impl IdeApp {
    pub const VSCODE: IdeApp = IdeApp {
        application_name: "Visual Studio Code",
        process_name: "Code",
    };

    pub const CURSOR: IdeApp = IdeApp {
        application_name: "Cursor",
        process_name: "Cursor",
    };
}
