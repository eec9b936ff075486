use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Launching a terminal is not implemented for this platform: `{}`", .0)]
    UnsupportedPlatform(String),

    #[error("Unknown terminal style: \"{}\" (expected one of: system, vscode, cursor)", .0)]
    UnknownStyle(String),

    #[error("Error with sub process process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("IO error with {} at path `{}`: {}", .description, .path, .original)]
    Io {
        description: String,
        path: String,
        original: std::io::Error,
    },
}

impl Error {
    pub fn unsupported_platform(os_name: impl Into<String>) -> Self {
        Self::UnsupportedPlatform(os_name.into())
    }

    pub fn io_error(description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            description,
            path,
            original,
        }
    }
}
