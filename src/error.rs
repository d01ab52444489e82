// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Fullscreen(FullscreenError),
}

/// Rejection of a full-screen entry request.
///
/// Carries the underlying error's name and message so the host can show
/// them to the user. Never fatal: the carousel keeps running windowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullscreenError {
    /// Machine-readable error name (e.g. `NotAllowedError`).
    pub name: String,
    /// Human-readable description of the rejection.
    pub message: String,
}

impl FullscreenError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// The alert-level text shown to the user when entering full-screen
    /// mode fails.
    pub fn user_message(&self) -> String {
        format!("Error attempting to enable full-screen mode: {self}")
    }
}

impl fmt::Display for FullscreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.name)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fullscreen(e) => write!(f, "Fullscreen Error: {}", e),
        }
    }
}

impl From<FullscreenError> for Error {
    fn from(err: FullscreenError) -> Self {
        Error::Fullscreen(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
