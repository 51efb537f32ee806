use std::fmt;

/// Errors from the rendering layer
#[derive(Debug)]
pub enum RenderError {
    /// Could not start a browser session
    Session(String),
    /// Navigation or capture failed mid-session
    Command(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session(msg) => write!(f, "failed to start browser session: {msg}"),
            Self::Command(msg) => write!(f, "WebDriver command failed: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<fantoccini::error::NewSessionError> for RenderError {
    fn from(err: fantoccini::error::NewSessionError) -> Self {
        Self::Session(err.to_string())
    }
}

impl From<fantoccini::error::CmdError> for RenderError {
    fn from(err: fantoccini::error::CmdError) -> Self {
        Self::Command(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
