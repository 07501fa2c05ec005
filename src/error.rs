//! Error types for the yt-dlpr wrapper.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Engine errors
    #[error("yt-dlp not found ({0}). Please install yt-dlp and ensure it's in your PATH.")]
    EngineNotFound(String),

    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Interrupted by user")]
    Interrupted,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error is a write to a closed output stream.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes. The engine's own code is passed through when it ran.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const CONFIG_ERROR: i32 = 3;
    pub const ENGINE_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
