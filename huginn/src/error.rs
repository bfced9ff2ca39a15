//! Result and Error types for the crate.
use miette::Diagnostic;
use thiserror::Error;

/// Result containing an error variant from this module.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// IO error, this wraps a [`std::io::Error`]
    #[error(transparent)]
    #[diagnostic(help("Failed to read a config or scenario file"))]
    Io(#[from] std::io::Error),

    /// Deserialize error, this wraps a [`toml::de::Error`]
    #[error(transparent)]
    #[diagnostic(help("Config file contains invalid or unknown fields"))]
    Deserialize(#[from] toml::de::Error),

    /// Scenario error, this wraps a [`serde_json::Error`]
    #[error(transparent)]
    #[diagnostic(help("Scenario file is not a valid world snapshot"))]
    Json(#[from] serde_json::Error),

    #[error("Player number {unum} not in formation configuration!")]
    UnknownPlayer { unum: u8 },

    #[error("Actuator failed to execute `{command}`: {reason}")]
    Actuator {
        command: &'static str,
        reason: String,
    },
}
