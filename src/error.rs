// src/error.rs - shell-side error handling

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures the application shell can hit while assembling the page.
///
/// Rendering itself has no error path: the card is a pure function of a
/// record the caller has already populated.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid product payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("logging initialization failed: {0}")]
    Logging(String),
}
