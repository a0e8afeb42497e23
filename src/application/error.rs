//! Application-level errors
//!
//! Display strings are the messages shown to the user as-is.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conversion errors. Per-record problems never surface here.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("first argument must be a JSON file")]
    MissingInput,

    #[error("cannot read the file {}", path.display())]
    Unreadable { path: PathBuf },

    #[error("Unable to get content of {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to parse JSON")]
    Parse(#[from] serde_json::Error),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("render failed: {message}")]
    Render { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
