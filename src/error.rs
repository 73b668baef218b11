//! @ai:module:intent Define error types for the tidyann parser
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all tidyann parser operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read report {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line matched the coarse header shape but could not be decomposed
    /// into location, severity, message and check id. Fatal to the parse
    /// pass; `line` carries the offending raw line.
    #[error("Malformed diagnostic header ({reason}): {line}")]
    MalformedHeader { line: String, reason: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
