//! Unified error types for worldedit_engine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for section, history and paste operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(std::io::Error),

    #[error("File not found: '{path}'")]
    NotFound { path: PathBuf },

    // === Section Format Errors ===
    #[error("Corrupt section header: width {width}, height {height}")]
    CorruptHeader { width: i32, height: i32 },

    #[error("Section data ends before the declared cell count")]
    TruncatedInput,

    #[error("Container trailer requested with {remaining} tiles still unread")]
    TilesPending { remaining: usize },

    #[error("Invalid string in container trailer: {message}")]
    InvalidString { message: String },

    // === Edit Errors ===
    #[error("Unsupported paste alignment: {code}")]
    InvalidAlignment { code: i32 },

    #[error("Unsupported rotation: {degrees} degrees")]
    InvalidRotation { degrees: i32 },

    #[error("Counter store error: {message}")]
    CounterStore { message: String },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for worldedit operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            EngineError::TruncatedInput
        } else {
            EngineError::Io(err)
        }
    }
}

// === Convenience constructors ===
impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn counter_store(msg: impl std::fmt::Display) -> Self {
        Self::CounterStore { message: msg.to_string() }
    }

    /// Maps an open error to `NotFound` when the file is missing.
    pub fn from_open(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(path)
        } else {
            Self::from(err)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound { .. })
    }
}
