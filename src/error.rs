//! Error types for invex
//!
//! Provides a unified error type for all operations.
//!
//! Map lookup misses are NOT errors: they come back as `Option::None` from
//! the containers, because absence is an expected outcome. Errors here cover
//! out-of-range access and load-time failures only.

use thiserror::Error;

/// Result type alias using InvexError
pub type Result<T> = std::result::Result<T, InvexError>;

/// Unified error type for invex operations
#[derive(Debug, Error)]
pub enum InvexError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Container Errors
    // -------------------------------------------------------------------------
    #[error("index out of range: position {position} but length is {len}")]
    IndexOutOfRange { position: usize, len: usize },

    // -------------------------------------------------------------------------
    // Load Errors
    // -------------------------------------------------------------------------
    #[error("data file is empty")]
    EmptySource,

    #[error("required column not found in data file: {0}")]
    MissingColumn(String),

    #[error("load error: {0}")]
    Load(String),
}
