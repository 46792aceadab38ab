//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need it.

use thiserror::Error;

/// The error type for `stand-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown stand class {0:?}: expected \"PLB\" or \"REMOTE\"")]
    UnknownStandClass(String),
}

/// Shorthand result type for `stand-core`.
pub type CoreResult<T> = Result<T, CoreError>;
