//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `NavError` where a core
//! failure (typically configuration) can surface through them.

use thiserror::Error;

/// Errors produced by `nav-core`.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
