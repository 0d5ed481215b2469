//! # Error Types
//!
//! Decoding itself never fails; these errors cover code page lookup,
//! configuration and I/O around the decoders.

use thiserror::Error;

/// Main error type for reinterpret operations
#[derive(Debug, Error)]
pub enum ReinterpretError {
    /// No code page is registered under this name
    #[error("Unknown code page: {0}")]
    UnknownCodePage(String),

    /// The code page has no reverse table (e.g. TSCII)
    #[error("Code page cannot be encoded: {0}")]
    NotEncodable(String),

    /// Input to `encode` is not valid UTF-8
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
