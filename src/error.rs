//! Error handling for delimited-text parsing operations.
//!
//! Parsing itself never fails for malformed data: unterminated quotes are
//! tolerated, line bounds are clamped, and invalid excluded-column indices
//! are ignored. The only failure mode is a caller-configuration contract
//! violation, surfaced when the tokenizer is compiled.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DelimTextError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Matcher compilation failed: {0}")]
    Matcher(#[from] regex::Error),
}

impl DelimTextError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DelimTextError>;
