//! Error types for lexibubble operations.
//!
//! [`LexiError`] is the error returned by the exploration session. Provider
//! failures are described by [`ProviderError`], which keeps the payload
//! diagnostics intact so hosts can render labeled snippets.

use std::{io, path::PathBuf};

use thiserror::Error;

use lexibubble_payload::error::PayloadError;

/// The main error type for lexibubble operations.
#[derive(Debug, Error)]
pub enum LexiError {
    /// The request was rejected before any provider call.
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for LexiError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

/// A word analysis or comparison provider failed.
///
/// Provider failures are terminal for the request that caused them.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider has no answer for the word.
    #[error("No analysis available for `{0}`")]
    NotFound(String),

    #[error("Failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The provider answered, but the payload was unusable even after cleanup.
    #[error("Malformed provider payload: {0}")]
    Payload(#[from] PayloadError),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

impl ProviderError {
    /// Returns the payload rejection, if this error carries one.
    pub fn payload_error(&self) -> Option<&PayloadError> {
        match self {
            Self::Payload(err) => Some(err),
            _ => None,
        }
    }
}

impl LexiError {
    /// Returns the payload rejection behind a provider failure, if any.
    pub fn payload_error(&self) -> Option<&PayloadError> {
        match self {
            Self::Provider(err) => err.payload_error(),
            _ => None,
        }
    }
}
