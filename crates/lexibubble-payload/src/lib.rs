//! Decoding and validation of word analysis provider payloads.
//!
//! Providers answer with JSON produced by a language model, which is not
//! always clean. [`parse_analysis`] and [`parse_comparison`] decode the raw
//! text, retrying once after stripping surrounding text, then validate the
//! result. Rejections carry [`error::Diagnostic`]s with spans into the raw
//! payload.
//!
//! # Example
//!
//! ```
//! let payload = r#"Here is the analysis:
//! {
//!   "centerWord": {"id": "center", "word": "happy", "similarity": 1},
//!   "synonyms": [{"id": "syn1", "word": "joyful", "similarity": 0.9}]
//! }"#;
//!
//! let analysis = lexibubble_payload::parse_analysis(payload).unwrap();
//! assert_eq!(analysis.center_word.bubble.word, "happy");
//! ```

pub mod error;

mod cleanup;
mod decode;
mod span;
mod validate;

pub use span::Span;

use log::debug;

use lexibubble_core::word::{AnalysisResponse, Comparison};

use error::PayloadError;

/// Decodes and validates a word analysis payload.
///
/// # Errors
///
/// Returns [`PayloadError`] when the payload cannot be decoded even after
/// cleanup, or when required fields are empty.
pub fn parse_analysis(payload: &str) -> Result<AnalysisResponse, PayloadError> {
    let analysis: AnalysisResponse = decode::decode(payload, "analysis")?;
    debug!(
        word = analysis.center_word.bubble.word.as_str(),
        synonyms = analysis.synonyms.len(),
        antonyms = analysis.antonyms.len();
        "Analysis payload decoded"
    );

    validate::analysis(analysis)
        .into_result()
        .map_err(|diagnostics| PayloadError::new(diagnostics, payload))
}

/// Decodes and validates a word comparison payload.
///
/// # Errors
///
/// Returns [`PayloadError`] when the payload cannot be decoded even after
/// cleanup, or when a word or the difference text is empty.
pub fn parse_comparison(payload: &str) -> Result<Comparison, PayloadError> {
    let comparison: Comparison = decode::decode(payload, "comparison")?;

    validate::comparison(comparison)
        .into_result()
        .map_err(|diagnostics| PayloadError::new(diagnostics, payload))
}
