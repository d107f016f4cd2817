//! Error codes for payload diagnostics.
//!
//! Codes are organized by phase:
//! - `E1xx` - Decoding errors
//! - `E2xx` - Validation errors
//! - `W2xx` - Repairs applied during validation

use std::fmt;

/// Codes for categorizing payload diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed JSON.
    ///
    /// The payload is not valid JSON, even after stripping surrounding text.
    E100,

    /// No JSON object.
    ///
    /// The payload contains no `{ ... }` object at all.
    E101,

    /// Shape mismatch.
    ///
    /// The payload is valid JSON but a field is missing or has the wrong type.
    E102,

    /// Empty center word.
    E200,

    /// Empty satellite word.
    ///
    /// A synonym or antonym record has no word text.
    E201,

    /// No satellites.
    ///
    /// The analysis contains neither synonyms nor antonyms.
    E202,

    /// Empty comparison field.
    ///
    /// One of the compared words or the difference text is empty.
    E203,

    /// Non-finite number.
    ///
    /// A similarity, position hint or attribute does not fit a finite `f32`.
    E204,

    /// Antonym normalized.
    ///
    /// An antonym record was missing its antonym flag or dark color.
    W200,

    /// Synonym normalized.
    ///
    /// A synonym record was flagged as an antonym.
    W201,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
