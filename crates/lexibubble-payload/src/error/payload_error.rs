//! The error type returned when a payload is rejected.

use std::fmt;

use crate::error::Diagnostic;

/// A rejected payload.
///
/// Holds every error diagnostic found together with the raw payload text, so
/// that callers can render labeled snippets.
#[derive(Debug)]
pub struct PayloadError {
    diagnostics: Vec<Diagnostic>,
    payload: String,
}

impl PayloadError {
    /// Create a new payload error from diagnostics and the payload they refer to.
    pub fn new(diagnostics: Vec<Diagnostic>, payload: impl Into<String>) -> Self {
        Self {
            diagnostics,
            payload: payload.into(),
        }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The raw payload the diagnostics' spans point into.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for PayloadError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_display_counts_extra_diagnostics() {
        let err = PayloadError::new(
            vec![
                Diagnostic::error("center word is empty").with_code(ErrorCode::E200),
                Diagnostic::error("synonym 2 has no word").with_code(ErrorCode::E201),
            ],
            "{}",
        );

        assert_eq!(err.to_string(), "error[E200]: center word is empty (+1 more)");
        assert_eq!(err.payload(), "{}");
    }
}
