//! JSON decoding with a single cleanup retry.

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::{
    cleanup::{self, Extracted},
    error::{Diagnostic, ErrorCode, PayloadError},
    span::Span,
};

const OBJECT_HELP: &str = "the provider must answer with a single JSON object";

/// Decodes `payload` as `T`.
///
/// A strict decode is tried first. If it fails, the payload is cleaned up
/// once (see [`cleanup::extract_object`]) and decoded again. When both fail,
/// the retry's diagnostic comes first, followed by the strict one.
pub(crate) fn decode<T: DeserializeOwned>(payload: &str, what: &str) -> Result<T, PayloadError> {
    let strict_err = match serde_json::from_str::<T>(payload) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    debug!(what, err:% = strict_err; "Strict decode failed, retrying after cleanup");

    let Some(extracted) = cleanup::extract_object(payload) else {
        let diag = Diagnostic::error(format!("no JSON object found in {what} payload"))
            .with_code(ErrorCode::E101)
            .with_label(Span::new(0..payload.len()), "expected a `{ ... }` object")
            .with_help(OBJECT_HELP);
        return Err(PayloadError::new(vec![diag], payload));
    };

    if extracted.text.len() == payload.len() {
        // Nothing was stripped, so a retry would fail the same way.
        let diag = json_diagnostic(&strict_err, extracted, what, "here");
        return Err(PayloadError::new(vec![diag], payload));
    }

    serde_json::from_str::<T>(extracted.text).map_err(|err| {
        let retry = json_diagnostic(&err, extracted, what, "here").with_secondary_label(
            Span::new(extracted.offset..extracted.offset + extracted.text.len()),
            "decoded after stripping surrounding text",
        );
        let whole = Extracted {
            offset: 0,
            text: payload,
        };
        let strict = json_diagnostic(&strict_err, whole, what, "strict decode failed here");
        PayloadError::new(vec![retry, strict], payload)
    })
}

fn json_diagnostic(
    err: &serde_json::Error,
    extracted: Extracted<'_>,
    what: &str,
    label: &str,
) -> Diagnostic {
    let code = match err.classify() {
        Category::Data => ErrorCode::E102,
        Category::Syntax | Category::Eof | Category::Io => ErrorCode::E100,
    };

    let full = err.to_string();
    let message = full.split(" at line ").next().unwrap_or(&full);

    let span = Span::at_line_column(extracted.text, err.line(), err.column())
        .shifted(extracted.offset);

    Diagnostic::error(format!("malformed {what} payload: {message}"))
        .with_code(code)
        .with_label(span, label)
        .with_help(OBJECT_HELP)
}
