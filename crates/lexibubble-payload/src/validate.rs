//! Validation and normalization of decoded payloads.
//!
//! Errors reject the payload; warnings record a repair that was applied and
//! are logged.

use log::warn;

use lexibubble_core::word::{AnalysisResponse, BubbleColor, Comparison, WordBubble};

use crate::error::{Diagnostic, ErrorCode};

/// Outcome of validating one decoded value.
#[derive(Debug)]
pub(crate) struct Validated<T> {
    pub(crate) value: T,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl<T> Validated<T> {
    /// Splits into the value and its fatal diagnostics, logging the repairs.
    pub(crate) fn into_result(self) -> Result<T, Vec<Diagnostic>> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .diagnostics
            .into_iter()
            .partition(|diag| diag.severity().is_error());

        for warning in &warnings {
            warn!(code:? = warning.code(); "{}", warning.message());
        }

        if errors.is_empty() {
            Ok(self.value)
        } else {
            Err(errors)
        }
    }
}

pub(crate) fn analysis(mut analysis: AnalysisResponse) -> Validated<AnalysisResponse> {
    let mut diagnostics = Vec::new();

    if analysis.center_word.bubble.word.trim().is_empty() {
        diagnostics.push(
            Diagnostic::error("center word is empty")
                .with_code(ErrorCode::E200)
                .with_help("`centerWord.word` must contain the analyzed word"),
        );
    }

    if analysis.synonyms.is_empty() && analysis.antonyms.is_empty() {
        diagnostics.push(
            Diagnostic::error("analysis contains no synonyms or antonyms")
                .with_code(ErrorCode::E202),
        );
    }

    let records = std::iter::once(&analysis.center_word.bubble)
        .chain(&analysis.synonyms)
        .chain(&analysis.antonyms);
    for bubble in records {
        for field in non_finite_fields(bubble) {
            diagnostics.push(
                Diagnostic::error(format!("`{}.{field}` is not a finite number", bubble.word))
                    .with_code(ErrorCode::E204)
                    .with_help("numbers must fit a 32-bit float"),
            );
        }
    }

    for (idx, synonym) in analysis.synonyms.iter_mut().enumerate() {
        if synonym.word.trim().is_empty() {
            diagnostics.push(
                Diagnostic::error(format!("synonym #{} has no word", idx + 1))
                    .with_code(ErrorCode::E201),
            );
        }
        if synonym.is_antonym {
            synonym.is_antonym = false;
            diagnostics.push(
                Diagnostic::warning(format!(
                    "synonym `{}` was flagged as an antonym, keeping it a synonym",
                    synonym.word
                ))
                .with_code(ErrorCode::W201),
            );
        }
    }

    for (idx, antonym) in analysis.antonyms.iter_mut().enumerate() {
        if antonym.word.trim().is_empty() {
            diagnostics.push(
                Diagnostic::error(format!("antonym #{} has no word", idx + 1))
                    .with_code(ErrorCode::E201),
            );
        }
        if !antonym.is_antonym || antonym.color != BubbleColor::Dark {
            antonym.is_antonym = true;
            antonym.color = BubbleColor::Dark;
            diagnostics.push(
                Diagnostic::warning(format!("antonym `{}` normalized", antonym.word))
                    .with_code(ErrorCode::W200),
            );
        }
    }

    Validated {
        value: analysis,
        diagnostics,
    }
}

fn non_finite_fields(bubble: &WordBubble) -> Vec<&'static str> {
    [
        ("similarity", bubble.similarity),
        ("position.x", bubble.position.x),
        ("position.y", bubble.position.y),
    ]
    .into_iter()
    .chain(bubble.attributes.present())
    .filter(|(_, value)| !value.is_finite())
    .map(|(field, _)| field)
    .collect()
}

pub(crate) fn comparison(comparison: Comparison) -> Validated<Comparison> {
    let diagnostics = [
        ("word1", comparison.word1.as_str()),
        ("word2", comparison.word2.as_str()),
        ("differences", comparison.differences.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| {
        Diagnostic::error(format!("comparison field `{field}` is empty"))
            .with_code(ErrorCode::E203)
    })
    .collect();

    Validated {
        value: comparison,
        diagnostics,
    }
}
