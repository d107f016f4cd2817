//! Best-effort cleanup of provider payloads.
//!
//! Language model output often wraps the JSON object in Markdown code fences
//! or surrounding prose. Cleanup keeps only the text from the first `{` to
//! the last `}`, returning the byte offset of the slice so that diagnostics
//! can still point into the original payload.

/// The object candidate found inside a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Extracted<'a> {
    pub(crate) offset: usize,
    pub(crate) text: &'a str,
}

/// Extracts the outermost `{ ... }` candidate from `payload`.
///
/// Returns `None` when the payload holds no object at all.
pub(crate) fn extract_object(payload: &str) -> Option<Extracted<'_>> {
    let start = payload.find('{')?;
    let end = payload.rfind('}')?;
    if end < start {
        return None;
    }

    Some(Extracted {
        offset: start,
        text: &payload[start..=end],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_code_fences() {
        let payload = "```json\n{\"word\": \"happy\"}\n```";
        let extracted = extract_object(payload).unwrap();
        assert_eq!(extracted.text, "{\"word\": \"happy\"}");
        assert_eq!(extracted.offset, 8);
    }

    #[test]
    fn test_strips_surrounding_prose() {
        let payload = "Here is the analysis: {\"a\": {\"b\": 1}} Hope this helps!";
        let extracted = extract_object(payload).unwrap();
        assert_eq!(extracted.text, "{\"a\": {\"b\": 1}}");
    }

    #[test]
    fn test_clean_payload_is_unchanged() {
        let payload = "{\"a\": 1}";
        let extracted = extract_object(payload).unwrap();
        assert_eq!(extracted.text, payload);
        assert_eq!(extracted.offset, 0);
    }

    #[test]
    fn test_no_object() {
        assert_eq!(extract_object("I cannot help with that."), None);
        assert_eq!(extract_object("} backwards {"), None);
        assert_eq!(extract_object(""), None);
    }
}
