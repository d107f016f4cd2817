//! Word analysis and comparison providers.
//!
//! Providers are external collaborators: typically a language model behind
//! an HTTP endpoint. The session only sees them through the
//! [`AnalysisProvider`] and [`ComparisonProvider`] traits. This module ships
//! [`FixtureProvider`], which answers from raw payload files on disk and runs
//! them through the same decoding as a live provider would.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};

use lexibubble_core::word::{AnalysisResponse, Comparison};

use crate::{
    LexiError,
    config::ProviderConfig,
    error::ProviderError,
};

/// Languages requested when the caller names none.
pub const DEFAULT_LANGUAGES: [&str; 3] = ["es", "fr", "de"];

/// A validated analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    word: String,
    languages: Vec<String>,
}

impl AnalysisRequest {
    /// Creates a request for `word`.
    ///
    /// Surrounding whitespace is trimmed. An empty language list falls back
    /// to [`DEFAULT_LANGUAGES`].
    ///
    /// # Errors
    ///
    /// Returns [`LexiError::Validation`] if the word is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexibubble::provider::AnalysisRequest;
    ///
    /// let request = AnalysisRequest::new("  happy ", Vec::new()).unwrap();
    /// assert_eq!(request.word(), "happy");
    /// assert_eq!(request.languages(), ["es", "fr", "de"]);
    ///
    /// assert!(AnalysisRequest::new("   ", Vec::new()).is_err());
    /// ```
    pub fn new(word: &str, languages: Vec<String>) -> Result<Self, LexiError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(LexiError::Validation("word must not be empty".to_string()));
        }

        let languages = if languages.is_empty() {
            DEFAULT_LANGUAGES.iter().map(|lang| lang.to_string()).collect()
        } else {
            languages
        };

        Ok(Self {
            word: word.to_string(),
            languages,
        })
    }

    /// Creates a request with the configured languages.
    ///
    /// # Errors
    ///
    /// Returns [`LexiError::Validation`] if the word is empty.
    pub fn with_config(word: &str, config: &ProviderConfig) -> Result<Self, LexiError> {
        Self::new(word, config.languages().to_vec())
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }
}

/// Produces the analysis of one word.
pub trait AnalysisProvider {
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the provider fails or its payload is
    /// unusable.
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ProviderError>;
}

/// Contrasts two words.
pub trait ComparisonProvider {
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the provider fails or its payload is
    /// unusable.
    fn compare(&self, first: &str, second: &str) -> Result<Comparison, ProviderError>;
}

impl<P: AnalysisProvider + ?Sized> AnalysisProvider for &P {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ProviderError> {
        (**self).analyze(request)
    }
}

impl<P: ComparisonProvider + ?Sized> ComparisonProvider for &P {
    fn compare(&self, first: &str, second: &str) -> Result<Comparison, ProviderError> {
        (**self).compare(first, second)
    }
}

/// Answers from raw payload files.
///
/// Analyses are read from `<dir>/<word>.json` and comparisons from
/// `<dir>/compare/<first>__<second>.json`, with words lowercased. Files hold
/// the provider's raw text, which is decoded with the usual cleanup retry.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    root: PathBuf,
}

impl FixtureProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn analysis_path(&self, word: &str) -> PathBuf {
        self.root.join(format!("{}.json", file_stem(word)))
    }

    fn comparison_path(&self, first: &str, second: &str) -> PathBuf {
        self.root
            .join("compare")
            .join(format!("{}__{}.json", file_stem(first), file_stem(second)))
    }

    fn read(&self, path: &Path, word: &str) -> Result<String, ProviderError> {
        debug!(path:? = path; "Reading fixture payload");
        fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ProviderError::NotFound(word.to_string()),
            _ => ProviderError::Io {
                path: path.to_path_buf(),
                source,
            },
        })
    }
}

impl AnalysisProvider for FixtureProvider {
    fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse, ProviderError> {
        info!(word = request.word(), languages:? = request.languages(); "Analyzing word");
        let payload = self.read(&self.analysis_path(request.word()), request.word())?;
        Ok(lexibubble_payload::parse_analysis(&payload)?)
    }
}

impl ComparisonProvider for FixtureProvider {
    fn compare(&self, first: &str, second: &str) -> Result<Comparison, ProviderError> {
        info!(first, second; "Comparing words");
        let path = self.comparison_path(first, second);
        let payload = self.read(&path, &format!("{first} vs {second}"))?;
        Ok(lexibubble_payload::parse_comparison(&payload)?)
    }
}

/// File name stem for a word: lowercased, path separators replaced.
fn file_stem(word: &str) -> String {
    word.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '/' || c == '\\' || c == '.' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const HAPPY: &str = r#"{
        "centerWord": {"id": "center", "word": "happy", "similarity": 1},
        "synonyms": [{"id": "syn1", "word": "joyful", "similarity": 0.9}]
    }"#;

    #[test]
    fn test_request_uses_configured_languages() {
        let request = AnalysisRequest::with_config("happy", &ProviderConfig::default()).unwrap();
        assert_eq!(request.languages().len(), 5);
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let err = AnalysisRequest::new("", vec!["es".to_string()]).unwrap_err();
        assert!(matches!(err, LexiError::Validation(_)));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(" Happy "), "happy");
        assert_eq!(file_stem("../etc"), "___etc");
    }

    #[test]
    fn test_fixture_analysis() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("happy.json"), format!("Sure!\n{HAPPY}\nDone.")).unwrap();

        let provider = FixtureProvider::new(dir.path());
        let request = AnalysisRequest::new("Happy", Vec::new()).unwrap();
        let analysis = provider.analyze(&request).unwrap();

        assert_eq!(analysis.synonyms[0].word, "joyful");
    }

    #[test]
    fn test_fixture_missing_word() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FixtureProvider::new(dir.path());
        let request = AnalysisRequest::new("gloomy", Vec::new()).unwrap();

        let err = provider.analyze(&request).unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(word) if word == "gloomy"));
    }

    #[test]
    fn test_fixture_malformed_payload() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("happy.json"), "no json here").unwrap();

        let provider = FixtureProvider::new(dir.path());
        let request = AnalysisRequest::new("happy", Vec::new()).unwrap();

        let err = provider.analyze(&request).unwrap_err();
        assert!(err.payload_error().is_some());
    }

    #[test]
    fn test_fixture_comparison() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("compare")).unwrap();
        fs::write(
            dir.path().join("compare").join("joyful__content.json"),
            r#"{"word1": "joyful", "word2": "content", "differences": "Joyful is livelier.",
                "examples": {"word1": "A joyful song.", "word2": "A content cat."}}"#,
        )
        .unwrap();

        let provider = FixtureProvider::new(dir.path());
        let comparison = provider.compare("joyful", "content").unwrap();
        assert_eq!(comparison.examples.word2, "A content cat.");
        assert!(provider.compare("content", "joyful").is_err());
    }
}
