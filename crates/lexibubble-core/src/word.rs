//! Word analysis data model
//!
//! These types mirror the records exchanged with the word analysis and
//! comparison providers. Field names follow the provider's camelCase wire
//! format. Numeric fields are kept exactly as received; range repair happens
//! when the layout nodes are built (see [`crate::node`]).

use std::fmt;

use log::warn;
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{DeserializeOwned, IntoDeserializer},
};

/// Color classification of a bubble.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BubbleColor {
    /// Standard synonym
    #[default]
    Yellow,
    /// Potentially confusing word
    Orange,
    /// False friend or commonly mistaken word
    Red,
    /// Antonym
    Dark,
}

impl BubbleColor {
    /// All classes, in legend order.
    pub const ALL: [BubbleColor; 4] = [
        BubbleColor::Yellow,
        BubbleColor::Orange,
        BubbleColor::Red,
        BubbleColor::Dark,
    ];

    /// Human readable legend caption.
    pub fn caption(self) -> &'static str {
        match self {
            BubbleColor::Yellow => "Standard synonym",
            BubbleColor::Orange => "Potentially confusing",
            BubbleColor::Red => "False friend / Dangerous",
            BubbleColor::Dark => "Antonym",
        }
    }
}

/// Coarse word type tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Emotion,
    Number,
    /// Anything the provider sent that is not one of the known tags.
    #[default]
    #[serde(other)]
    Other,
}

/// How likely a synonym is to be confused with the center word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfusionRisk {
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfusionRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfusionRisk::Low => "low",
            ConfusionRisk::Medium => "medium",
            ConfusionRisk::High => "high",
        };
        f.write_str(name)
    }
}

/// Translation of the center word into one target language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub language: String,
    pub word: String,
    #[serde(default)]
    pub is_cognate: bool,
    #[serde(default)]
    pub is_false_friend: bool,
}

/// Multi-dimensional semantic attributes of a word.
///
/// `emotional_valence` ranges over [-1, 1], all others over [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specificity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotional_valence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality: Option<f32>,
}

impl Attributes {
    /// Iterates over the attributes that are present, by wire name.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, f32)> {
        [
            ("intensity", self.intensity),
            ("specificity", self.specificity),
            ("frequency", self.frequency),
            ("emotionalValence", self.emotional_valence),
            ("formality", self.formality),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

/// Provider's placement hint in [-100, 100]; a seed only, never authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionHint {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

/// One synonym or antonym record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordBubble {
    #[serde(default)]
    pub id: String,
    pub word: String,
    #[serde(rename = "type", default)]
    pub word_type: WordType,
    #[serde(default, deserialize_with = "lenient_color")]
    pub color: BubbleColor,
    #[serde(default)]
    pub position: PositionHint,
    #[serde(default)]
    pub similarity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub is_antonym: bool,
    #[serde(
        default,
        deserialize_with = "lenient_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub confusion_risk: Option<ConfusionRisk>,
}

/// Decodes a lowercase tag, treating unknown tags like a missing one.
///
/// Providers sometimes echo the prompt's `a|b|c` alternatives instead of
/// choosing one.
fn lenient_tag<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(tag) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let tag = tag.trim().to_lowercase();
    match T::deserialize(IntoDeserializer::<D::Error>::into_deserializer(tag.as_str())) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(tag = tag.as_str(), err:% = err; "Unknown tag replaced by default");
            Ok(None)
        }
    }
}

fn lenient_color<'de, D>(deserializer: D) -> Result<BubbleColor, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_tag(deserializer).map(Option::unwrap_or_default)
}

/// The searched word together with its dictionary metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterWord {
    #[serde(flatten)]
    pub bubble: WordBubble,
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definition: String,
}

/// Full result of one word analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub center_word: CenterWord,
    #[serde(default)]
    pub synonyms: Vec<WordBubble>,
    #[serde(default)]
    pub antonyms: Vec<WordBubble>,
}

impl AnalysisResponse {
    /// Finds a record (center, synonym or antonym) by its word text.
    pub fn find_word(&self, word: &str) -> Option<&WordBubble> {
        std::iter::once(&self.center_word.bubble)
            .chain(&self.synonyms)
            .chain(&self.antonyms)
            .find(|bubble| bubble.word == word)
    }
}

/// Example sentences for the two compared words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonExamples {
    pub word1: String,
    pub word2: String,
}

/// Textual contrast between two words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub word1: String,
    pub word2: String,
    pub differences: String,
    pub examples: ComparisonExamples,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HAPPY: &str = r#"{
        "centerWord": {
            "id": "center", "word": "happy", "type": "adjective", "color": "yellow",
            "position": {"x": 0, "y": 0}, "similarity": 1,
            "partOfSpeech": "adjective", "definition": "feeling pleasure",
            "translations": [{"language": "es", "word": "feliz", "isCognate": false, "isFalseFriend": false}],
            "attributes": {"intensity": 0.5, "emotionalValence": 0.8}
        },
        "synonyms": [
            {"id": "syn1", "word": "joyful", "type": "adjective", "color": "yellow",
             "position": {"x": 20, "y": 15}, "similarity": 0.9, "confusionRisk": "low",
             "attributes": {"intensity": 0.7}}
        ],
        "antonyms": [
            {"id": "ant1", "word": "sad", "type": "adjective", "color": "dark",
             "position": {"x": -80, "y": -60}, "similarity": 0, "isAntonym": true,
             "attributes": {"emotionalValence": -0.8}}
        ]
    }"#;

    #[test]
    fn test_decode_full_analysis() {
        let analysis: AnalysisResponse = serde_json::from_str(HAPPY).unwrap();

        assert_eq!(analysis.center_word.bubble.word, "happy");
        assert_eq!(analysis.center_word.part_of_speech, "adjective");
        assert_eq!(analysis.center_word.translations[0].word, "feliz");
        assert_eq!(analysis.synonyms[0].confusion_risk, Some(ConfusionRisk::Low));
        assert_eq!(analysis.antonyms[0].color, BubbleColor::Dark);
        assert!(analysis.antonyms[0].is_antonym);
        assert_eq!(
            analysis.center_word.bubble.attributes.emotional_valence,
            Some(0.8)
        );
    }

    #[test]
    fn test_unknown_word_type_maps_to_other() {
        let bubble: WordBubble =
            serde_json::from_str(r#"{"word": "blue", "type": "noun|verb"}"#).unwrap();
        assert_eq!(bubble.word_type, WordType::Other);
        assert_eq!(bubble.color, BubbleColor::Yellow);
        assert_eq!(bubble.similarity, 0.0);
    }

    #[test]
    fn test_unknown_color_and_risk_fall_back() {
        let bubble: WordBubble = serde_json::from_str(
            r#"{"word": "glad", "color": "yellow|orange|red", "confusionRisk": "extreme"}"#,
        )
        .unwrap();
        assert_eq!(bubble.color, BubbleColor::Yellow);
        assert_eq!(bubble.confusion_risk, None);

        let bubble: WordBubble =
            serde_json::from_str(r#"{"word": "glad", "color": " Orange ", "confusionRisk": "HIGH"}"#)
                .unwrap();
        assert_eq!(bubble.color, BubbleColor::Orange);
        assert_eq!(bubble.confusion_risk, Some(ConfusionRisk::High));

        let bubble: WordBubble =
            serde_json::from_str(r#"{"word": "glad", "color": null, "confusionRisk": null}"#).unwrap();
        assert_eq!(bubble.color, BubbleColor::Yellow);
        assert_eq!(bubble.confusion_risk, None);
    }

    #[test]
    fn test_find_word() {
        let analysis: AnalysisResponse = serde_json::from_str(HAPPY).unwrap();
        assert_eq!(analysis.find_word("sad").map(|b| b.id.as_str()), Some("ant1"));
        assert_eq!(
            analysis.find_word("happy").map(|b| b.id.as_str()),
            Some("center")
        );
        assert!(analysis.find_word("gloomy").is_none());
    }

    #[test]
    fn test_attributes_present() {
        let attributes = Attributes {
            intensity: Some(0.2),
            formality: Some(0.9),
            ..Attributes::default()
        };
        let present: Vec<_> = attributes.present().collect();
        assert_eq!(present, vec![("intensity", 0.2), ("formality", 0.9)]);
    }
}
