//! Feature extraction over raw source snippets.
//!
//! Every `FeatureSet` carries four base features (`length`, `num_lines`,
//! `tokens`, `language`). Language-specific features are merged in only when
//! the lower-cased language tag resolves to a registered `LanguageSupport`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::languages::get_language;
use super::tokenizer::tokenize;

/// Names of the features present on every `FeatureSet`.
pub const BASE_FEATURES: &[&str] = &["length", "num_lines", "tokens", "language"];

/// A single language-specific feature value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Flag(bool),
    Count(usize),
    Ratio(f64),
    Text(String),
}

impl FeatureValue {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FeatureValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self {
            FeatureValue::Count(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Flag(value)
    }
}

impl From<usize> for FeatureValue {
    fn from(value: usize) -> Self {
        FeatureValue::Count(value)
    }
}

/// Language-specific features keyed by name.
pub type FeatureMap = BTreeMap<String, FeatureValue>;

/// Measurements derived from one code sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Character count of the input
    pub length: usize,
    /// Number of lines as produced by `str::lines`
    pub num_lines: usize,
    pub tokens: Vec<String>,
    /// Language tag exactly as supplied by the caller
    pub language: String,
    #[serde(flatten)]
    pub extra: FeatureMap,
}

impl FeatureSet {
    /// Look up a language-specific feature.
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.extra.get(name)
    }

    /// Boolean feature, `false` when absent or of another kind.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(FeatureValue::as_flag).unwrap_or(false)
    }

    /// Count feature, `0` when absent or of another kind.
    pub fn count(&self, name: &str) -> usize {
        self.get(name).and_then(FeatureValue::as_count).unwrap_or(0)
    }

    /// All feature names, base features first.
    pub fn keys(&self) -> Vec<&str> {
        BASE_FEATURES
            .iter()
            .copied()
            .chain(self.extra.keys().map(String::as_str))
            .collect()
    }

    /// Whether any language-specific features were extracted.
    pub fn has_language_features(&self) -> bool {
        !self.extra.is_empty()
    }
}

/// Compute base features and, for supported languages, language-specific ones.
pub fn extract_features(code: &str, language: &str) -> FeatureSet {
    let mut features = FeatureSet {
        length: code.chars().count(),
        num_lines: code.lines().count(),
        tokens: tokenize(code),
        language: language.to_string(),
        extra: FeatureMap::new(),
    };

    if let Some(support) = get_language(language) {
        features.extra.extend(support.extract_features(code));
    }

    tracing::debug!(
        language,
        tokens = features.tokens.len(),
        extra = features.extra.len(),
        "extracted features"
    );

    features
}
