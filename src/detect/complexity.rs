//! Keyword-weighted complexity scoring.
//!
//! The score is a bounded proxy for control-flow density:
//! - Start at 0.0
//! - Add the keyword weight for each token that is a control-flow keyword
//!   (case-sensitive): if, for, while, try, switch (0.1); catch, case (0.05)
//! - Cap at 1.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::analysis::tokenize;

/// Upper bound of every complexity score.
pub const MAX_COMPLEXITY: f64 = 1.0;

/// Keyword weights used to accumulate complexity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplexityWeights(BTreeMap<String, f64>);

impl Default for ComplexityWeights {
    fn default() -> Self {
        let table = [
            ("if", 0.1),
            ("for", 0.1),
            ("while", 0.1),
            ("try", 0.1),
            ("catch", 0.05),
            ("switch", 0.1),
            ("case", 0.05),
        ];
        Self(
            table
                .iter()
                .map(|(k, w)| (k.to_string(), *w))
                .collect(),
        )
    }
}

impl ComplexityWeights {
    /// Weight of a token, if it contributes to complexity.
    pub fn weight(&self, token: &str) -> Option<f64> {
        self.0.get(token).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, w)| (k.as_str(), *w))
    }

    /// Score a token sequence, clamped to `MAX_COMPLEXITY`.
    pub fn score_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> f64 {
        let total: f64 = tokens
            .iter()
            .filter_map(|t| self.weight(t.as_ref()))
            .fold(0.0, |acc, w| acc + w);
        total.min(MAX_COMPLEXITY)
    }

    /// Tokenize and score a snippet.
    pub fn score(&self, code: &str) -> f64 {
        self.score_tokens(&tokenize(code))
    }
}

impl From<BTreeMap<String, f64>> for ComplexityWeights {
    fn from(table: BTreeMap<String, f64>) -> Self {
        Self(table)
    }
}

/// Calculate the complexity score (0-1) of a snippet with the default weights.
pub fn calculate_complexity(code: &str) -> f64 {
    ComplexityWeights::default().score(code)
}
