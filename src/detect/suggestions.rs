//! Improvement suggestions driven by extracted features.

use crate::analysis::{extract_features, get_language};

use super::Suggestion;

/// Generate improvement suggestions for a snippet.
///
/// Rules live with each language bundle; unrecognized languages get none.
pub fn suggest_improvements(code: &str, language: &str) -> Vec<Suggestion> {
    let features = extract_features(code, language);

    match get_language(language) {
        Some(support) => support.suggest(code, &features),
        None => Vec::new(),
    }
}
