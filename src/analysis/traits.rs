//! Core trait for per-language capability bundles.

use super::{FeatureMap, FeatureSet};
use crate::detect::Suggestion;

/// Language-specific feature extraction and suggestion rules.
///
/// Each supported language family implements this trait and is registered
/// in `languages/mod.rs`. Extraction is surface-level pattern matching over
/// raw source, so false positives are expected.
pub trait LanguageSupport: Send + Sync {
    /// Lower-case language tags this bundle answers to (e.g., `["python"]`).
    fn language_ids(&self) -> &'static [&'static str];

    /// File extensions this bundle handles (without dot).
    fn file_extensions(&self) -> &'static [&'static str];

    /// Extract language-specific features from raw source.
    fn extract_features(&self, code: &str) -> FeatureMap;

    /// Produce improvement suggestions from the source and its features.
    fn suggest(&self, code: &str, features: &FeatureSet) -> Vec<Suggestion>;

    /// Check if this bundle handles the given (lower-cased) language tag.
    fn handles_language(&self, tag: &str) -> bool {
        self.language_ids().contains(&tag)
    }

    /// Check if this bundle handles the given file extension.
    fn handles_extension(&self, ext: &str) -> bool {
        self.file_extensions().contains(&ext)
    }
}
