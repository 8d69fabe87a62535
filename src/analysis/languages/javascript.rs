//! JavaScript and TypeScript feature extraction and suggestion rules.
//!
//! Both languages share one bundle; `has_types` is a loose proxy for
//! TypeScript annotations and also fires on object literals.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::{FeatureMap, FeatureSet, LanguageSupport};
use crate::detect::{Category, Suggestion};

lazy_static! {
    static ref TYPE_ANNOTATION: Regex = Regex::new(r":\s*\w+").unwrap();
    static ref FUNCTION_OR_ARROW: Regex = Regex::new(r"\bfunction\b|=>").unwrap();
    static ref CLASS_KEYWORD: Regex = Regex::new(r"\bclass\b").unwrap();
    static ref ASYNC_KEYWORD: Regex = Regex::new(r"\basync\b").unwrap();
}

const ASYNC_MESSAGE: &str = "Consider using async/await for better promise handling";
const ASYNC_EXAMPLE: &str = "async function getData() {\n  const response = await fetch(url);\n}";

pub struct JavaScriptSupport;

impl JavaScriptSupport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JavaScriptSupport {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the code looks like it works with promises directly.
fn uses_promises(code: &str) -> bool {
    code.contains("fetch") || code.to_lowercase().contains("promise")
}

impl LanguageSupport for JavaScriptSupport {
    fn language_ids(&self) -> &'static [&'static str] {
        &["javascript", "typescript"]
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["js", "jsx", "mjs", "cjs", "ts", "tsx", "mts"]
    }

    fn extract_features(&self, code: &str) -> FeatureMap {
        let mut features = FeatureMap::new();
        features.insert("has_types".into(), TYPE_ANNOTATION.is_match(code).into());
        features.insert(
            "num_functions".into(),
            FUNCTION_OR_ARROW.find_iter(code).count().into(),
        );
        features.insert(
            "num_classes".into(),
            CLASS_KEYWORD.find_iter(code).count().into(),
        );
        features.insert("uses_async".into(), ASYNC_KEYWORD.is_match(code).into());
        features
    }

    fn suggest(&self, code: &str, features: &FeatureSet) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if !features.flag("uses_async") && uses_promises(code) {
            suggestions.push(Suggestion {
                kind: Category::Improvement,
                message: ASYNC_MESSAGE.to_string(),
                line: 1,
                example: ASYNC_EXAMPLE.to_string(),
            });
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extract_features;

    fn features_of(code: &str) -> FeatureMap {
        JavaScriptSupport::new().extract_features(code)
    }

    #[test]
    fn test_counts_functions_and_arrows() {
        let code = r#"
function a() {}
const b = () => 1;
const c = x=>x * 2;
class D {}
"#;
        let f = features_of(code);
        assert_eq!(f["num_functions"].as_count(), Some(3));
        assert_eq!(f["num_classes"].as_count(), Some(1));
    }

    #[test]
    fn test_has_types() {
        assert_eq!(
            features_of("let n: number = 1;")["has_types"].as_flag(),
            Some(true)
        );
        assert_eq!(features_of("let n = 1;")["has_types"].as_flag(), Some(false));
        // Loose proxy: object literals also match
        assert_eq!(
            features_of("const o = { key:value };")["has_types"].as_flag(),
            Some(true)
        );
    }

    #[test]
    fn test_uses_async_word_boundary() {
        assert_eq!(
            features_of("async function f() {}")["uses_async"].as_flag(),
            Some(true)
        );
        assert_eq!(
            features_of("const asyncQueue = [];")["uses_async"].as_flag(),
            Some(false)
        );
    }

    #[test]
    fn test_suggests_async_for_fetch() {
        let code = "function getData() { return fetch(url); }";
        let features = extract_features(code, "javascript");
        assert!(!features.flag("uses_async"));

        let suggestions = JavaScriptSupport::new().suggest(code, &features);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].message, ASYNC_MESSAGE);
        assert_eq!(suggestions[0].example, ASYNC_EXAMPLE);
    }

    #[test]
    fn test_suggests_async_for_promise_any_case() {
        let code = "return new Promise((resolve) => resolve(1));";
        let features = extract_features(code, "typescript");
        assert_eq!(JavaScriptSupport::new().suggest(code, &features).len(), 1);
    }

    #[test]
    fn test_no_suggestion_when_async_used() {
        let code = "async function getData() { return fetch(url); }";
        let features = extract_features(code, "javascript");
        assert!(JavaScriptSupport::new().suggest(code, &features).is_empty());
    }

    #[test]
    fn test_no_suggestion_without_promises() {
        let code = "function add(a, b) { return a + b; }";
        let features = extract_features(code, "javascript");
        assert!(JavaScriptSupport::new().suggest(code, &features).is_empty());
    }
}
