//! Python feature extraction and suggestion rules.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::{FeatureMap, FeatureSet, LanguageSupport};
use crate::detect::{Category, Suggestion};

lazy_static! {
    /// A `def` header with at least one `name: Type` parameter, on one line.
    static ref TYPED_DEF: Regex = Regex::new(r"def \w+\([^)\n]*: \w+[^)\n]*\)").unwrap();
    static ref DEF_KEYWORD: Regex = Regex::new(r"\bdef\b").unwrap();
    static ref CLASS_KEYWORD: Regex = Regex::new(r"\bclass\b").unwrap();
}

const TYPE_HINT_MESSAGE: &str = "Consider adding type hints for better code readability";
const TYPE_HINT_EXAMPLE: &str = "def function(param: str) -> str:";

pub struct PythonSupport;

impl PythonSupport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonSupport {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageSupport for PythonSupport {
    fn language_ids(&self) -> &'static [&'static str] {
        &["python"]
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["py", "pyi"]
    }

    fn extract_features(&self, code: &str) -> FeatureMap {
        let mut features = FeatureMap::new();
        features.insert("has_type_hints".into(), TYPED_DEF.is_match(code).into());
        features.insert(
            "has_docstrings".into(),
            (code.contains("\"\"\"") || code.contains("'''")).into(),
        );
        features.insert(
            "num_functions".into(),
            DEF_KEYWORD.find_iter(code).count().into(),
        );
        features.insert(
            "num_classes".into(),
            CLASS_KEYWORD.find_iter(code).count().into(),
        );
        features
    }

    fn suggest(&self, _code: &str, features: &FeatureSet) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if !features.flag("has_type_hints") {
            suggestions.push(Suggestion {
                kind: Category::Improvement,
                message: TYPE_HINT_MESSAGE.to_string(),
                line: 1,
                example: TYPE_HINT_EXAMPLE.to_string(),
            });
        }

        suggestions
    }
}
