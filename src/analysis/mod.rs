//! Lightweight, regex-driven code feature analysis.
//!
//! This module turns a raw snippet into a `FeatureSet`:
//! - Tokens (word runs and single symbols)
//! - Size measurements (characters, lines)
//! - Language-specific signals (type annotations, docstrings, function and
//!   class counts, async usage)
//!
//! No parsing happens here. Signals come from surface pattern matching and
//! are expected to be approximate.
//!
//! # Adding a New Language
//!
//! 1. Create a new module in `src/analysis/languages/` (e.g., `ruby.rs`)
//! 2. Implement the `LanguageSupport` trait
//! 3. Register the bundle in `languages/mod.rs`
//!
//! See `languages/python.rs` for a reference implementation.

mod features;
mod languages;
mod tokenizer;
mod traits;

pub use features::{extract_features, FeatureMap, FeatureSet, FeatureValue, BASE_FEATURES};
pub use languages::{
    get_language, language_for_extension, register_languages, supported_extensions,
    supported_languages, JavaScriptSupport, PythonSupport,
};
pub use tokenizer::tokenize;
pub use traits::LanguageSupport;
