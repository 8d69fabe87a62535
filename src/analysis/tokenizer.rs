//! Lexical tokenizer shared by feature extraction and complexity scoring.
//!
//! Tokens are either maximal runs of `[A-Za-z0-9_]` or single characters
//! that are neither word characters nor whitespace. Whitespace separates
//! tokens and is never emitted.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TOKEN_PATTERN: Regex = Regex::new(r"[A-Za-z0-9_]+|[^A-Za-z0-9_\s]").unwrap();
}

/// Split source text into word runs and single symbol characters, in source order.
pub fn tokenize(code: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(code)
        .map(|m| m.as_str().to_string())
        .collect()
}
