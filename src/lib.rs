//! Codecritic - heuristic code snippet analysis.
//!
//! Codecritic takes a source snippet plus a declared language and returns a
//! fixed-shape report: detected issues, improvement suggestions and quality
//! metrics. It is a lightweight token and regex heuristic system, not a
//! compiler front end.
//!
//! # Architecture
//!
//! - `analysis`: Tokenizer, feature extraction and the per-language registry
//! - `detect`: Complexity scoring, smell detection and suggestion rules
//! - `analyzer`: The `CodeAnalyzer` trait with heuristic, model-backed and
//!   composite implementations, plus the `analyze` facade
//! - `config`: YAML configuration for thresholds and the optional model
//! - `report`: Output formatting (pretty, JSON)
//!
//! # Adding a New Language
//!
//! See `src/analysis/languages/` for examples. Implement the
//! `LanguageSupport` trait and register it in `languages/mod.rs`.
//!
//! # Example
//!
//! ```
//! let report = codecritic::analyze("def add(a, b):\n    return a+b", "python");
//! assert_eq!(report.suggestions.len(), 1);
//! assert_eq!(report.metrics[0].name, "complexity");
//! ```

pub mod analysis;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod detect;
pub mod report;

pub use analysis::{
    extract_features, get_language, tokenize, FeatureSet, FeatureValue, LanguageSupport,
};
pub use analyzer::{
    analyze, AnalyzerError, Classifier, CodeAnalyzer, CompositeAnalyzer, HeuristicAnalyzer,
    ModelAnalyzer, ModelInfo, RemoteClassifier,
};
pub use config::AnalyzerConfig;
pub use detect::{
    calculate_complexity, find_code_smells, suggest_improvements, AnalysisReport, Category, Issue,
    Metric, Severity, Suggestion,
};
