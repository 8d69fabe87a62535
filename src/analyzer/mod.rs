//! Analyzer capability and its implementations.
//!
//! ```text
//! ┌───────────────────┐     ┌────────────────────┐
//! │ HeuristicAnalyzer │     │ ModelAnalyzer      │
//! │ (smells, features,│     │ (Classifier, e.g.  │
//! │  suggestions)     │     │  RemoteClassifier) │
//! └─────────┬─────────┘     └─────────┬──────────┘
//!           │ primary                 │ secondary
//!           ▼                         ▼
//!         ┌─────────────────────────────┐
//!         │ CompositeAnalyzer (merge)   │
//!         └─────────────────────────────┘
//! ```
//!
//! The heuristic report is the source of truth; model output is layered on
//! top of it and never replaces it.

mod composite;
mod heuristic;
mod model;

pub use composite::CompositeAnalyzer;
pub use heuristic::HeuristicAnalyzer;
pub use model::{preprocess_code, Classifier, ModelAnalyzer, RemoteClassifier};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::detect::AnalysisReport;

/// Errors that can occur in analyzer operations.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("{analyzer} analyzer does not support {operation}")]
    Unsupported {
        operation: &'static str,
        analyzer: String,
    },
    #[error("model error: {0}")]
    Model(String),
    #[error("model request timed out")]
    Timeout,
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A labelled sample for training or evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    pub code: String,
    #[serde(default)]
    pub language: String,
    pub label: i64,
}

/// Hyperparameters for `CodeAnalyzer::train`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingOptions {
    pub epochs: usize,
    pub batch_size: usize,
    pub learning_rate: f64,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            epochs: 3,
            batch_size: 16,
            learning_rate: 2e-5,
        }
    }
}

/// Evaluation metrics keyed by name (e.g., "loss", "accuracy").
pub type Evaluation = BTreeMap<String, f64>;

/// Descriptive metadata about an analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_name: String,
    pub model_type: String,
    pub version: String,
    #[serde(default, flatten)]
    pub details: BTreeMap<String, String>,
}

/// A source of analysis reports.
///
/// Only `analyze` and `model_info` are required. Training, evaluation and
/// persistence default to `AnalyzerError::Unsupported`.
pub trait CodeAnalyzer: Send + Sync {
    /// Analyze a snippet and return issues, suggestions and metrics.
    fn analyze(&self, code: &str, language: &str) -> Result<AnalysisReport, AnalyzerError>;

    /// Describe this analyzer.
    fn model_info(&self) -> ModelInfo;

    /// Train on labelled samples.
    fn train(
        &mut self,
        _examples: &[TrainingExample],
        _options: &TrainingOptions,
    ) -> Result<(), AnalyzerError> {
        Err(unsupported(&*self, "training"))
    }

    /// Evaluate against labelled samples.
    fn evaluate(&self, _examples: &[TrainingExample]) -> Result<Evaluation, AnalyzerError> {
        Err(unsupported(self, "evaluation"))
    }

    /// Persist analyzer state under `path`.
    fn save(&self, _path: &Path) -> Result<(), AnalyzerError> {
        Err(unsupported(self, "save"))
    }

    /// Restore analyzer state from `path`.
    fn load(&mut self, _path: &Path) -> Result<(), AnalyzerError> {
        Err(unsupported(&*self, "load"))
    }
}

fn unsupported<A: CodeAnalyzer + ?Sized>(analyzer: &A, operation: &'static str) -> AnalyzerError {
    AnalyzerError::Unsupported {
        operation,
        analyzer: analyzer.model_info().model_type,
    }
}

/// Analyze a snippet with the default heuristic configuration.
///
/// Never fails: every string/string input yields a report.
pub fn analyze(code: &str, language: &str) -> AnalysisReport {
    HeuristicAnalyzer::default().report(code, language)
}
