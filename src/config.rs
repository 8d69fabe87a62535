//! Configuration schema for codecritic.
//!
//! A configuration file tunes the heuristic thresholds and optionally points
//! at an external classification model. Every field is optional; an empty
//! file reproduces the built-in defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::detect::{
    ComplexityWeights, SmellConfig, DEFAULT_COMPLEXITY_THRESHOLD, DEFAULT_MAX_LINE_LENGTH,
};

/// Default configuration file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["codecritic.yaml", ".codecritic.yaml"];

/// Top-level analyzer configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalyzerConfig {
    /// Lines longer than this many characters are reported
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
    /// Complexity scores strictly above this are reported
    #[serde(default = "default_complexity_threshold")]
    pub complexity_threshold: f64,
    #[serde(default)]
    pub complexity_weights: ComplexityWeights,
    /// External classifier used as an additional signal source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelConfig>,
}

fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

fn default_complexity_threshold() -> f64 {
    DEFAULT_COMPLEXITY_THRESHOLD
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            complexity_threshold: DEFAULT_COMPLEXITY_THRESHOLD,
            complexity_weights: ComplexityWeights::default(),
            model: None,
        }
    }
}

impl AnalyzerConfig {
    /// Parse a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    /// Parse a configuration from YAML text. Empty text yields defaults.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: AnalyzerConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Serialize the configuration as YAML.
    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Thresholds for smell detection.
    pub fn smell_config(&self) -> SmellConfig {
        SmellConfig {
            max_line_length: self.max_line_length,
            complexity_threshold: self.complexity_threshold,
            weights: self.complexity_weights.clone(),
        }
    }
}

/// Connection settings for an external classification model.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ModelConfig {
    /// URL that accepts `{code, language}` and returns an analysis report
    pub endpoint: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_model_name() -> String {
    "remote-classifier".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl ModelConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model_name: default_model_name(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Validate a configuration.
pub fn validate(config: &AnalyzerConfig) -> anyhow::Result<()> {
    if config.max_line_length == 0 {
        anyhow::bail!("max_line_length must be greater than 0");
    }

    if !(0.0..=1.0).contains(&config.complexity_threshold) {
        anyhow::bail!(
            "complexity_threshold must be between 0 and 1, got {}",
            config.complexity_threshold
        );
    }

    for (keyword, weight) in config.complexity_weights.iter() {
        if keyword.trim().is_empty() {
            anyhow::bail!("complexity_weights contains an empty keyword");
        }
        if !weight.is_finite() || weight < 0.0 {
            anyhow::bail!(
                "complexity weight for {:?} must be a non-negative number, got {}",
                keyword,
                weight
            );
        }
    }

    if let Some(model) = &config.model {
        if model.endpoint.trim().is_empty() {
            anyhow::bail!("model.endpoint must not be empty");
        }
        if model.timeout_ms == 0 {
            anyhow::bail!("model.timeout_ms must be greater than 0");
        }
    }

    Ok(())
}

/// Find a configuration file in `dir`, if one exists.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
