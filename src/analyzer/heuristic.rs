//! Heuristic analyzer: the composition of smell detection, suggestion
//! rules and complexity scoring.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::analysis::supported_languages;
use crate::config::{self, AnalyzerConfig};
use crate::detect::{find_code_smells_with, suggest_improvements, AnalysisReport, Metric};

use super::{AnalyzerError, CodeAnalyzer, ModelInfo};

/// Analyzer backed purely by pattern heuristics.
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnalyzer {
    config: AnalyzerConfig,
}

impl HeuristicAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Build the report for a snippet. Total over all inputs.
    pub fn report(&self, code: &str, language: &str) -> AnalysisReport {
        let smell_config = self.config.smell_config();
        let complexity = smell_config.weights.score(code);

        let report = AnalysisReport {
            issues: find_code_smells_with(code, language, &smell_config),
            suggestions: suggest_improvements(code, language),
            metrics: vec![Metric {
                name: "complexity".to_string(),
                value: complexity,
                description: "Code complexity score (0-1)".to_string(),
            }],
        };

        tracing::debug!(
            language,
            issues = report.issues.len(),
            suggestions = report.suggestions.len(),
            complexity,
            "heuristic analysis complete"
        );

        report
    }
}

impl CodeAnalyzer for HeuristicAnalyzer {
    fn analyze(&self, code: &str, language: &str) -> Result<AnalysisReport, AnalyzerError> {
        Ok(self.report(code, language))
    }

    fn model_info(&self) -> ModelInfo {
        let mut details = BTreeMap::new();
        details.insert("languages".to_string(), supported_languages().join(","));
        details.insert(
            "max_line_length".to_string(),
            self.config.max_line_length.to_string(),
        );
        details.insert(
            "complexity_threshold".to_string(),
            self.config.complexity_threshold.to_string(),
        );

        ModelInfo {
            model_name: "codecritic-heuristics".to_string(),
            model_type: "heuristic".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            details,
        }
    }

    /// Write the active configuration as YAML.
    fn save(&self, path: &Path) -> Result<(), AnalyzerError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let yaml = serde_yaml::to_string(&self.config)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Replace the active configuration with one read from YAML.
    fn load(&mut self, path: &Path) -> Result<(), AnalyzerError> {
        let content = fs::read_to_string(path)?;
        let loaded =
            AnalyzerConfig::parse_str(&content).map_err(|e| AnalyzerError::Config(e.to_string()))?;
        config::validate(&loaded).map_err(|e| AnalyzerError::Config(e.to_string()))?;
        self.config = loaded;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{TrainingExample, TrainingOptions};
    use crate::detect::Category;
    use tempfile::TempDir;

    #[test]
    fn test_report_matches_facade() {
        let code = "function getData() { return fetch(url); }";
        let analyzer = HeuristicAnalyzer::default();
        let report = analyzer.analyze(code, "javascript").unwrap();
        assert_eq!(report, crate::analyzer::analyze(code, "javascript"));
        assert_eq!(report.suggestions.len(), 1);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_complexity_metric() {
        let report = HeuristicAnalyzer::default().report("if a: pass\nfor b in c: pass", "python");
        let metric = report.metric("complexity").unwrap();
        assert!((metric.value - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_custom_config_applies() {
        let config = AnalyzerConfig {
            max_line_length: 5,
            ..Default::default()
        };
        let report = HeuristicAnalyzer::new(config).report("short\nlonger line", "cobol");
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, Category::Style);
        assert_eq!(report.issues[0].line, 2);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("heuristics.yaml");

        let config = AnalyzerConfig {
            max_line_length: 100,
            complexity_threshold: 0.5,
            ..Default::default()
        };
        HeuristicAnalyzer::new(config.clone()).save(&path).unwrap();

        let mut restored = HeuristicAnalyzer::default();
        restored.load(&path).unwrap();
        assert_eq!(restored.config(), &config);
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yaml");
        std::fs::write(&path, "complexity_threshold: 3.0\n").unwrap();

        let mut analyzer = HeuristicAnalyzer::default();
        let err = analyzer.load(&path).unwrap_err();
        assert!(matches!(err, AnalyzerError::Config(_)));
        assert_eq!(analyzer.config(), &AnalyzerConfig::default());
    }

    #[test]
    fn test_training_is_unsupported() {
        let mut analyzer = HeuristicAnalyzer::default();
        let examples = vec![TrainingExample {
            code: "x = 1".to_string(),
            language: "python".to_string(),
            label: 0,
        }];

        let err = analyzer
            .train(&examples, &TrainingOptions::default())
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::Unsupported { operation: "training", .. }));
        assert!(analyzer.evaluate(&examples).is_err());
    }

    #[test]
    fn test_model_info() {
        let info = HeuristicAnalyzer::default().model_info();
        assert_eq!(info.model_type, "heuristic");
        assert_eq!(info.details["languages"], "python,javascript,typescript");
    }
}
