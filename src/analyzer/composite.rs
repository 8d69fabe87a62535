//! Layering of a secondary signal source over a primary analyzer.

use crate::detect::AnalysisReport;

use super::{AnalyzerError, CodeAnalyzer, ModelInfo};

/// Runs a primary analyzer and folds in an optional secondary one.
///
/// The primary report always comes first and is never altered. When the
/// secondary analyzer fails, the failure is logged and the primary report
/// is returned on its own.
pub struct CompositeAnalyzer {
    primary: Box<dyn CodeAnalyzer>,
    secondary: Option<Box<dyn CodeAnalyzer>>,
}

impl CompositeAnalyzer {
    pub fn new(primary: Box<dyn CodeAnalyzer>) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Add a secondary signal source.
    pub fn with_secondary(mut self, secondary: Box<dyn CodeAnalyzer>) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }
}

impl CodeAnalyzer for CompositeAnalyzer {
    fn analyze(&self, code: &str, language: &str) -> Result<AnalysisReport, AnalyzerError> {
        let mut report = self.primary.analyze(code, language)?;

        if let Some(secondary) = &self.secondary {
            match secondary.analyze(code, language) {
                Ok(extra) => report.merge(extra),
                Err(e) => {
                    tracing::warn!(
                        analyzer = %secondary.model_info().model_name,
                        error = %e,
                        "secondary analyzer failed, using primary report only"
                    );
                }
            }
        }

        Ok(report)
    }

    fn model_info(&self) -> ModelInfo {
        let primary = self.primary.model_info();
        let mut details = primary.details;
        details.insert("primary".to_string(), primary.model_name.clone());

        if let Some(secondary) = &self.secondary {
            let info = secondary.model_info();
            details.insert("secondary".to_string(), info.model_name);
            for (key, value) in info.details {
                details.entry(format!("secondary.{}", key)).or_insert(value);
            }
        }

        ModelInfo {
            model_name: primary.model_name,
            model_type: "composite".to_string(),
            version: primary.version,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::HeuristicAnalyzer;
    use crate::detect::{Category, Issue, Metric, Severity};

    struct StubAnalyzer {
        result: Option<AnalysisReport>,
    }

    impl CodeAnalyzer for StubAnalyzer {
        fn analyze(&self, _code: &str, _language: &str) -> Result<AnalysisReport, AnalyzerError> {
            self.result
                .clone()
                .ok_or_else(|| AnalyzerError::Model("offline".to_string()))
        }

        fn model_info(&self) -> ModelInfo {
            ModelInfo {
                model_name: "stub".to_string(),
                model_type: "model".to_string(),
                version: "1.0.0".to_string(),
                details: [("device".to_string(), "cpu".to_string())].into_iter().collect(),
            }
        }
    }

    fn model_report() -> AnalysisReport {
        AnalysisReport {
            issues: vec![Issue {
                kind: Category::Style,
                message: "Consider using more descriptive variable names".to_string(),
                line: 1,
                severity: Severity::Low,
            }],
            suggestions: vec![],
            metrics: vec![Metric {
                name: "complexity".to_string(),
                value: 0.75,
                description: "Code complexity score (0-1)".to_string(),
            }],
        }
    }

    #[test]
    fn test_primary_only() {
        let composite = CompositeAnalyzer::new(Box::new(HeuristicAnalyzer::default()));
        assert!(!composite.has_secondary());

        let code = "def add(a, b):\n    return a+b";
        let report = composite.analyze(code, "python").unwrap();
        assert_eq!(report, crate::analyzer::analyze(code, "python"));
    }

    #[test]
    fn test_secondary_is_layered_after_primary() {
        let composite = CompositeAnalyzer::new(Box::new(HeuristicAnalyzer::default()))
            .with_secondary(Box::new(StubAnalyzer {
                result: Some(model_report()),
            }));

        let code = "def add(a, b):\n    return a+b";
        let report = composite.analyze(code, "python").unwrap();

        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(report.metrics.len(), 2);
        assert_eq!(report.metrics[0].name, "complexity");
        assert_eq!(report.metrics[0].value, 0.0);
        assert_eq!(report.metrics[1].name, "model.complexity");
        assert_eq!(report.metrics[1].value, 0.75);
    }

    #[test]
    fn test_failing_secondary_falls_back() {
        let composite = CompositeAnalyzer::new(Box::new(HeuristicAnalyzer::default()))
            .with_secondary(Box::new(StubAnalyzer { result: None }));

        let code = "function f() { return fetch(u); }";
        let report = composite.analyze(code, "javascript").unwrap();
        assert_eq!(report, crate::analyzer::analyze(code, "javascript"));
    }

    #[test]
    fn test_model_info_lists_both() {
        let composite = CompositeAnalyzer::new(Box::new(HeuristicAnalyzer::default()))
            .with_secondary(Box::new(StubAnalyzer { result: None }));

        let info = composite.model_info();
        assert_eq!(info.model_type, "composite");
        assert_eq!(info.details["primary"], "codecritic-heuristics");
        assert_eq!(info.details["secondary"], "stub");
        assert_eq!(info.details["secondary.device"], "cpu");
    }
}
