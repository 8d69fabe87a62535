//! Core types for analysis reports.

use serde::{Deserialize, Serialize};

/// Severity levels for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// Category tag carried in the `type` field of issues and suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Style,
    Complexity,
    Improvement,
    /// Any tag produced by an external model that we do not recognize
    #[serde(other)]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Style => "style",
            Category::Complexity => "complexity",
            Category::Improvement => "improvement",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single detected quality concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: Category,
    pub message: String,
    /// 1-based line number; 1 for whole-snippet issues
    pub line: usize,
    pub severity: Severity,
}

/// A single improvement suggestion with an illustrative snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: Category,
    pub message: String,
    pub line: usize,
    pub example: String,
}

/// A named numeric measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub value: f64,
    pub description: String,
}

/// Result of analyzing one snippet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

impl AnalysisReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer a secondary report onto this one.
    ///
    /// Entries from `other` are appended after ours. Issues and suggestions
    /// equal to one we already hold are dropped. A metric whose name we
    /// already report is kept under `model.<name>`.
    pub fn merge(&mut self, other: AnalysisReport) {
        for issue in other.issues {
            if !self.issues.iter().any(|i| issues_match(i, &issue)) {
                self.issues.push(issue);
            }
        }

        for suggestion in other.suggestions {
            if !self
                .suggestions
                .iter()
                .any(|s| suggestions_match(s, &suggestion))
            {
                self.suggestions.push(suggestion);
            }
        }

        for mut metric in other.metrics {
            if self.metric(&metric.name).is_some() {
                metric.name = format!("model.{}", metric.name);
            }
            self.metrics.push(metric);
        }
    }

    /// Find a metric by name.
    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.name == name)
    }

    /// Highest issue severity, if any issues exist.
    pub fn max_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|i| i.severity).max()
    }

    /// Whether any issue is at or above the given severity.
    pub fn has_issues_at(&self, severity: Severity) -> bool {
        self.issues.iter().any(|i| i.severity >= severity)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.suggestions.is_empty()
    }
}

/// Check if two issues match (severity ignored).
fn issues_match(a: &Issue, b: &Issue) -> bool {
    a.kind == b.kind && a.message == b.message && a.line == b.line
}

fn suggestions_match(a: &Suggestion, b: &Suggestion) -> bool {
    a.kind == b.kind && a.message == b.message && a.line == b.line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_issue(line: usize) -> Issue {
        Issue {
            kind: Category::Style,
            message: "long line".to_string(),
            line,
            severity: Severity::Low,
        }
    }

    fn metric(name: &str, value: f64) -> Metric {
        Metric {
            name: name.to_string(),
            value,
            description: String::new(),
        }
    }

    #[test]
    fn test_severity_ordering_and_parse() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert_eq!("HIGH".parse::<Severity>(), Ok(Severity::High));
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn test_issue_serializes_type_field() {
        let json = serde_json::to_value(style_issue(3)).unwrap();
        assert_eq!(json["type"], "style");
        assert_eq!(json["severity"], "low");
        assert_eq!(json["line"], 3);
    }

    #[test]
    fn test_unknown_category_deserializes_as_other() {
        let issue: Issue = serde_json::from_str(
            r#"{"type": "naming", "message": "m", "line": 1, "severity": "low"}"#,
        )
        .unwrap();
        assert_eq!(issue.kind, Category::Other);
    }

    #[test]
    fn test_merge_appends_and_dedupes() {
        let mut primary = AnalysisReport {
            issues: vec![style_issue(1)],
            metrics: vec![metric("complexity", 0.2)],
            ..Default::default()
        };
        let secondary = AnalysisReport {
            issues: vec![style_issue(1), style_issue(4)],
            metrics: vec![metric("complexity", 0.75), metric("confidence", 0.9)],
            ..Default::default()
        };

        primary.merge(secondary);

        assert_eq!(primary.issues.len(), 2);
        assert_eq!(primary.issues[1].line, 4);
        let names: Vec<_> = primary.metrics.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["complexity", "model.complexity", "confidence"]);
        assert_eq!(primary.metric("complexity").unwrap().value, 0.2);
    }

    #[test]
    fn test_has_issues_at() {
        let report = AnalysisReport {
            issues: vec![style_issue(1)],
            ..Default::default()
        };
        assert!(report.has_issues_at(Severity::Low));
        assert!(!report.has_issues_at(Severity::Medium));
        assert_eq!(report.max_severity(), Some(Severity::Low));
        assert_eq!(AnalysisReport::new().max_severity(), None);
    }
}
