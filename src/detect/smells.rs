//! Detection of code smells: overlong lines and globally complex code.

use super::{Category, ComplexityWeights, Issue, Severity};

/// Default maximum line length, in characters.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 80;

/// Default complexity score above which the snippet is flagged.
pub const DEFAULT_COMPLEXITY_THRESHOLD: f64 = 0.7;

/// Thresholds used by smell detection.
#[derive(Debug, Clone, PartialEq)]
pub struct SmellConfig {
    pub max_line_length: usize,
    /// Flag when the complexity score is strictly greater than this
    pub complexity_threshold: f64,
    pub weights: ComplexityWeights,
}

impl Default for SmellConfig {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            complexity_threshold: DEFAULT_COMPLEXITY_THRESHOLD,
            weights: ComplexityWeights::default(),
        }
    }
}

/// Find code smells with the default thresholds.
///
/// `language` is accepted for per-language rules; none exist yet.
pub fn find_code_smells(code: &str, language: &str) -> Vec<Issue> {
    find_code_smells_with(code, language, &SmellConfig::default())
}

/// Find code smells with explicit thresholds.
///
/// Line scans come first (ascending line order), then the global
/// complexity check.
pub fn find_code_smells_with(code: &str, _language: &str, config: &SmellConfig) -> Vec<Issue> {
    let mut issues = detect_long_lines(code, config.max_line_length);

    let complexity = config.weights.score(code);
    if complexity > config.complexity_threshold {
        tracing::debug!(complexity, "snippet exceeds complexity threshold");
        issues.push(Issue {
            kind: Category::Complexity,
            message: "High code complexity detected".to_string(),
            line: 1,
            severity: Severity::Medium,
        });
    }

    issues
}

/// One style issue per line longer than `max_len` characters.
fn detect_long_lines(code: &str, max_len: usize) -> Vec<Issue> {
    let message = format!(
        "Line exceeds recommended length of {} characters",
        max_len
    );

    code.lines()
        .enumerate()
        .filter(|(_, line)| line.chars().count() > max_len)
        .map(|(idx, _)| Issue {
            kind: Category::Style,
            message: message.clone(),
            line: idx + 1,
            severity: Severity::Low,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_long_line() {
        let code = format!("{}\n{}\n{}", "a".repeat(10), "b".repeat(85), "c".repeat(10));
        let issues = find_code_smells(&code, "python");

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, Category::Style);
        assert_eq!(issues[0].line, 2);
        assert_eq!(issues[0].severity, Severity::Low);
        assert_eq!(
            issues[0].message,
            "Line exceeds recommended length of 80 characters"
        );
    }

    #[test]
    fn test_exactly_80_is_fine() {
        let code = "x".repeat(80);
        assert!(find_code_smells(&code, "python").is_empty());
        let code = "x".repeat(81);
        assert_eq!(find_code_smells(&code, "python").len(), 1);
    }

    #[test]
    fn test_line_length_counts_characters() {
        // 80 multi-byte characters are still 80 characters
        let code = "é".repeat(80);
        assert!(find_code_smells(&code, "javascript").is_empty());
    }

    #[test]
    fn test_multiple_long_lines_in_order() {
        let long = "y".repeat(90);
        let code = format!("{}\nshort\n{}\n{}", long, long, long);
        let lines: Vec<_> = find_code_smells(&code, "cobol")
            .iter()
            .map(|i| i.line)
            .collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }

    #[test]
    fn test_complexity_issue_comes_last() {
        let mut code = "if ".repeat(8);
        code.push('\n');
        code.push_str(&"z".repeat(100));

        let issues = find_code_smells(&code, "python");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].kind, Category::Style);
        assert_eq!(issues[1].kind, Category::Complexity);
        assert_eq!(issues[1].line, 1);
        assert_eq!(issues[1].severity, Severity::Medium);
        assert_eq!(issues[1].message, "High code complexity detected");
    }

    #[test]
    fn test_complexity_threshold_is_strict() {
        // Seven ifs sum to exactly 0.7, which is not above the threshold
        let code = "if ".repeat(7);
        assert!(find_code_smells(&code, "python").is_empty());

        let code = "if ".repeat(8);
        assert_eq!(find_code_smells(&code, "python").len(), 1);
    }

    #[test]
    fn test_language_does_not_change_result() {
        let code = format!("{}\n{}", "q".repeat(95), "while ".repeat(10));
        let python = find_code_smells(&code, "python");
        assert_eq!(python, find_code_smells(&code, "javascript"));
        assert_eq!(python, find_code_smells(&code, "unknown"));
    }

    #[test]
    fn test_custom_config() {
        let config = SmellConfig {
            max_line_length: 10,
            complexity_threshold: 0.05,
            ..Default::default()
        };
        let issues = find_code_smells_with("if something_long_here", "python", &config);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("10 characters"));
    }

    #[test]
    fn test_empty_code() {
        assert!(find_code_smells("", "python").is_empty());
    }
}
