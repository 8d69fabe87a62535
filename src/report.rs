//! Output formatting for codecritic results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::detect::{AnalysisReport, Issue, Metric, Severity, Suggestion};

/// The analysis of one input (file or stdin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,
    pub language: String,
    pub report: AnalysisReport,
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON envelope for multi-file runs.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub files_analyzed: usize,
    pub total_issues: usize,
    pub total_suggestions: usize,
    pub files: Vec<FileReport>,
}

impl JsonReport {
    pub fn new(files: &[FileReport]) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            files_analyzed: files.len(),
            total_issues: files.iter().map(|f| f.report.issues.len()).sum(),
            total_suggestions: files.iter().map(|f| f.report.suggestions.len()).sum(),
            files: files.to_vec(),
        }
    }
}

/// Render a multi-file run as pretty-printed JSON.
pub fn render_json(files: &[FileReport]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(files))?)
}

/// Write a multi-file run as JSON to stdout.
pub fn write_json(files: &[FileReport]) -> anyhow::Result<()> {
    println!("{}", render_json(files)?);
    Ok(())
}

/// Write a single bare report (stdin mode) as JSON to stdout.
pub fn write_json_report(report: &AnalysisReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(files: &[FileReport]) {
    // Header
    println!();
    print!("  ");
    print!("{}", "codecritic".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    for file in files {
        write_file(file);
    }

    write_summary(files);
    println!();
}

fn write_file(file: &FileReport) {
    print!("  {}", file.path.blue().bold());
    println!("  {}", format!("({})", file.language).dimmed());
    println!();

    let report = &file.report;
    if report.is_clean() {
        println!("    {}", "✓ no issues or suggestions".green());
        println!();
    }

    if !report.issues.is_empty() {
        write_issues(&report.issues);
    }

    if !report.suggestions.is_empty() {
        write_suggestions(&report.suggestions);
    }

    if !report.metrics.is_empty() {
        write_metrics(&report.metrics);
        println!();
    }
}

fn write_issues(issues: &[Issue]) {
    println!("  {} ({}):", "Issues".bold(), issues.len());
    println!();

    for issue in issues {
        write_severity_tag(&issue.severity);
        print!("   ");
        print!("{:<12}", issue.kind.as_str().dimmed());
        println!("{}", format!("line {}", issue.line).dimmed());

        // Message on next line, indented
        println!("            {}", issue.message);
        println!();
    }
}

fn write_severity_tag(severity: &Severity) {
    match severity {
        Severity::High => print!("    {} ", "HIGH".red()),
        Severity::Medium => print!("    {} ", "MED ".yellow()),
        Severity::Low => print!("    {} ", "LOW ".blue()),
    }
}

fn write_suggestions(suggestions: &[Suggestion]) {
    println!("  {} ({}):", "Suggestions".bold(), suggestions.len());
    println!();

    for s in suggestions {
        print!("    {} ", "HINT".cyan());
        print!("   ");
        print!("{:<12}", s.kind.as_str().dimmed());
        println!("{}", format!("line {}", s.line).dimmed());
        println!("            {}", s.message);

        for line in s.example.lines() {
            println!("              {}", line.green());
        }
        println!();
    }
}

fn write_metrics(metrics: &[Metric]) {
    println!("  {}", "Metrics:".bold());
    for m in metrics {
        print!("    {:<20} ", m.name);
        write_colored_value(m.value);
        println!("  {}", m.description.dimmed());
    }
}

fn write_colored_value(value: f64) {
    let text = format!("{:.2}", value);
    match value {
        v if v <= 0.3 => print!("{}", text.green()),
        v if v <= 0.7 => print!("{}", text.yellow()),
        _ => print!("{}", text.red()),
    }
}

fn write_summary(files: &[FileReport]) {
    let issues: usize = files.iter().map(|f| f.report.issues.len()).sum();
    let suggestions: usize = files.iter().map(|f| f.report.suggestions.len()).sum();
    let plural = if files.len() != 1 { "s" } else { "" };

    print!(
        "  {}",
        format!("Analyzed {} file{}", files.len(), plural).dimmed()
    );
    print!("  Issues: ");
    if issues == 0 {
        print!("{}", issues.to_string().green());
    } else {
        print!("{}", issues.to_string().yellow());
    }
    println!("  Suggestions: {}", suggestions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn test_render_json_shape() {
        let files = vec![
            FileReport {
                path: "a.py".to_string(),
                language: "python".to_string(),
                report: analyze("def add(a, b):\n    return a+b", "python"),
            },
            FileReport {
                path: "b.js".to_string(),
                language: "javascript".to_string(),
                report: analyze("const x = 1;", "javascript"),
            },
        ];

        let json: serde_json::Value = serde_json::from_str(&render_json(&files).unwrap()).unwrap();
        assert_eq!(json["files_analyzed"], 2);
        assert_eq!(json["total_issues"], 0);
        assert_eq!(json["total_suggestions"], 1);
        assert_eq!(json["files"][0]["path"], "a.py");
        assert_eq!(
            json["files"][0]["report"]["suggestions"][0]["type"],
            "improvement"
        );
        assert_eq!(
            json["files"][1]["report"]["metrics"][0]["name"],
            "complexity"
        );
    }
}
