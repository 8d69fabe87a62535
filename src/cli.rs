//! Command-line interface for codecritic.

use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::analysis::{language_for_extension, supported_extensions, supported_languages};
use crate::analyzer::{CodeAnalyzer, CompositeAnalyzer, HeuristicAnalyzer, ModelAnalyzer};
use crate::config::{self, AnalyzerConfig, ModelConfig};
use crate::detect::Severity;
use crate::report::{self, FileReport};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Path argument that selects standard input.
const STDIN_PATH: &str = "-";

/// Heuristic code analyzer - detect code smells and suggest improvements.
///
/// Codecritic tokenizes source snippets, extracts lightweight per-language
/// features, scores control-flow complexity and reports style issues along
/// with improvement suggestions.
#[derive(Parser)]
#[command(name = "codecritic")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a file, a directory, or stdin
    #[command(visible_alias = "check")]
    Analyze(AnalyzeArgs),
    /// Print analyzer metadata as JSON
    Info(InfoArgs),
    /// Write a default configuration file
    Init(InitArgs),
    /// List supported languages and file extensions
    Languages,
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to analyze (file or directory), or "-" for stdin
    pub path: PathBuf,

    /// Language of the input (required for stdin, inferred from extension otherwise)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Path to configuration YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// URL of an external classifier to layer on top of the heuristics
    #[arg(long)]
    pub model_endpoint: Option<String>,

    /// Exit non-zero if any issue has at least this severity
    #[arg(long)]
    pub fail_on: Option<Severity>,
}

/// Arguments for the info command.
#[derive(Parser)]
pub struct InfoArgs {
    /// Path to configuration YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// URL of an external classifier to layer on top of the heuristics
    #[arg(long)]
    pub model_endpoint: Option<String>,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "codecritic.yaml")]
    pub output: PathBuf,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load the configuration from an explicit path, the working directory, or defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<AnalyzerConfig> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => config::discover(&std::env::current_dir()?),
    };

    let config = match path {
        Some(p) => {
            tracing::info!(path = %p.display(), "loading configuration");
            AnalyzerConfig::parse_file(&p)
                .with_context(|| format!("parsing config {}", p.display()))?
        }
        None => AnalyzerConfig::default(),
    };

    config::validate(&config).context("invalid configuration")?;
    Ok(config)
}

/// Apply a command-line model endpoint over the configured one.
fn apply_endpoint(config: &mut AnalyzerConfig, endpoint: Option<&str>) {
    if let Some(url) = endpoint {
        match config.model.as_mut() {
            Some(model) => model.endpoint = url.to_string(),
            None => config.model = Some(ModelConfig::new(url)),
        }
    }
}

/// Build the analyzer stack: heuristics first, then an optional model.
pub fn build_analyzer(config: &AnalyzerConfig) -> anyhow::Result<Box<dyn CodeAnalyzer>> {
    let mut analyzer =
        CompositeAnalyzer::new(Box::new(HeuristicAnalyzer::new(config.clone())));

    if let Some(model) = &config.model {
        tracing::info!(endpoint = %model.endpoint, "using remote classifier");
        analyzer = analyzer.with_secondary(Box::new(ModelAnalyzer::remote(model.clone())?));
    }

    Ok(Box::new(analyzer))
}

/// Directories never descended into.
fn is_skipped_dir(name: &str) -> bool {
    name.starts_with('.')
        || matches!(
            name,
            "vendor" | "node_modules" | "target" | "dist" | "build" | "__pycache__" | "venv"
        )
}

/// Collect files with a recognized language under `root`.
pub fn collect_files(root: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            // Never filter the root itself, even if it is named like a skipped dir
            e.depth() == 0
                || !(e.file_type().is_dir() && is_skipped_dir(&e.file_name().to_string_lossy()))
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if language_for_extension(ext).is_some() {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Analyze one file on disk.
fn analyze_file(
    analyzer: &dyn CodeAnalyzer,
    path: &Path,
    language_override: Option<&str>,
) -> anyhow::Result<FileReport> {
    let language = match language_override {
        Some(lang) => lang.to_string(),
        None => {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            language_for_extension(ext)
                .map(str::to_string)
                .with_context(|| {
                    format!(
                        "cannot infer language for {}; pass --language",
                        path.display()
                    )
                })?
        }
    };

    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let code = String::from_utf8_lossy(&bytes);
    let report = analyzer
        .analyze(&code, &language)
        .with_context(|| format!("analyzing {}", path.display()))?;

    Ok(FileReport {
        path: path.to_string_lossy().to_string(),
        language,
        report,
    })
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let mut config = load_config(args.config.as_deref())?;
    apply_endpoint(&mut config, args.model_endpoint.as_deref());
    let analyzer = build_analyzer(&config)?;

    // Standard input
    if args.path.as_os_str() == STDIN_PATH {
        let Some(language) = args.language.as_deref() else {
            eprintln!("Error: --language is required when reading from stdin");
            return Ok(EXIT_ERROR);
        };

        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .context("reading stdin")?;
        let report = analyzer.analyze(&code, language)?;

        if args.format == "json" {
            report::write_json_report(&report)?;
        } else {
            report::write_pretty(&[FileReport {
                path: "<stdin>".to_string(),
                language: language.to_string(),
                report: report.clone(),
            }]);
        }

        return Ok(exit_code(std::slice::from_ref(&report), args.fail_on));
    }

    let metadata = match std::fs::metadata(&args.path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, e);
            return Ok(EXIT_ERROR);
        }
    };

    let files = if metadata.is_dir() {
        collect_files(&args.path)?
    } else {
        vec![args.path.clone()]
    };

    if files.is_empty() {
        eprintln!("Warning: no files to analyze");
        return Ok(EXIT_SUCCESS);
    }

    tracing::info!(count = files.len(), "analyzing files");

    let language = args.language.as_deref();
    let mut results = files
        .par_iter()
        .map(|path| analyze_file(analyzer.as_ref(), path, language))
        .collect::<anyhow::Result<Vec<_>>>()?;
    results.sort_by(|a, b| a.path.cmp(&b.path));

    match args.format.as_str() {
        "json" => report::write_json(&results)?,
        _ => report::write_pretty(&results),
    }

    let reports: Vec<_> = results.into_iter().map(|f| f.report).collect();
    Ok(exit_code(&reports, args.fail_on))
}

/// Exit code for a set of reports under an optional severity gate.
fn exit_code(reports: &[crate::detect::AnalysisReport], fail_on: Option<Severity>) -> i32 {
    match fail_on {
        Some(severity) if reports.iter().any(|r| r.has_issues_at(severity)) => EXIT_FAILED,
        _ => EXIT_SUCCESS,
    }
}

/// Run the info command.
pub fn run_info(args: &InfoArgs) -> anyhow::Result<i32> {
    let mut config = load_config(args.config.as_deref())?;
    apply_endpoint(&mut config, args.model_endpoint.as_deref());
    let analyzer = build_analyzer(&config)?;

    let json = serde_json::to_string_pretty(&analyzer.model_info())?;
    println!("{}", json);
    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    let content = AnalyzerConfig::default().to_yaml()?;
    if let Err(e) = std::fs::write(&args.output, content) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to tune thresholds", args.output.display());
    println!(
        "  2. Run: codecritic analyze . --config {}",
        args.output.display()
    );

    Ok(EXIT_SUCCESS)
}

/// Run the languages command.
pub fn run_languages() -> anyhow::Result<i32> {
    println!("Supported languages:");
    println!();
    for language in supported_languages() {
        let exts: Vec<_> = supported_extensions()
            .into_iter()
            .filter(|ext| language_for_extension(ext) == Some(language))
            .map(|ext| format!(".{}", ext))
            .collect();
        println!("  {:<14} {}", language, exts.join(" "));
    }
    println!();
    println!("Other languages are accepted and receive language-independent checks only.");

    Ok(EXIT_SUCCESS)
}
