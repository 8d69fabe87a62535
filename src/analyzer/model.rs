//! Model-backed analysis through an external classifier.
//!
//! The classifier is a collaborator: this crate only knows how to send it a
//! snippet and decode the report it returns.

use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::ModelConfig;
use crate::detect::AnalysisReport;

use super::{AnalyzerError, CodeAnalyzer, ModelInfo};

/// Something that turns a snippet into an analysis report.
pub trait Classifier: Send + Sync {
    fn classify(&self, code: &str, language: &str) -> Result<AnalysisReport, AnalyzerError>;

    /// Short identifier for logs and metadata.
    fn name(&self) -> &str;

    /// Extra metadata reported by `ModelAnalyzer::model_info`.
    fn details(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }
}

/// Normalize a snippet before handing it to a model.
pub fn preprocess_code(code: &str) -> String {
    format!("<code>{}</code>", code.trim())
}

/// Request body sent to a remote classifier.
#[derive(Serialize)]
struct ClassifyRequest<'a> {
    code: &'a str,
    language: &'a str,
}

/// Classifier reached over HTTP.
///
/// POSTs `{code, language}` as JSON and expects an `AnalysisReport` body.
pub struct RemoteClassifier {
    http: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    config: ModelConfig,
}

impl RemoteClassifier {
    pub fn new(config: ModelConfig) -> Result<Self, AnalyzerError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("codecritic/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AnalyzerError::Config(format!("failed to create HTTP client: {}", e)))?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        Ok(Self {
            http,
            runtime,
            config,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    async fn request(&self, code: &str, language: &str) -> Result<AnalysisReport, AnalyzerError> {
        let processed = preprocess_code(code);
        let body = ClassifyRequest {
            code: &processed,
            language,
        };

        let response = self
            .http
            .post(&self.config.endpoint)
            .timeout(Duration::from_millis(self.config.timeout_ms))
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyzerError::Model(format!(
                "{} returned HTTP {}",
                self.config.endpoint,
                status.as_u16()
            )));
        }

        response
            .json::<AnalysisReport>()
            .await
            .map_err(|e| AnalyzerError::Model(format!("invalid report: {}", e)))
    }
}

fn map_transport_error(e: reqwest::Error) -> AnalyzerError {
    if e.is_timeout() {
        AnalyzerError::Timeout
    } else {
        AnalyzerError::Model(e.to_string())
    }
}

impl Classifier for RemoteClassifier {
    fn classify(&self, code: &str, language: &str) -> Result<AnalysisReport, AnalyzerError> {
        tracing::debug!(endpoint = %self.config.endpoint, language, "querying remote classifier");
        self.runtime.block_on(self.request(code, language))
    }

    fn name(&self) -> &str {
        &self.config.model_name
    }

    fn details(&self) -> BTreeMap<String, String> {
        let mut details = BTreeMap::new();
        details.insert("endpoint".to_string(), self.config.endpoint.clone());
        details.insert("timeout_ms".to_string(), self.config.timeout_ms.to_string());
        details
    }
}

/// Analyzer that delegates entirely to a classifier.
pub struct ModelAnalyzer {
    classifier: Box<dyn Classifier>,
}

impl ModelAnalyzer {
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Build an analyzer around a `RemoteClassifier`.
    pub fn remote(config: ModelConfig) -> Result<Self, AnalyzerError> {
        Ok(Self::new(Box::new(RemoteClassifier::new(config)?)))
    }
}

impl CodeAnalyzer for ModelAnalyzer {
    fn analyze(&self, code: &str, language: &str) -> Result<AnalysisReport, AnalyzerError> {
        self.classifier.classify(code, language)
    }

    fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_name: self.classifier.name().to_string(),
            model_type: "model".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            details: self.classifier.details(),
        }
    }
}
