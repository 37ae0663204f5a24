//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's local LLM API so the archetype judge
//! can run against a local model.
//!
//! # Features
//!
//! - Async HTTP communication with Ollama API
//! - Configurable endpoint and model
//! - Retry logic with exponential backoff
//! - Per-request and per-call timeouts
//!
//! # Examples
//!
//! ```no_run
//! use scout_judge::{OllamaProvider, PromptJudge};
//!
//! let provider = OllamaProvider::new("http://localhost:11434", "llama3.1")?;
//! let judge = PromptJudge::new(provider);
//! # Ok::<(), scout_judge::JudgeError>(())
//! ```

use crate::JudgeError;
use scout_domain::traits::LlmProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for a single HTTP request (10 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default budget for one judge call including retries (30 seconds)
pub const DEFAULT_CALL_TIMEOUT_SECS: u64 = 30;

/// Default number of attempts
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Tokens the model may generate for one answer
const MAX_ANSWER_TOKENS: u32 = 120;

/// Ollama API provider for local LLM inference
///
/// The blocking [`LlmProvider`] implementation drives a current-thread
/// runtime owned by the provider, so it must not be called from inside
/// another tokio runtime.
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    max_retries: u32,
    call_timeout: Duration,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    format: &'a str,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "llama3.1", "mistral")
    ///
    /// # Errors
    ///
    /// Returns [`JudgeError::Setup`] if the HTTP client or the runtime cannot
    /// be built.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, JudgeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| JudgeError::Setup(format!("HTTP client: {}", e)))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| JudgeError::Setup(format!("Runtime: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
            runtime,
            max_retries: DEFAULT_MAX_RETRIES,
            call_timeout: Duration::from_secs(DEFAULT_CALL_TIMEOUT_SECS),
        })
    }

    /// Create a new Ollama provider on the default endpoint
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, JudgeError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Set the total time budget for one call, retries included
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text using Ollama API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running
    /// - Model is not available
    /// - Network communication fails
    /// - Response format is invalid
    pub async fn generate_async(&self, prompt: &str) -> Result<String, JudgeError> {
        let url = format!("{}/api/generate", self.endpoint);

        let request_body = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            format: "json",
            options: OllamaOptions {
                temperature: 0.0,
                num_predict: MAX_ANSWER_TOKENS,
            },
        };

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response
                            .json::<OllamaGenerateResponse>()
                            .await
                            .map(|r| r.response)
                            .map_err(|e| {
                                JudgeError::InvalidResponse(format!("Failed to parse response: {}", e))
                            });
                    }
                    if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(JudgeError::ModelNotAvailable(self.model.clone()));
                    }
                    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(JudgeError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(JudgeError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(JudgeError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                debug!("Ollama attempt {} failed, retrying in {:?}", attempts, delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| JudgeError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProvider for OllamaProvider {
    type Error = JudgeError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        let call_timeout = self.call_timeout;
        self.runtime
            .block_on(async { tokio::time::timeout(call_timeout, self.generate_async(prompt)).await })
            .unwrap_or_else(|_| {
                warn!("Ollama call exceeded {:?}", call_timeout);
                Err(JudgeError::Timeout(call_timeout))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_provider_creation() {
        let provider = OllamaProvider::new("http://localhost:11434/", "llama3.1").unwrap();
        assert_eq!(provider.endpoint, "http://localhost:11434");
        assert_eq!(provider.model(), "llama3.1");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_ollama_provider_default_endpoint() {
        let provider = OllamaProvider::default_endpoint("mistral").unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_ollama_provider_builders() {
        let provider = OllamaProvider::default_endpoint("mistral")
            .unwrap()
            .with_max_retries(0)
            .with_call_timeout(Duration::from_secs(5));
        assert_eq!(provider.max_retries, 1);
        assert_eq!(provider.call_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_blocking_generate_reports_communication_error() {
        // Port 9 (discard) is closed on test machines
        let provider = OllamaProvider::new("http://127.0.0.1:9", "llama3.1")
            .unwrap()
            .with_max_retries(1);

        match provider.generate("test") {
            Err(JudgeError::Communication(_)) | Err(JudgeError::Timeout(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }

    // Integration tests (requires running Ollama)
    #[test]
    #[ignore]
    fn test_ollama_generate_integration() {
        let provider = OllamaProvider::default_endpoint("llama3.1").unwrap();
        if let Ok(response) = provider.generate("Reply with {\"ok\": true}") {
            assert!(!response.is_empty());
        }
    }
}
