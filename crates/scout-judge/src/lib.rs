//! Signal Scout Judge Layer
//!
//! Pluggable fallback judges for archetype classification.
//!
//! # Architecture
//!
//! The rule table in `scout-classifier` is always available. When its
//! confidence is low the classifier asks an [`ArchetypeJudge`] for a second
//! opinion. This crate provides the judges and the LLM plumbing behind them.
//!
//! # Judges
//!
//! - [`AbstainingJudge`]: always abstains (default, no external dependency)
//! - [`MockJudge`]: scripted answers for testing
//! - [`PromptJudge`]: asks any [`LlmProvider`] with a classification prompt
//!
//! # Providers
//!
//! - [`MockProvider`]: deterministic mock for testing
//! - [`OllamaProvider`]: local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use scout_domain::traits::{ArchetypeJudge, JudgeRequest, Judgement};
//! use scout_domain::Archetype;
//! use scout_judge::{MockProvider, PromptJudge};
//!
//! let provider = MockProvider::new(r#"{"label": "canary", "confidence": 0.9, "rationale": "recall"}"#);
//! let judge = PromptJudge::new(provider);
//!
//! let request = JudgeRequest {
//!     title: "Regulator issues recall".into(),
//!     summary: String::new(),
//!     source: "Trade Weekly".into(),
//! };
//! let judgement = judge.judge(&request).unwrap();
//! assert_eq!(judgement, Judgement::Label { archetype: Archetype::Canary, confidence: 0.9 });
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod judge;
pub mod ollama;
pub mod parser;
pub mod prompt;

use parking_lot::Mutex;
use scout_domain::traits::{ArchetypeJudge, JudgeRequest, Judgement, LlmProvider};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub use cache::JudgeCache;
pub use judge::PromptJudge;
pub use ollama::OllamaProvider;

/// Errors that can occur while consulting a judge
#[derive(Error, Debug)]
pub enum JudgeError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the provider
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// The call did not finish in time
    #[error("Judge call timed out after {0:?}")]
    Timeout(Duration),

    /// The provider could not be set up
    #[error("Setup error: {0}")]
    Setup(String),

    /// Error reported by a wrapped provider
    #[error("Provider error: {0}")]
    Provider(String),
}

/// Judge that never answers
///
/// The default judge: classification runs on the rule table alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbstainingJudge;

impl ArchetypeJudge for AbstainingJudge {
    type Error = JudgeError;

    fn judge(&self, _request: &JudgeRequest) -> Result<Judgement, Self::Error> {
        Ok(Judgement::Abstain)
    }
}

/// Scripted judge for deterministic testing
///
/// Answers are keyed by item title. Titles without a scripted answer get the
/// default judgement.
///
/// # Examples
///
/// ```
/// use scout_domain::traits::{ArchetypeJudge, JudgeRequest, Judgement};
/// use scout_domain::Archetype;
/// use scout_judge::MockJudge;
///
/// let mut judge = MockJudge::new(Judgement::Abstain);
/// judge.add_answer("Odd one", Judgement::Label { archetype: Archetype::Outlier, confidence: 0.8 });
///
/// let request = JudgeRequest { title: "Odd one".into(), summary: String::new(), source: String::new() };
/// assert!(matches!(judge.judge(&request).unwrap(), Judgement::Label { .. }));
/// assert_eq!(judge.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockJudge {
    default_judgement: Judgement,
    answers: Arc<Mutex<HashMap<String, Option<Judgement>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockJudge {
    /// Create a judge giving the same judgement for every title
    pub fn new(default_judgement: Judgement) -> Self {
        Self {
            default_judgement,
            answers: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Script the judgement for a given title
    pub fn add_answer(&mut self, title: impl Into<String>, judgement: Judgement) {
        self.answers.lock().insert(title.into(), Some(judgement));
    }

    /// Script a failure for a given title
    pub fn add_error(&mut self, title: impl Into<String>) {
        self.answers.lock().insert(title.into(), None);
    }

    /// Get the number of times the judge was consulted
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }
}

impl Default for MockJudge {
    fn default() -> Self {
        Self::new(Judgement::Abstain)
    }
}

impl ArchetypeJudge for MockJudge {
    type Error = JudgeError;

    fn judge(&self, request: &JudgeRequest) -> Result<Judgement, Self::Error> {
        *self.call_count.lock() += 1;

        match self.answers.lock().get(&request.title) {
            Some(Some(judgement)) => Ok(*judgement),
            Some(None) => Err(JudgeError::Communication("Mock error".to_string())),
            None => Ok(self.default_judgement),
        }
    }
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, Option<String>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses.lock().insert(prompt.into(), Some(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses.lock().insert(prompt.into(), None);
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(r#"{"label":"abstain","confidence":0.0,"rationale":""}"#)
    }
}

impl LlmProvider for MockProvider {
    type Error = JudgeError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock() += 1;

        match self.responses.lock().get(prompt) {
            Some(Some(response)) => Ok(response.clone()),
            Some(None) => Err(JudgeError::Provider("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::Archetype;

    fn request(title: &str) -> JudgeRequest {
        JudgeRequest {
            title: title.to_string(),
            summary: "summary".to_string(),
            source: "source".to_string(),
        }
    }

    #[test]
    fn test_abstaining_judge() {
        let judge = AbstainingJudge;
        assert_eq!(judge.judge(&request("anything")).unwrap(), Judgement::Abstain);
    }

    #[test]
    fn test_mock_judge_scripted_answers() {
        let mut judge = MockJudge::default();
        judge.add_answer(
            "big plan",
            Judgement::Label { archetype: Archetype::BigIdea, confidence: 0.75 },
        );
        judge.add_error("broken");

        assert_eq!(
            judge.judge(&request("big plan")).unwrap(),
            Judgement::Label { archetype: Archetype::BigIdea, confidence: 0.75 }
        );
        assert_eq!(judge.judge(&request("other")).unwrap(), Judgement::Abstain);
        assert!(matches!(
            judge.judge(&request("broken")),
            Err(JudgeError::Communication(_))
        ));
        assert_eq!(judge.call_count(), 3);
    }

    #[test]
    fn test_mock_judge_clone_shares_count() {
        let judge1 = MockJudge::default();
        let judge2 = judge1.clone();

        judge1.judge(&request("a")).unwrap();
        assert_eq!(judge2.call_count(), 1);
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::new("default");
        provider.add_response("hello", "world");
        provider.add_error("bad prompt");

        assert_eq!(provider.generate("hello").unwrap(), "world");
        assert_eq!(provider.generate("unknown").unwrap(), "default");
        assert!(matches!(provider.generate("bad prompt"), Err(JudgeError::Provider(_))));
        assert_eq!(provider.call_count(), 3);
    }
}
