//! LLM-backed archetype judge

use crate::parser::parse_judgement;
use crate::prompt::build_prompt;
use crate::JudgeError;
use scout_domain::traits::{ArchetypeJudge, JudgeRequest, Judgement, LlmProvider};
use tracing::debug;

/// Judge that asks an LLM provider to classify the item
///
/// The provider sees the prompt from [`build_prompt`] and must answer with a
/// JSON object. Parsing rules are in [`parse_judgement`].
pub struct PromptJudge<P> {
    provider: P,
}

impl<P> PromptJudge<P>
where
    P: LlmProvider,
    P::Error: std::fmt::Display,
{
    /// Create a judge over the given provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Borrow the wrapped provider
    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> ArchetypeJudge for PromptJudge<P>
where
    P: LlmProvider,
    P::Error: std::fmt::Display,
{
    type Error = JudgeError;

    fn judge(&self, request: &JudgeRequest) -> Result<Judgement, Self::Error> {
        let prompt = build_prompt(request);
        debug!("Judge prompt length: {} chars", prompt.len());

        let response = self
            .provider
            .generate(&prompt)
            .map_err(|e| JudgeError::Provider(e.to_string()))?;

        parse_judgement(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockProvider;
    use scout_domain::Archetype;

    fn request() -> JudgeRequest {
        JudgeRequest {
            title: "Artists occupy the shuttered library".to_string(),
            summary: "A collective reopens it as a repair café.".to_string(),
            source: "Local Paper".to_string(),
        }
    }

    #[test]
    fn test_prompt_judge_label() {
        let provider = MockProvider::new(r#"{"label":"outlier","confidence":0.9,"rationale":"artists"}"#);
        let judge = PromptJudge::new(provider);

        let judgement = judge.judge(&request()).unwrap();
        assert_eq!(judgement, Judgement::Label { archetype: Archetype::Outlier, confidence: 0.9 });
        assert_eq!(judge.provider().call_count(), 1);
    }

    #[test]
    fn test_prompt_judge_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error(build_prompt(&request()));
        let judge = PromptJudge::new(provider);

        assert!(matches!(judge.judge(&request()), Err(JudgeError::Provider(_))));
    }

    #[test]
    fn test_prompt_judge_garbage_response() {
        let judge = PromptJudge::new(MockProvider::new("I think it's an outlier"));
        assert!(matches!(judge.judge(&request()), Err(JudgeError::InvalidResponse(_))));
    }

    #[test]
    fn test_default_mock_provider_abstains() {
        let judge = PromptJudge::new(MockProvider::default());
        assert_eq!(judge.judge(&request()).unwrap(), Judgement::Abstain);
    }
}
