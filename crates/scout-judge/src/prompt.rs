//! Prompt construction for the archetype judge

use scout_domain::traits::JudgeRequest;
use scout_domain::Archetype;

/// Maximum title characters sent to the model
pub const MAX_TITLE_CHARS: usize = 300;

/// Maximum summary characters sent to the model
pub const MAX_SUMMARY_CHARS: usize = 800;

/// Maximum source characters sent to the model
pub const MAX_SOURCE_CHARS: usize = 120;

/// Build the classification prompt for one item
pub fn build_prompt(request: &JudgeRequest) -> String {
    let labels = Archetype::ALL
        .iter()
        .map(|a| format!("\"{}\"", a.as_str()))
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "You are an analyst. Classify the archetype of this signal into exactly one of:\n\
         [{labels}].\n\
         Return ONLY JSON: {{\"label\": \"<label|abstain>\", \"confidence\": <0..1>, \"rationale\": \"<<=12 words>\"}}.\n\
         \n\
         Title: {title}\n\
         Summary: {summary}\n\
         Source: {source}\n\
         JSON:\n",
        labels = labels,
        title = truncate(&request.title, MAX_TITLE_CHARS),
        summary = truncate(&request.summary, MAX_SUMMARY_CHARS),
        source = truncate(&request.source, MAX_SOURCE_CHARS),
    )
}

/// Keep at most `max` characters, respecting char boundaries
fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
