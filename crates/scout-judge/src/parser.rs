//! Parse model output into a judgement

use crate::JudgeError;
use scout_domain::traits::Judgement;
use scout_domain::Archetype;
use serde_json::Value;
use tracing::debug;

/// Parse a model response into a judgement
///
/// The response should be a JSON object with `label` and `confidence`.
/// Markdown code fences and leading chatter are tolerated: when the whole
/// response is not JSON, the last line that is a JSON object is used. An
/// unknown label or `"abstain"` becomes [`Judgement::Abstain`]. Confidence is
/// clamped to [0, 1].
pub fn parse_judgement(response: &str) -> Result<Judgement, JudgeError> {
    let body = strip_code_fence(response);

    let json = serde_json::from_str::<Value>(body.trim())
        .ok()
        .filter(Value::is_object)
        .or_else(|| last_json_line(body))
        .ok_or_else(|| {
            JudgeError::InvalidResponse(format!("No JSON object in response: {:.80}", response))
        })?;

    let label = json.get("label").and_then(Value::as_str).unwrap_or_default();
    let Some(archetype) = Archetype::parse(label) else {
        debug!("Judge returned non-archetype label '{}'", label);
        return Ok(Judgement::Abstain);
    };

    let confidence = json
        .get("confidence")
        .and_then(|v| v.as_f64().or_else(|| v.as_str().and_then(|s| s.trim().parse().ok())))
        .filter(|c: &f64| c.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    Ok(Judgement::Label { archetype, confidence })
}

/// Remove a surrounding markdown code block if present
fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }

    // Skip the opening fence line and the closing fence
    let after_open = trimmed.find('\n').map(|i| &trimmed[i + 1..]).unwrap_or("");
    after_open
        .trim_end()
        .strip_suffix("```")
        .unwrap_or(after_open)
}

/// Find the last line that parses as a JSON object
fn last_json_line(body: &str) -> Option<Value> {
    body.lines()
        .rev()
        .map(str::trim)
        .filter(|line| line.starts_with('{'))
        .find_map(|line| serde_json::from_str::<Value>(line).ok().filter(Value::is_object))
}
