//! Display fields derived for renderers

use regex::Regex;
use scout_domain::{Brand, Focus};
use std::sync::LazyLock;

const MAX_WORDS: usize = 28;
const MEDIA_TITLE_MAX_CHARS: usize = 90;

const SOCIAL_TERMS: &[&str] = &[
    "inequality",
    "poverty",
    "community",
    "education",
    "policy",
    "family",
    "workers",
    "marginalised",
    "council",
];

const TECH_TERMS: &[&str] = &[
    "ai",
    "algorithm",
    "sensor",
    "platform",
    "app",
    "device",
    "robot",
    "trial",
    "patent",
    "standard",
    "protocol",
];

const MEDIA_HOOKS: &[&str] = &["first", "record", "breakthrough", "ban", "trial", "opens"];

static ACTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(ban|tax|trial|launch|approve|publish|release|recall|invest|fund|regulate|mandate|restrict|lift|pilot)")
        .expect("valid action pattern")
});
static STUDY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(randomi[sz]ed|cohort|meta-analys|systematic review|case-control|RCT|trial|preprint|observational)")
        .expect("valid study pattern")
});
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\b\d{1,3}(?:,\d{3})*(?:\.\d+)?%?|\b\d+\s?(?:million|billion|bn|m|k)\b)")
        .expect("valid number pattern")
});
static PLACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(UK|United Kingdom|England|Scotland|Wales|NI|EU|US|Europe)\b")
        .expect("valid place pattern")
});
static WHEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(today|this week|this month|in \d{4}|Q[1-4] \d{4}|last week|yesterday)")
        .expect("valid time pattern")
});

/// Text up to the first whitespace that follows `.`, `!` or `?`
fn first_sentence(text: &str) -> &str {
    let mut previous = None;
    for (idx, c) in text.char_indices() {
        if c.is_whitespace() && matches!(previous, Some('.' | '!' | '?')) {
            return &text[..idx];
        }
        previous = Some(c);
    }
    text
}

/// Cut to the word limit, marking the cut with an ellipsis
fn limit_words(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > MAX_WORDS {
        format!("{}...", words[..MAX_WORDS].join(" ").trim_end_matches(','))
    } else {
        text.to_string()
    }
}

/// First ten characters of the raw date
pub fn display_date(date: &str) -> String {
    date.chars().take(10).collect()
}

/// One-sentence signal line
pub fn sentence_signal(title: &str, summary: &str) -> String {
    let text = format!("{}. {}", title.trim().trim_end_matches('.'), summary.trim());
    limit_words(first_sentence(&text))
}

/// Title followed by the salient action, study, number, place and time
/// found in the summary
pub fn brief_summary(title: &str, summary: &str) -> String {
    let title = title.trim().trim_end_matches('.');
    let bits: Vec<&str> = [&*ACTION, &*STUDY, &*NUMBER, &*PLACE, &*WHEN]
        .iter()
        .filter_map(|re| re.find(summary).map(|m| m.as_str()))
        .collect();

    let mut sentence = format!("{title}. {}.", bits.join(" ").trim()).replace("..", ".");
    if bits.is_empty() || sentence.split_whitespace().count() <= 2 {
        sentence = format!("{title}. {}", first_sentence(summary.trim()));
    }
    limit_words(&sentence)
}

/// Note on who may be left out
pub fn equity_lens(summary: &str) -> &'static str {
    let lowered = summary.to_lowercase();
    let has = |terms: &[&str]| terms.iter().any(|t| lowered.contains(t));

    if has(&["glp-1", "semaglutide", "prescription", "drug"]) {
        "Access & affordability gaps could widen for low-income groups."
    } else if lowered.contains("sleep") {
        "Shift workers and caregivers may benefit least without tailored supports."
    } else if has(&["tax", "ban", "pricing"]) {
        "Policy effects may be regressive unless paired with subsidies."
    } else {
        "Consider differential impacts on low-income, rural and minority communities."
    }
}

/// Social/tech focus and channel fit
pub fn focus_brand(title: &str, summary: &str) -> (Focus, Brand) {
    let text = format!("{title}. {summary}").to_lowercase();
    let has = |terms: &[&str]| terms.iter().any(|t| text.contains(t));

    let social = has(SOCIAL_TERMS);
    let tech = has(TECH_TERMS);
    let focus = match (social, tech) {
        (true, true) => Focus::Both,
        (false, true) => Focus::Tech,
        _ => Focus::Social,
    };

    let media = title.chars().count() <= MEDIA_TITLE_MAX_CHARS && has(MEDIA_HOOKS);
    let brand = if media && has(&["ecosystem", "investment"]) {
        Brand::Both
    } else if media {
        Brand::Media
    } else {
        Brand::Ph
    };

    (focus, brand)
}
