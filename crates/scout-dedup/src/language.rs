//! Language detectors

use scout_domain::LanguageDetector;

/// Detector backed by `whatlang` trigram models
#[derive(Debug, Clone)]
pub struct WhatlangDetector {
    require_reliable: bool,
}

impl WhatlangDetector {
    /// Create a detector; with `require_reliable` set, unreliable guesses
    /// report no language
    pub fn new(require_reliable: bool) -> Self {
        Self { require_reliable }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let info = whatlang::detect(text)?;
        if self.require_reliable && !info.is_reliable() {
            return None;
        }
        Some(info.lang().code().to_string())
    }
}

/// Detector that never reports a language, so every item passes
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl LanguageDetector for AcceptAll {
    fn detect(&self, _text: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_english() {
        let detector = WhatlangDetector::new(false);
        let text = "The government announced a new public health policy today to tackle \
                    rising childhood obesity across the country, with funding for schools.";
        assert_eq!(detector.detect(text).as_deref(), Some("eng"));
    }

    #[test]
    fn test_detects_french() {
        let detector = WhatlangDetector::new(false);
        let text = "Le gouvernement a annoncé aujourd'hui une nouvelle politique de santé \
                    publique pour lutter contre l'obésité chez les enfants dans les écoles.";
        assert_eq!(detector.detect(text).as_deref(), Some("fra"));
    }

    #[test]
    fn test_empty_text_undetected() {
        assert_eq!(WhatlangDetector::default().detect(""), None);
    }

    #[test]
    fn test_accept_all() {
        assert_eq!(AcceptAll.detect("anything at all"), None);
    }
}
