//! # Explanation Rendering
//!
//! Turns each fired rule's raw rationale into one final user-facing
//! sentence. The external rephrasing call is an enhancement step only:
//! whether it succeeds, degrades the content, or fails outright, the
//! rendered text always carries the savings range and confidence figure in
//! LKR and nothing else.

pub mod errors;
pub mod rephrase;
pub mod sanitize;

pub use errors::{RephraseError, RephraseResult};
pub use rephrase::{
    DisabledRephraser, HttpRephraser, MockRephraser, RephraseConfig, Rephraser,
};
pub use sanitize::sanitize;

/// One rendered explanation plus which path produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedExplanation {
    pub text: String,
    /// True when the external call failed or returned nothing and the
    /// deterministic fallback was used instead.
    pub fallback: bool,
}

/// Renders explanations for fired rules. The only component that performs
/// externally-dependent work; everything upstream is pure.
pub struct ExplanationRenderer {
    rephraser: Box<dyn Rephraser>,
}

impl ExplanationRenderer {
    pub fn new(rephraser: Box<dyn Rephraser>) -> Self {
        Self { rephraser }
    }

    /// Render one explanation. Never fails: external-service errors are
    /// absorbed here, isolated to this one rule.
    pub fn render(&self, raw: &str, savings: &str, confidence: u8) -> RenderedExplanation {
        let prompt = build_prompt(raw, savings, confidence);

        let (mut text, fallback) = match self.rephraser.rephrase(&prompt) {
            Ok(content) if !content.trim().is_empty() => (sanitize(&content), false),
            _ => (
                format!(
                    "{} (Savings: ~LKR {}/month, Confidence: {}%)",
                    raw, savings, confidence
                ),
                true,
            ),
        };

        // Containment guarantees hold on both paths.
        if !text.contains(savings) {
            text.push_str(&format!(" (Savings: ~LKR {}/month)", savings));
        }
        let confidence_token = format!("{}%", confidence);
        if !text.contains(&confidence_token) {
            text.push_str(&format!(" (Confidence: {}%)", confidence));
        }

        RenderedExplanation { text, fallback }
    }
}

/// The rephrasing prompt: explicit unit instruction plus the exact figures
/// the output must carry.
fn build_prompt(raw: &str, savings: &str, confidence: u8) -> String {
    format!(
        "Rephrase the following into 1-2 natural sentences. \
         Use **LKR** only (never 'dollars', 'units', or 'kWh'). \
         Include exact savings: ~LKR {}/month and confidence: {}%.\nInput: {}",
        savings, confidence, raw
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer_with(mock: MockRephraser) -> ExplanationRenderer {
        ExplanationRenderer::new(Box::new(mock))
    }

    #[test]
    fn test_enhanced_path_keeps_good_output() {
        let mock = MockRephraser::new();
        mock.push_response("Switching saves you ~LKR 150-250/month at 90% confidence.");
        let rendered = renderer_with(mock).render("raw text", "150-250", 90);
        assert!(!rendered.fallback);
        assert_eq!(
            rendered.text,
            "Switching saves you ~LKR 150-250/month at 90% confidence."
        );
    }

    #[test]
    fn test_missing_figures_are_appended() {
        let mock = MockRephraser::new();
        mock.push_response("Switching to LEDs is a great idea.");
        let rendered = renderer_with(mock).render("raw text", "150-250", 90);
        assert!(rendered.text.contains("150-250"));
        assert!(rendered.text.contains("90%"));
        assert!(rendered.text.ends_with("(Confidence: 90%)"));
    }

    #[test]
    fn test_hallucinated_units_are_sanitized() {
        let mock = MockRephraser::new();
        mock.push_response("Save 150-250 dollars, roughly 12 kWh, monthly. Confidence 90%.");
        let rendered = renderer_with(mock).render("raw text", "150-250", 90);
        assert!(!rendered.text.contains("dollar"));
        assert!(!rendered.text.contains("kWh"));
    }

    #[test]
    fn test_failure_takes_fallback() {
        let mock = MockRephraser::new();
        mock.push_failure();
        let rendered = renderer_with(mock).render("Incandescent bulbs waste energy.", "150-250", 90);
        assert!(rendered.fallback);
        assert_eq!(
            rendered.text,
            "Incandescent bulbs waste energy. (Savings: ~LKR 150-250/month, Confidence: 90%)"
        );
    }

    #[test]
    fn test_blank_response_treated_as_failure() {
        let mock = MockRephraser::new();
        mock.push_response("   \n  ");
        let rendered = renderer_with(mock).render("raw", "100-200", 75);
        assert!(rendered.fallback);
    }

    #[test]
    fn test_prompt_carries_figures_and_unit_instruction() {
        let prompt = build_prompt("raw", "100-200", 75);
        assert!(prompt.contains("~LKR 100-200/month"));
        assert!(prompt.contains("75%"));
        assert!(prompt.contains("never 'dollars'"));
        assert!(prompt.ends_with("Input: raw"));
    }
}
