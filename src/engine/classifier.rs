//! Keyword-based emotion classification
//!
//! Pure ordered substring containment against the flow keyword tables: no
//! scoring, no stemming. Breakup is tested first because its phrases ("me
//! dejó", "terminamos") overlap with generic sadness vocabulary and must
//! not be shadowed by it.

use crate::conversation::EmotionCategory;
use crate::flows;

/// Categories tested after breakup, in fixed priority order.
const SECONDARY_PRIORITY: [EmotionCategory; 4] = [
    EmotionCategory::Frustration,
    EmotionCategory::Anxiety,
    EmotionCategory::Tiredness,
    EmotionCategory::Sadness,
];

pub fn classify(text: &str) -> Option<EmotionCategory> {
    let lower = text.to_lowercase();
    if lower.trim().is_empty() {
        return None;
    }

    if matches_any(&lower, flows::flow(EmotionCategory::Breakup).keywords) {
        return Some(EmotionCategory::Breakup);
    }

    SECONDARY_PRIORITY
        .into_iter()
        .find(|&category| matches_any(&lower, flows::flow(category).keywords))
}

/// True when the input reports that a suggested technique is failing.
/// Checked independently of classification; the orchestrator only consults
/// it while the active context emotion is anxiety.
pub fn detect_not_working(text: &str) -> bool {
    let lower = text.to_lowercase();
    matches_any(&lower, flows::NOT_WORKING_KEYWORDS)
}

fn matches_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakup_wins_over_sadness() {
        assert_eq!(
            classify("me dejó y estoy muy triste"),
            Some(EmotionCategory::Breakup)
        );
    }

    #[test]
    fn breakup_wins_regardless_of_keyword_order() {
        assert_eq!(
            classify("estoy muy triste porque terminamos"),
            Some(EmotionCategory::Breakup)
        );
    }

    #[test]
    fn frustration_wins_over_sadness() {
        // "me fue mal" carries both a frustration keyword and the sadness
        // keyword "mal"; frustration sits earlier in the priority order.
        assert_eq!(
            classify("me fue mal en el examen"),
            Some(EmotionCategory::Frustration)
        );
    }

    #[test]
    fn classifies_each_category() {
        assert_eq!(
            classify("me siento ansioso por el examen"),
            Some(EmotionCategory::Anxiety)
        );
        assert_eq!(classify("estoy muy triste"), Some(EmotionCategory::Sadness));
        assert_eq!(
            classify("estoy agotado de estudiar"),
            Some(EmotionCategory::Tiredness)
        );
        assert_eq!(
            classify("estoy frustrada con la nota"),
            Some(EmotionCategory::Frustration)
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("ESTOY MUY TRISTE"), Some(EmotionCategory::Sadness));
    }

    #[test]
    fn unmatched_input_yields_none() {
        assert_eq!(classify("hola, ¿cómo estás?"), None);
    }

    #[test]
    fn empty_and_whitespace_input_yield_none() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   \n\t"), None);
    }

    #[test]
    fn detects_not_working_phrases() {
        assert!(detect_not_working("no funciona nada"));
        assert!(detect_not_working("sigo igual que antes"));
        assert!(detect_not_working("ME SIENTO PEOR"));
        assert!(!detect_not_working("me sirvió mucho, gracias"));
    }
}
