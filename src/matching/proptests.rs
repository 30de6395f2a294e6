//! Property-based tests for keyword scoring and best-match selection

use super::*;
use crate::knowledge::{FaqEntry, KnowledgeBase};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_keyword() -> impl Strategy<Value = String> {
    "[a-z]{1,8}( [a-z]{1,8})?"
}

fn arb_keywords() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_keyword(), 1..6)
}

fn arb_input() -> impl Strategy<Value = String> {
    "[a-zA-Z ?!]{0,40}"
}

fn arb_entries() -> impl Strategy<Value = Vec<FaqEntry>> {
    proptest::collection::vec(
        (arb_keywords(), "[A-Z][a-z]{2,10}", "[a-z ]{1,20}")
            .prop_map(|(keywords, question, answer)| FaqEntry::new(keywords, question, answer)),
        1..8,
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn contained_keyword_contributes_exactly_phrase_score(
        prefix in "[a-z ]{0,10}",
        keyword in arb_keyword(),
        suffix in "[a-z ]{0,10}",
    ) {
        let input = format!("{prefix} {keyword} {suffix}");
        prop_assert_eq!(score(&input, &[keyword]), PHRASE_SCORE);
    }

    #[test]
    fn score_is_additive_over_keywords(input in arb_input(), keywords in arb_keywords()) {
        let total = score(&input, &keywords);
        let parts: u32 = keywords
            .iter()
            .map(|k| score(&input, std::slice::from_ref(k)))
            .sum();
        prop_assert_eq!(total, parts);
    }

    #[test]
    fn score_ignores_case_and_spacing(input in arb_input(), keywords in arb_keywords()) {
        let shouted = format!("  {}  ", input.to_uppercase().replace(' ', "   "));
        prop_assert_eq!(score(&input, &keywords), score(&shouted, &keywords));
    }

    #[test]
    fn blank_input_never_matches(blank in "[ \t\n]{0,6}", entries in arb_entries()) {
        prop_assert!(find_best_match(&blank, &entries).is_none());
        for entry in &entries {
            prop_assert_eq!(score(&blank, entry.keywords()), 0);
        }
    }

    #[test]
    fn best_match_is_deterministic(input in arb_input(), entries in arb_entries()) {
        let run = || {
            find_best_match(&input, &entries).map(|m| (m.entry.question().to_string(), m.score))
        };
        prop_assert_eq!(run(), run());
    }

    #[test]
    fn best_match_is_first_maximum_above_threshold(input in arb_input(), entries in arb_entries()) {
        let scores: Vec<u32> = entries.iter().map(|e| score(&input, e.keywords())).collect();
        let max = scores.iter().copied().max().unwrap_or(0);

        match find_best_match(&input, &entries) {
            Some(m) => {
                prop_assert!(m.score >= MIN_MATCH_SCORE);
                prop_assert_eq!(m.score, max);
                let first_idx = scores.iter().position(|s| *s == max).unwrap();
                prop_assert!(std::ptr::eq(m.entry, &entries[first_idx]));
            }
            None => prop_assert!(max < MIN_MATCH_SCORE),
        }
    }

    #[test]
    fn builtin_catalog_results_are_catalog_entries(input in arb_input()) {
        let kb = KnowledgeBase::builtin().unwrap();
        if let Some(m) = find_best_match(&input, kb.entries()) {
            prop_assert!(kb.by_question(m.entry.question()).is_some());
        }
    }
}
