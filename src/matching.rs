//! Keyword matching of free text against the FAQ catalog
//!
//! Scoring per keyword:
//! 1. Normalized input contains the normalized keyword: +10, and the
//!    keyword is not scored at word level.
//! 2. Otherwise, for every whitespace token of the input: +5 when the token
//!    equals the keyword, else +2 when either contains the other.
//!
//! The best entry is the first one to reach the highest total; it is only
//! returned when that total reaches [`MIN_MATCH_SCORE`].

#[cfg(test)]
mod proptests;

use crate::knowledge::FaqEntry;

/// Score contributed by an exact-phrase (substring) hit
pub const PHRASE_SCORE: u32 = 10;
/// Score contributed by a token equal to the keyword
pub const TOKEN_SCORE: u32 = 5;
/// Score contributed by a token that contains, or is contained in, the keyword
pub const PARTIAL_SCORE: u32 = 2;
/// Minimum total required to accept a match
pub const MIN_MATCH_SCORE: u32 = 5;

/// Best entry together with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub entry: &'a FaqEntry,
    pub score: u32,
}

/// Lowercase, trim and collapse whitespace runs to a single space
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score one keyword against an already-normalized input
fn keyword_score(normalized_input: &str, keyword: &str) -> u32 {
    let keyword = normalize(keyword);
    if keyword.is_empty() {
        return 0;
    }

    if normalized_input.contains(keyword.as_str()) {
        return PHRASE_SCORE;
    }

    normalized_input
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(|token| {
            if token == keyword {
                TOKEN_SCORE
            } else if token.contains(keyword.as_str()) || keyword.contains(token) {
                PARTIAL_SCORE
            } else {
                0
            }
        })
        .sum()
}

/// Total score of `input` against a keyword list
pub fn score(input: &str, keywords: &[String]) -> u32 {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return 0;
    }
    keywords
        .iter()
        .map(|keyword| keyword_score(&normalized, keyword))
        .sum()
}

/// Find the best scoring entry, if any reaches the threshold.
///
/// Full scan in catalog order. Equal scores never displace an earlier
/// entry.
pub fn find_best_match<'a>(input: &str, entries: &'a [FaqEntry]) -> Option<Match<'a>> {
    let mut best: Option<Match<'a>> = None;
    for entry in entries {
        let total = score(input, entry.keywords());
        if total > best.map_or(0, |m| m.score) {
            best = Some(Match { entry, score: total });
        }
    }

    best.filter(|m| m.score >= MIN_MATCH_SCORE)
}
