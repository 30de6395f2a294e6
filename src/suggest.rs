//! Random follow-up suggestions for unmatched input

use crate::knowledge::{FaqEntry, KnowledgeBase};
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly random permutation of the catalog.
///
/// Shuffles a vector of references (Fisher–Yates via `SliceRandom`), so the
/// catalog's own order is untouched.
pub fn shuffled<'a, R: Rng + ?Sized>(
    knowledge: &'a KnowledgeBase,
    rng: &mut R,
) -> Vec<&'a FaqEntry> {
    let mut view: Vec<&FaqEntry> = knowledge.entries().iter().collect();
    view.shuffle(rng);
    view
}

/// Questions of `count` distinct entries drawn without replacement.
///
/// Returns fewer than `count` only when the catalog is smaller.
pub fn random_suggestions<R: Rng + ?Sized>(
    knowledge: &KnowledgeBase,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    shuffled(knowledge, rng)
        .into_iter()
        .take(count)
        .map(|entry| entry.question().to_string())
        .collect()
}
