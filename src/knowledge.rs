//! FAQ knowledge base
//!
//! A fixed, ordered catalog of entries built once at startup. Nothing
//! mutates it afterwards; matching and suggestion sampling only borrow it.

mod catalog;

use serde::Serialize;
use thiserror::Error;

/// Compile-time shape of a catalog entry
pub(crate) struct FaqSeed {
    pub keywords: &'static [&'static str],
    pub question: &'static str,
    pub answer: &'static str,
}

/// One FAQ record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    keywords: Vec<String>,
    question: String,
    answer: String,
}

impl FaqEntry {
    pub fn new(
        keywords: impl IntoIterator<Item = impl Into<String>>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Answer text; may contain `<br>` and `<strong>` markup
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Rejected catalog contents
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KnowledgeError {
    #[error("knowledge base has no entries")]
    Empty,
    #[error("entry {index} ({question:?}) has no keywords")]
    NoKeywords { index: usize, question: String },
    #[error("entry {index} ({question:?}) has a blank keyword")]
    BlankKeyword { index: usize, question: String },
    #[error("entry {index} has a blank question or answer")]
    BlankText { index: usize },
}

/// Ordered, read-only FAQ catalog
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<FaqEntry>,
}

impl KnowledgeBase {
    /// Validate and wrap a list of entries.
    ///
    /// A blank keyword would normalize to the empty string and match every
    /// input as an exact phrase, so it is rejected along with empty keyword
    /// lists.
    pub fn new(entries: Vec<FaqEntry>) -> Result<Self, KnowledgeError> {
        if entries.is_empty() {
            return Err(KnowledgeError::Empty);
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.keywords.is_empty() {
                return Err(KnowledgeError::NoKeywords {
                    index,
                    question: entry.question.clone(),
                });
            }
            if entry.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(KnowledgeError::BlankKeyword {
                    index,
                    question: entry.question.clone(),
                });
            }
            if entry.question.trim().is_empty() || entry.answer.trim().is_empty() {
                return Err(KnowledgeError::BlankText { index });
            }
        }

        Ok(Self { entries })
    }

    /// The Systems & Networks catalog shipped with the widget
    pub fn builtin() -> Result<Self, KnowledgeError> {
        let entries = catalog::SEEDS
            .iter()
            .map(|seed| FaqEntry::new(seed.keywords.iter().copied(), seed.question, seed.answer))
            .collect();
        Self::new(entries)
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Look up an entry by its question text
    #[cfg(test)]
    pub fn by_question(&self, question: &str) -> Option<&FaqEntry> {
        self.entries.iter().find(|e| e.question == question)
    }
}
