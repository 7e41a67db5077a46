//! FAQ entries for the help page.

use serde::{Deserialize, Serialize};

/// A question and answer shown in the FAQ accordion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqEntry {
    /// Grouping heading (e.g., "Deals", "Sellers").
    pub topic: String,
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(
        topic: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}
