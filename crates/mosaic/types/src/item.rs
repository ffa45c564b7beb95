//! Calibrated test items and response matching.

use serde::{Deserialize, Serialize};

use crate::domains::CognitiveDomain;
use crate::ids::ItemId;

// ── Answers ────────────────────────────────────────────────────────────

/// The authored correct answer for an item: a single option id or an
/// unordered set of option ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Single(String),
    Multiple(Vec<String>),
}

/// A child's submitted response, mirroring the answer key shapes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemResponse {
    Single(String),
    Multiple(Vec<String>),
}

impl AnswerKey {
    /// Whether a response matches this key. Multi-answers compare as sets;
    /// shape mismatches are incorrect, never an error.
    pub fn matches(&self, response: &ItemResponse) -> bool {
        match (self, response) {
            (AnswerKey::Single(key), ItemResponse::Single(given)) => key == given,
            (AnswerKey::Multiple(key), ItemResponse::Multiple(given)) => {
                let mut expected: Vec<&str> = key.iter().map(String::as_str).collect();
                let mut actual: Vec<&str> = given.iter().map(String::as_str).collect();
                expected.sort_unstable();
                expected.dedup();
                actual.sort_unstable();
                actual.dedup();
                expected == actual
            }
            _ => false,
        }
    }
}

// ── Items ──────────────────────────────────────────────────────────────

/// Presentation payload for an item. Opaque to the engine except for the
/// answer key; the rest is passed through to whatever renders the item.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemContent {
    pub prompt: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub correct_answer: AnswerKey,
    /// Renderer-specific extras (images, audio, animation hints).
    #[serde(default)]
    pub extra: serde_json::Value,
}

/// A calibrated adaptive test item. Immutable once authored; the content
/// store owns versioning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestItem {
    pub id: ItemId,
    pub domain: CognitiveDomain,
    /// IRT difficulty (b), in [-3, 3].
    pub difficulty: f64,
    /// IRT discrimination (a), in [0.5, 2.5].
    pub discrimination: f64,
    /// IRT guessing floor (c), in [0, 0.5].
    pub guessing: f64,
    pub min_age_months: u32,
    pub max_age_months: u32,
    pub active: bool,
    pub content: ItemContent,
}

impl TestItem {
    /// Whether this item's calibrated age window contains the given age,
    /// optionally widened by `slack_months` on both ends.
    pub fn age_eligible(&self, age_months: u32, slack_months: u32) -> bool {
        let min = self.min_age_months.saturating_sub(slack_months);
        let max = self.max_age_months.saturating_add(slack_months);
        age_months >= min && age_months <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(min_age: u32, max_age: u32) -> TestItem {
        TestItem {
            id: ItemId::new("math-001"),
            domain: CognitiveDomain::Math,
            difficulty: 0.0,
            discrimination: 1.0,
            guessing: 0.2,
            min_age_months: min_age,
            max_age_months: max_age,
            active: true,
            content: ItemContent {
                prompt: "How many apples?".into(),
                options: vec!["2".into(), "3".into(), "4".into()],
                correct_answer: AnswerKey::Single("3".into()),
                extra: serde_json::Value::Null,
            },
        }
    }

    #[test]
    fn single_answer_matching() {
        let key = AnswerKey::Single("3".into());
        assert!(key.matches(&ItemResponse::Single("3".into())));
        assert!(!key.matches(&ItemResponse::Single("4".into())));
        assert!(!key.matches(&ItemResponse::Multiple(vec!["3".into()])));
    }

    #[test]
    fn multi_answer_matches_as_set() {
        let key = AnswerKey::Multiple(vec!["a".into(), "b".into()]);
        assert!(key.matches(&ItemResponse::Multiple(vec!["b".into(), "a".into()])));
        assert!(!key.matches(&ItemResponse::Multiple(vec!["a".into()])));
        assert!(!key.matches(&ItemResponse::Single("a".into())));
    }

    #[test]
    fn age_window_with_slack() {
        let item = make_item(24, 36);
        assert!(item.age_eligible(24, 0));
        assert!(item.age_eligible(36, 0));
        assert!(!item.age_eligible(20, 0));
        assert!(item.age_eligible(20, 6));
        assert!(!item.age_eligible(48, 6));
    }
}
