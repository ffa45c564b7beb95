//! Maximum-information item selection.

use std::collections::HashSet;

use mosaic_irt::{item_information, ItemParams};
use mosaic_types::{ItemId, TestItem};

/// 3PL parameters of a test item.
pub(crate) fn params_of(item: &TestItem) -> ItemParams {
    ItemParams {
        discrimination: item.discrimination,
        difficulty: item.difficulty,
        guessing: item.guessing,
    }
}

/// Select the eligible item with maximum Fisher information at `theta`.
///
/// Eligible means: active, age window contains `age_months`, and not in
/// `used`. When the strict age window leaves nothing, the window is
/// widened by `age_slack_months` once before giving up. Returns `None`
/// when the pool is exhausted; an already-administered item is never
/// returned.
pub fn select_item<'a>(
    theta: f64,
    age_months: u32,
    pool: &'a [TestItem],
    used: &HashSet<ItemId>,
    age_slack_months: u32,
) -> Option<&'a TestItem> {
    for slack in [0, age_slack_months] {
        let best = pool
            .iter()
            .filter(|item| item.active)
            .filter(|item| !used.contains(&item.id))
            .filter(|item| item.age_eligible(age_months, slack))
            .map(|item| (item, item_information(theta, &params_of(item))))
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        if let Some((item, _)) = best {
            return Some(item);
        }
        if age_slack_months == 0 {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_types::{AnswerKey, CognitiveDomain, ItemContent};

    fn make_item(id: &str, difficulty: f64, min_age: u32, max_age: u32) -> TestItem {
        TestItem {
            id: ItemId::new(id),
            domain: CognitiveDomain::Logic,
            difficulty,
            discrimination: 1.5,
            guessing: 0.2,
            min_age_months: min_age,
            max_age_months: max_age,
            active: true,
            content: ItemContent {
                prompt: "which comes next?".into(),
                options: vec!["a".into(), "b".into()],
                correct_answer: AnswerKey::Single("a".into()),
                extra: serde_json::Value::Null,
            },
        }
    }

    #[test]
    fn picks_most_informative_item() {
        let pool = vec![
            make_item("easy", -2.0, 24, 48),
            make_item("matched", 0.0, 24, 48),
            make_item("hard", 2.0, 24, 48),
        ];
        let chosen = select_item(0.0, 36, &pool, &HashSet::new(), 6).unwrap();
        assert_eq!(chosen.id.0, "matched");
    }

    #[test]
    fn never_repeats_used_items() {
        let pool = vec![make_item("only", 0.0, 24, 48)];
        let mut used = HashSet::new();
        used.insert(ItemId::new("only"));
        assert!(select_item(0.0, 36, &pool, &used, 6).is_none());
    }

    #[test]
    fn widens_age_window_when_strict_pool_is_empty() {
        // Child is 36 months; the item window ends at 32, inside the
        // 6-month slack.
        let pool = vec![make_item("near", 0.0, 24, 32)];
        let chosen = select_item(0.0, 36, &pool, &HashSet::new(), 6);
        assert!(chosen.is_some());

        // Beyond the slack the pool stays empty.
        let pool = vec![make_item("far", 0.0, 12, 24)];
        assert!(select_item(0.0, 36, &pool, &HashSet::new(), 6).is_none());
    }

    #[test]
    fn skips_inactive_items() {
        let mut item = make_item("retired", 0.0, 24, 48);
        item.active = false;
        let pool = vec![item];
        assert!(select_item(0.0, 36, &pool, &HashSet::new(), 6).is_none());
    }
}
