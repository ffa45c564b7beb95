//! Session engagement scoring.
//!
//! A proxy for whether the child was actually playing: option variety,
//! plausible reaction times, and low hesitation. Random tapping and
//! disengaged stalling both pull the score down.

use mosaic_types::ChoiceRecord;

/// Reaction averages under this look like random tapping.
const RANDOM_TAP_MS: f64 = 500.0;
/// Reaction averages over this look disengaged.
const DISENGAGED_MS: f64 = 15_000.0;

/// Engagement in [0, 1] from the session's choice patterns.
pub fn engagement_score(choices: &[ChoiceRecord]) -> f64 {
    if choices.is_empty() {
        return 0.5;
    }

    let mut options: Vec<&str> = choices.iter().map(|c| c.selected_option.as_str()).collect();
    options.sort_unstable();
    options.dedup();
    let unique_ratio = options.len() as f64 / choices.len() as f64;

    let avg_reaction = choices
        .iter()
        .map(|c| c.reaction_time_ms as f64)
        .sum::<f64>()
        / choices.len() as f64;
    let reaction_score = if avg_reaction < RANDOM_TAP_MS {
        0.5
    } else if avg_reaction > DISENGAGED_MS {
        0.6
    } else {
        1.0
    };

    let avg_hesitation = choices
        .iter()
        .map(|c| c.hesitation_count as f64)
        .sum::<f64>()
        / choices.len() as f64;
    let hesitation_score = (1.0 - avg_hesitation * 0.1).max(0.5);

    (unique_ratio * 0.3 + reaction_score * 0.4 + hesitation_score * 0.3).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn choice(option: &str, reaction_ms: u32, hesitation: u32, seq: u32) -> ChoiceRecord {
        ChoiceRecord {
            choice_id: format!("choice-{seq}"),
            selected_option: option.into(),
            reaction_time_ms: reaction_ms,
            hesitation_count: hesitation,
            weighted_deltas: BTreeMap::new(),
            sequence: seq,
        }
    }

    #[test]
    fn varied_normal_paced_session_scores_high() {
        let choices = vec![
            choice("a", 3_000, 0, 1),
            choice("b", 2_500, 0, 2),
            choice("c", 4_000, 1, 3),
        ];
        assert!(engagement_score(&choices) > 0.85);
    }

    #[test]
    fn random_tapping_is_penalized() {
        let choices = vec![
            choice("a", 200, 0, 1),
            choice("a", 250, 0, 2),
            choice("a", 180, 0, 3),
        ];
        let fast = engagement_score(&choices);

        let normal = vec![
            choice("a", 3_000, 0, 1),
            choice("b", 2_500, 0, 2),
            choice("c", 4_000, 0, 3),
        ];
        assert!(fast < engagement_score(&normal));
    }

    #[test]
    fn heavy_hesitation_lowers_the_score() {
        let calm = vec![choice("a", 3_000, 0, 1), choice("b", 3_000, 0, 2)];
        let hesitant = vec![choice("a", 3_000, 5, 1), choice("b", 3_000, 6, 2)];
        assert!(engagement_score(&hesitant) < engagement_score(&calm));
    }

    #[test]
    fn empty_session_is_neutral() {
        assert!((engagement_score(&[]) - 0.5).abs() < f64::EPSILON);
    }
}
