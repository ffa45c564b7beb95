//! Ability estimation over a response history.
//!
//! Newton-Raphson MAP estimation with a standard-normal prior: the prior
//! keeps early estimates near zero and shrinks the step size as evidence
//! accumulates, so a correct response always moves theta up and an
//! incorrect one down, by less and less as the session grows.

use mosaic_irt::{item_information, probability_correct, ItemParams};

use crate::config::AdaptiveConfig;

/// Theta bounds on the standard ability scale.
const THETA_MIN: f64 = -3.0;
const THETA_MAX: f64 = 3.0;

/// Guard against a vanishing Newton denominator.
const MIN_DENOMINATOR: f64 = 1e-4;

/// Estimate ability and standard error from the full response history.
///
/// `history` pairs each administered item's parameters with the response
/// correctness, in administration order. Returns `(theta, standard_error)`;
/// with an empty history the prior `(prior_theta, initial_se)` is returned
/// unchanged.
pub fn estimate_ability(
    history: &[(ItemParams, bool)],
    prior_theta: f64,
    config: &AdaptiveConfig,
) -> (f64, f64) {
    if history.is_empty() {
        return (prior_theta, config.initial_se);
    }

    let mut theta = prior_theta;
    for _ in 0..config.max_estimate_iterations {
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (item, is_correct) in history {
            let p = probability_correct(theta, item);
            let q = 1.0 - p;

            let u = if *is_correct { 1.0 } else { 0.0 };
            let w = if item.guessing < 1.0 {
                item.discrimination * (p - item.guessing) / (p * (1.0 - item.guessing))
            } else {
                item.discrimination
            };

            numerator += w * (u - p);
            denominator += w * w * p * q;
        }

        // Standard-normal prior on theta.
        numerator -= theta;
        denominator += 1.0;

        if denominator.abs() < MIN_DENOMINATOR {
            break;
        }

        let delta = numerator / denominator;
        theta += delta;

        if delta.abs() < config.convergence_threshold {
            break;
        }
    }

    theta = theta.clamp(THETA_MIN, THETA_MAX);

    // Cumulative information at the final estimate, plus the prior's unit
    // information.
    let info: f64 = history
        .iter()
        .map(|(item, _)| item_information(theta, item))
        .sum::<f64>()
        + 1.0;

    let se = if info > 0.0 {
        1.0 / info.sqrt()
    } else {
        config.initial_se
    };

    (theta, se)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(a: f64, b: f64, c: f64) -> ItemParams {
        ItemParams {
            discrimination: a,
            difficulty: b,
            guessing: c,
        }
    }

    fn config() -> AdaptiveConfig {
        AdaptiveConfig::default()
    }

    #[test]
    fn empty_history_returns_prior() {
        let (theta, se) = estimate_ability(&[], 0.0, &config());
        assert!((theta - 0.0).abs() < f64::EPSILON);
        assert!((se - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn correct_response_raises_theta() {
        let history = vec![(item(1.5, 0.0, 0.2), true)];
        let (theta, _) = estimate_ability(&history, 0.0, &config());
        assert!(theta > 0.0);
    }

    #[test]
    fn incorrect_response_lowers_theta() {
        let history = vec![(item(1.5, 0.0, 0.2), false)];
        let (theta, _) = estimate_ability(&history, 0.0, &config());
        assert!(theta < 0.0);
    }

    #[test]
    fn step_size_shrinks_with_history_length() {
        // One extra correct response moves theta less when it lands on a
        // long consistent history than on a short one.
        let short: Vec<_> = (0..2).map(|_| (item(1.2, 0.0, 0.2), true)).collect();
        let long: Vec<_> = (0..12).map(|_| (item(1.2, 0.0, 0.2), true)).collect();

        let (theta_short, _) = estimate_ability(&short, 0.0, &config());
        let (theta_long, _) = estimate_ability(&long, 0.0, &config());

        let mut short_plus = short.clone();
        short_plus.push((item(1.2, theta_short, 0.2), true));
        let mut long_plus = long.clone();
        long_plus.push((item(1.2, theta_long, 0.2), true));

        let (theta_short2, _) = estimate_ability(&short_plus, theta_short, &config());
        let (theta_long2, _) = estimate_ability(&long_plus, theta_long, &config());

        let short_step = (theta_short2 - theta_short).abs();
        let long_step = (theta_long2 - theta_long).abs();
        assert!(long_step <= short_step + 1e-6);
    }

    #[test]
    fn se_decreases_as_items_accumulate() {
        // Theta moves between steps, so per-step SE can wobble slightly;
        // the trend over the session must still be downward.
        let mut history = Vec::new();
        let mut prev_se = 1.0;
        for i in 0..15 {
            history.push((item(1.5, (i % 5) as f64 / 2.0 - 1.0, 0.2), i % 2 == 0));
            let (_, se) = estimate_ability(&history, 0.0, &config());
            assert!(se <= prev_se + 0.05, "SE jumped at step {i}");
            prev_se = se;
        }
        let (_, final_se) = estimate_ability(&history, 0.0, &config());
        assert!(final_se < 0.6, "SE failed to shrink over 15 items");
    }

    #[test]
    fn theta_stays_clamped() {
        let history: Vec<_> = (0..30).map(|_| (item(2.5, -2.5, 0.0), true)).collect();
        let (theta, _) = estimate_ability(&history, 0.0, &config());
        assert!(theta <= 3.0);

        let history: Vec<_> = (0..30).map(|_| (item(2.5, 2.5, 0.0), false)).collect();
        let (theta, _) = estimate_ability(&history, 0.0, &config());
        assert!(theta >= -3.0);
    }
}
