//! # mosaic-irt
//!
//! Pure scoring primitives: the three-parameter logistic (3PL) item
//! response function, Fisher information for item selection, and normal
//! CDF percentile conversions. Every function here is deterministic and
//! side-effect-free; the engines above compose them.

#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

/// Calibrated 3PL parameters for one item.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ItemParams {
    /// Discrimination (a), in [0.5, 2.5].
    pub discrimination: f64,
    /// Difficulty (b), in [-3, 3].
    pub difficulty: f64,
    /// Guessing floor (c), in [0, 0.5].
    pub guessing: f64,
}

/// Probability of a correct response under the 3PL model:
/// `p = c + (1 - c) / (1 + exp(-a(theta - b)))`.
///
/// Monotone in `theta`, saturating to `c` as `theta -> -inf` and to 1 as
/// `theta -> +inf`.
pub fn probability_correct(theta: f64, item: &ItemParams) -> f64 {
    let z = item.discrimination * (theta - item.difficulty);
    item.guessing + (1.0 - item.guessing) / (1.0 + (-z).exp())
}

/// Fisher information for the 3PL model at the given ability.
///
/// `I = (dP/dtheta)^2 / (P * Q)` with
/// `dP/dtheta = a (p - c)(1 - p) / (1 - c)`.
///
/// Returns 0 (never NaN) when `p` sits at an asymptote.
pub fn item_information(theta: f64, item: &ItemParams) -> f64 {
    let p = probability_correct(theta, item);
    let q = 1.0 - p;

    if item.guessing >= 1.0 || p <= 0.0 || q <= 0.0 {
        return 0.0;
    }

    let dp = item.discrimination * (p - item.guessing) * (1.0 - p) / (1.0 - item.guessing);
    (dp * dp) / (p * q)
}

/// Standard normal cumulative distribution function.
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + libm::erf(z / std::f64::consts::SQRT_2))
}

/// Map a z-score to a percentile in [0, 100]. Monotone;
/// `percentile_from_z(0.0) == 50.0`.
pub fn percentile_from_z(z: f64) -> f64 {
    100.0 * normal_cdf(z)
}

/// Percentile of a score against a reference population distribution.
pub fn percentile_from_score(score: f64, population_mean: f64, population_sd: f64) -> f64 {
    if population_sd <= 0.0 {
        return 50.0;
    }
    percentile_from_z((score - population_mean) / population_sd)
}

/// Map theta on the standard [-3, 3] ability scale to a 0-100 raw score.
pub fn theta_to_raw_score(theta: f64) -> f64 {
    (theta + 3.0) / 6.0 * 100.0
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

    #[test]
    fn probability_is_monotone_in_theta() {
        let params = item(1.4, 0.5, 0.2);
        let mut prev = 0.0;
        let mut theta = -4.0;
        while theta <= 4.0 {
            let p = probability_correct(theta, &params);
            assert!(p >= prev, "non-monotone at theta={theta}");
            prev = p;
            theta += 0.05;
        }
    }

    #[test]
    fn probability_saturates_to_guessing_and_one() {
        let params = item(2.0, 0.0, 0.25);
        let low = probability_correct(-60.0, &params);
        let high = probability_correct(60.0, &params);
        assert!((low - 0.25).abs() < 1e-9);
        assert!((high - 1.0).abs() < 1e-9);
    }

    #[test]
    fn probability_stays_in_bounds() {
        let params = item(0.5, -2.0, 0.1);
        for i in -30..=30 {
            let p = probability_correct(i as f64 / 5.0, &params);
            assert!(p >= params.guessing && p <= 1.0);
        }
    }

    #[test]
    fn information_is_zero_at_asymptotes_not_nan() {
        let params = item(2.5, 0.0, 0.2);
        let info = item_information(80.0, &params);
        assert!(info.is_finite());
        assert!(info.abs() < 1e-6);

        let info = item_information(-80.0, &params);
        assert!(info.is_finite());
        assert!(info.abs() < 1e-6);
    }

    #[test]
    fn information_peaks_near_difficulty() {
        let params = item(1.8, 0.7, 0.0);
        let at_b = item_information(0.7, &params);
        let far = item_information(3.0, &params);
        assert!(at_b > far);
    }

    #[test]
    fn percentile_of_zero_z_is_fifty() {
        assert!((percentile_from_z(0.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn percentile_is_monotone() {
        let mut prev = 0.0;
        for i in -40..=40 {
            let p = percentile_from_z(i as f64 / 10.0);
            assert!(p >= prev);
            assert!((0.0..=100.0).contains(&p));
            prev = p;
        }
    }

    #[test]
    fn population_percentile_centers_on_mean() {
        assert!((percentile_from_score(50.0, 50.0, 20.0) - 50.0).abs() < 1e-9);
        assert!(percentile_from_score(70.0, 50.0, 20.0) > 50.0);
        assert!(percentile_from_score(30.0, 50.0, 20.0) < 50.0);
    }

    #[test]
    fn theta_scale_endpoints() {
        assert!((theta_to_raw_score(-3.0) - 0.0).abs() < 1e-9);
        assert!((theta_to_raw_score(0.0) - 50.0).abs() < 1e-9);
        assert!((theta_to_raw_score(3.0) - 100.0).abs() < 1e-9);
    }
}
