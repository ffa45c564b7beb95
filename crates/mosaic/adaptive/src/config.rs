//! Adaptive testing configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the adaptive tester.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdaptiveConfig {
    /// Minimum items before the precision stopping rule may fire.
    pub min_items: u32,
    /// Hard item budget; the session always completes by this count.
    pub max_items: u32,
    /// Target standard error for early stopping.
    pub target_se: f64,
    /// Ability estimate at session start.
    pub initial_theta: f64,
    /// Standard error at session start.
    pub initial_se: f64,
    /// How far the item age window may be widened when the strict window
    /// has no eligible items, in months.
    pub age_slack_months: u32,
    /// Newton-Raphson iteration cap for the ability estimate.
    pub max_estimate_iterations: u32,
    /// Newton-Raphson convergence threshold on the step size.
    pub convergence_threshold: f64,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            min_items: 10,
            max_items: 30,
            target_se: 0.3,
            initial_theta: 0.0,
            initial_se: 1.0,
            age_slack_months: 6,
            max_estimate_iterations: 20,
            convergence_threshold: 1e-3,
        }
    }
}
