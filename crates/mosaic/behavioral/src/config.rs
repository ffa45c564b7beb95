//! Behavioral scoring configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for behavioral aggregation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BehavioralConfig {
    /// Reactions at or under this are fully instinctive (weight 1.0).
    pub fast_reaction_ms: u32,
    /// Reactions at or over this are fully deliberate.
    pub slow_reaction_ms: u32,
    /// Delta weight applied to fully deliberate choices.
    pub slow_weight: f64,
    /// Dimension scores are clamped to +/- this bound.
    pub score_bound: f64,
    /// Standard-deviation scale for the consistency index: a per-type
    /// spread of this size maps to zero consistency.
    pub consistency_scale: f64,
}

impl Default for BehavioralConfig {
    fn default() -> Self {
        Self {
            fast_reaction_ms: 2_000,
            slow_reaction_ms: 8_000,
            slow_weight: 0.7,
            score_bound: 100.0,
            consistency_scale: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bracket_reaction_band() {
        let config = BehavioralConfig::default();
        assert!(config.fast_reaction_ms < config.slow_reaction_ms);
        assert!(config.slow_weight < 1.0);
    }
}
