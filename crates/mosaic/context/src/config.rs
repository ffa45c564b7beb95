//! Context calculation configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the context multiplier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Scale factor applied to a positive opportunity gap before clamping.
    pub max_adversity_bonus: f64,
    /// Lower clamp of the adversity multiplier.
    pub min_multiplier: f64,
    /// Upper clamp of the adversity multiplier.
    pub max_multiplier: f64,
    /// Minimum data completeness before the multiplier may deviate
    /// from 1.0.
    pub completeness_floor: f64,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_adversity_bonus: 1.0,
            min_multiplier: 1.0,
            max_multiplier: 1.5,
            completeness_floor: 0.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_ordered() {
        let config = ContextConfig::default();
        assert!(config.min_multiplier < config.max_multiplier);
        assert!((0.0..=1.0).contains(&config.completeness_floor));
    }
}
