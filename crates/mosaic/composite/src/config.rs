//! Composite scoring configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for Mosaic generation. The cognitive and emotional
/// weights must sum to 1.0.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompositeConfig {
    pub cognitive_weight: f64,
    pub emotional_weight: f64,
    /// Reference population mean for the true-potential percentile.
    pub population_mean: f64,
    /// Reference population standard deviation.
    pub population_sd: f64,
    /// Confidence floor when any profile exists at all.
    pub min_confidence: f64,
    /// Behavioral sessions at which the behavioral confidence component
    /// saturates.
    pub confidence_session_cap: u32,
    /// Benchmark level (0-100) for traits the primary archetype does not
    /// weight.
    pub benchmark_level: f64,
    /// How strongly an archetype weight shifts the target level away
    /// from the benchmark.
    pub archetype_target_scale: f64,
    /// Minimum shortfall (0-100 points) before a gap is emitted.
    pub gap_emit_threshold: f64,
    /// Shortfall thresholds for medium, high and critical priority.
    pub gap_medium_threshold: f64,
    pub gap_high_threshold: f64,
    pub gap_critical_threshold: f64,
    /// Maximum gap entries per assessment.
    pub max_gaps: usize,
    /// How many top matches feed the local viability score.
    pub viability_top_n: usize,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            cognitive_weight: 0.4,
            emotional_weight: 0.6,
            population_mean: 50.0,
            population_sd: 20.0,
            min_confidence: 0.1,
            confidence_session_cap: 5,
            benchmark_level: 50.0,
            archetype_target_scale: 20.0,
            gap_emit_threshold: 10.0,
            gap_medium_threshold: 15.0,
            gap_high_threshold: 25.0,
            gap_critical_threshold: 40.0,
            max_gaps: 5,
            viability_top_n: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let config = CompositeConfig::default();
        assert!((config.cognitive_weight + config.emotional_weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn gap_thresholds_are_ordered() {
        let config = CompositeConfig::default();
        assert!(config.gap_emit_threshold < config.gap_medium_threshold);
        assert!(config.gap_medium_threshold < config.gap_high_threshold);
        assert!(config.gap_high_threshold < config.gap_critical_threshold);
    }
}
