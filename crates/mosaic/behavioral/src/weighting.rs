//! Reaction-time weighting of choice deltas.
//!
//! Fast choices reflect instinct and carry full weight; slow, deliberated
//! choices are down-weighted so they influence the profile less.

use std::collections::BTreeMap;

use mosaic_types::EmotionalDimension;

use crate::config::BehavioralConfig;

/// Weight for a choice given its reaction time: 1.0 at or under the fast
/// threshold, `slow_weight` at or over the slow threshold, linear in
/// between.
pub fn reaction_weight(reaction_time_ms: u32, config: &BehavioralConfig) -> f64 {
    if reaction_time_ms <= config.fast_reaction_ms {
        1.0
    } else if reaction_time_ms >= config.slow_reaction_ms {
        config.slow_weight
    } else {
        let span = (config.slow_reaction_ms - config.fast_reaction_ms) as f64;
        let into = (reaction_time_ms - config.fast_reaction_ms) as f64;
        1.0 - (1.0 - config.slow_weight) * (into / span)
    }
}

/// Apply the reaction-time weight to a choice's raw dimension deltas.
pub fn weight_deltas(
    deltas: &BTreeMap<EmotionalDimension, f64>,
    reaction_time_ms: u32,
    config: &BehavioralConfig,
) -> BTreeMap<EmotionalDimension, f64> {
    let weight = reaction_weight(reaction_time_ms, config);
    deltas
        .iter()
        .map(|(&dim, &delta)| (dim, delta * weight))
        .collect()
}
