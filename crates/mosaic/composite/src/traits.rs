//! The child's combined trait vector.
//!
//! Cognitive thetas on [-3, 3] and emotional scores on [-100, 100] are
//! both normalized to [0, 1] so they share a scale with the archetype
//! weight tables.

use std::collections::BTreeMap;

use mosaic_types::{CognitiveProfile, EmotionalProfile};

/// Normalize a theta on the standard ability scale to [0, 1].
fn normalize_theta(theta: f64) -> f64 {
    ((theta + 3.0) / 6.0).clamp(0.0, 1.0)
}

/// Normalize an emotional dimension score to [0, 1].
fn normalize_dimension(score: f64) -> f64 {
    ((score + 100.0) / 200.0).clamp(0.0, 1.0)
}

/// Build the combined, normalized trait vector keyed by trait label.
/// Only attempted domains and observed dimensions appear.
pub fn trait_vector(
    cognitive: Option<&CognitiveProfile>,
    emotional: Option<&EmotionalProfile>,
) -> BTreeMap<String, f64> {
    let mut traits = BTreeMap::new();

    if let Some(profile) = cognitive {
        for (domain, estimate) in &profile.domains {
            traits.insert(domain.label().to_string(), normalize_theta(estimate.score));
        }
    }
    if let Some(profile) = emotional {
        for (dimension, score) in &profile.dimensions {
            traits.insert(
                dimension.label().to_string(),
                normalize_dimension(*score),
            );
        }
    }

    traits
}
