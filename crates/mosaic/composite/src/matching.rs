//! Archetype matching by trait-vector similarity.

use std::collections::BTreeMap;

use mosaic_types::{Archetype, ArchetypeMatch};

/// Cosine similarity between the child's normalized traits and an
/// archetype's weights, over the trait keys present in both. Returns
/// `None` when there is no overlap or a zero-magnitude vector.
fn cosine_similarity(traits: &BTreeMap<String, f64>, weights: &BTreeMap<String, f64>) -> Option<f64> {
    let mut dot = 0.0;
    let mut child_norm = 0.0;
    let mut weight_norm = 0.0;
    let mut shared = 0usize;

    for (key, weight) in weights {
        if let Some(value) = traits.get(key) {
            dot += value * weight;
            child_norm += value * value;
            weight_norm += weight * weight;
            shared += 1;
        }
    }

    if shared == 0 || child_norm <= 0.0 || weight_norm <= 0.0 {
        return None;
    }
    Some(dot / (child_norm.sqrt() * weight_norm.sqrt()))
}

/// Score every archetype against the child's trait vector and rank them.
///
/// Match scores scale cosine similarity to [0, 100]; archetypes the
/// vector cannot be compared against score a neutral 50. Ranks are the
/// contiguous permutation 1..N, descending by score, with ties broken by
/// archetype definition order (the sort is stable over the definition
/// ordering).
pub fn match_archetypes(
    traits: &BTreeMap<String, f64>,
    archetypes: &[Archetype],
    local_industries: &[String],
) -> Vec<ArchetypeMatch> {
    let mut ordered: Vec<&Archetype> = archetypes.iter().collect();
    ordered.sort_by_key(|a| a.order);

    let mut matches: Vec<ArchetypeMatch> = ordered
        .iter()
        .map(|archetype| {
            let match_score = cosine_similarity(traits, &archetype.trait_weights)
                .map(|cos| (cos + 1.0) / 2.0 * 100.0)
                .unwrap_or(50.0);

            let trait_breakdown: BTreeMap<String, f64> = archetype
                .trait_weights
                .iter()
                .filter_map(|(key, weight)| {
                    traits
                        .get(key)
                        .map(|value| (key.clone(), (value * weight * 1000.0).round() / 10.0))
                })
                .collect();

            let local_viability = local_industries
                .iter()
                .any(|industry| archetype.industry_matches.contains(industry));

            ArchetypeMatch {
                archetype_type: archetype.archetype_type,
                match_score,
                match_rank: 0,
                trait_breakdown,
                local_viability,
            }
        })
        .collect();

    // Stable sort keeps definition order on equal scores.
    matches.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (index, entry) in matches.iter_mut().enumerate() {
        entry.match_rank = index as u32 + 1;
    }
    matches
}

/// Weighted share of the top matches that are locally viable, on a
/// 0-100 scale. `None` without local industry data.
pub fn local_viability_score(
    matches: &[ArchetypeMatch],
    local_industries: &[String],
    top_n: usize,
) -> Option<f64> {
    if local_industries.is_empty() || matches.is_empty() {
        return None;
    }

    let mut total_weight = 0.0;
    let mut viable_weight = 0.0;
    for (index, entry) in matches.iter().take(top_n).enumerate() {
        // Lower ranks count for less.
        let weight = entry.match_score * (1.0 - index as f64 * 0.2);
        total_weight += weight;
        if entry.local_viability {
            viable_weight += weight;
        }
    }

    if total_weight > 0.0 {
        Some(viable_weight / total_weight * 100.0)
    } else {
        Some(50.0)
    }
}
