//! Gap analysis: trait shortfalls against the target profile.

use mosaic_types::{Archetype, EstimatedEffort, GapEntry, Priority};

use crate::config::CompositeConfig;

/// Derive gap entries from the child's normalized trait vector.
///
/// The target for a trait is the benchmark level shifted by the primary
/// archetype's weight for it (an archetype that prizes a trait raises the
/// bar; one that ignores it leaves the benchmark). A gap is emitted when
/// the shortfall reaches the emit threshold; priority and estimated
/// effort both derive from the shortfall magnitude.
pub fn gap_analysis(
    traits: &std::collections::BTreeMap<String, f64>,
    primary: Option<&Archetype>,
    config: &CompositeConfig,
) -> Vec<GapEntry> {
    let mut gaps: Vec<(f64, GapEntry)> = traits
        .iter()
        .filter_map(|(key, &normalized)| {
            let current = normalized * 100.0;
            let target = match primary.and_then(|a| a.trait_weights.get(key)) {
                Some(&weight) => config.benchmark_level + config.archetype_target_scale * weight,
                None => config.benchmark_level,
            };

            let shortfall = target - current;
            if shortfall < config.gap_emit_threshold {
                return None;
            }

            let (priority, estimated_effort) = if shortfall >= config.gap_critical_threshold {
                (Priority::Critical, EstimatedEffort::LongTerm)
            } else if shortfall >= config.gap_high_threshold {
                (Priority::High, EstimatedEffort::Months)
            } else if shortfall >= config.gap_medium_threshold {
                (Priority::Medium, EstimatedEffort::Months)
            } else {
                (Priority::Low, EstimatedEffort::Weeks)
            };

            Some((
                shortfall,
                GapEntry {
                    trait_key: key.clone(),
                    current_level: current,
                    target_level: target,
                    priority,
                    estimated_effort,
                    related_archetype: primary.map(|a| a.archetype_type),
                },
            ))
        })
        .collect();

    // Largest shortfalls first, capped.
    gaps.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    gaps.truncate(config.max_gaps);
    gaps.into_iter().map(|(_, gap)| gap).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_types::ArchetypeType;
    use std::collections::BTreeMap;

    fn traits(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn primary(weights: &[(&str, f64)]) -> Archetype {
        Archetype {
            archetype_type: ArchetypeType::Analyst,
            name: "Analyst".into(),
            description: String::new(),
            trait_weights: weights.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            industry_matches: vec![],
            order: 0,
        }
    }

    #[test]
    fn healthy_traits_produce_no_gaps() {
        let config = CompositeConfig::default();
        let gaps = gap_analysis(&traits(&[("math", 0.7), ("empathy", 0.6)]), None, &config);
        assert!(gaps.is_empty());
    }

    #[test]
    fn shortfall_maps_to_priority_bands() {
        let config = CompositeConfig::default();
        let archetype = primary(&[("math", 1.0)]);
        // Target for math = 50 + 20 = 70.
        let cases = [
            (0.25, Priority::Critical, EstimatedEffort::LongTerm), // shortfall 45
            (0.42, Priority::High, EstimatedEffort::Months),       // shortfall 28
            (0.52, Priority::Medium, EstimatedEffort::Months),     // shortfall 18
            (0.58, Priority::Low, EstimatedEffort::Weeks),         // shortfall 12
        ];
        for (value, priority, effort) in cases {
            let gaps = gap_analysis(&traits(&[("math", value)]), Some(&archetype), &config);
            assert_eq!(gaps.len(), 1, "value {value}");
            assert_eq!(gaps[0].priority, priority, "value {value}");
            assert_eq!(gaps[0].estimated_effort, effort, "value {value}");
        }
    }

    #[test]
    fn unweighted_traits_use_the_benchmark() {
        let config = CompositeConfig::default();
        let archetype = primary(&[("math", 1.0)]);
        // Empathy is not weighted: target stays at 50, current 30 -> gap 20.
        let gaps = gap_analysis(&traits(&[("empathy", 0.3)]), Some(&archetype), &config);
        assert_eq!(gaps.len(), 1);
        assert!((gaps[0].target_level - 50.0).abs() < f64::EPSILON);
        assert_eq!(gaps[0].priority, Priority::Medium);
    }

    #[test]
    fn gaps_are_sorted_and_capped() {
        let config = CompositeConfig {
            max_gaps: 2,
            ..Default::default()
        };
        let gaps = gap_analysis(
            &traits(&[("math", 0.05), ("logic", 0.2), ("verbal", 0.35)]),
            None,
            &config,
        );
        assert_eq!(gaps.len(), 2);
        // Largest shortfall first.
        assert_eq!(gaps[0].trait_key, "math");
        assert_eq!(gaps[1].trait_key, "logic");
    }

    #[test]
    fn related_archetype_is_carried() {
        let config = CompositeConfig::default();
        let archetype = primary(&[("math", 0.8)]);
        let gaps = gap_analysis(&traits(&[("math", 0.1)]), Some(&archetype), &config);
        assert_eq!(gaps[0].related_archetype, Some(ArchetypeType::Analyst));
    }
}
