//! Built-in archetype catalogue.
//!
//! Ten trait-vector profiles over the cognitive-domain and
//! emotional-dimension keys, with the industries where each archetype's
//! pathways are viable. Definition order doubles as the deterministic
//! tie-break for match ranking.

use mosaic_types::{Archetype, ArchetypeType};

struct Definition {
    archetype_type: ArchetypeType,
    name: &'static str,
    description: &'static str,
    weights: &'static [(&'static str, f64)],
    industries: &'static [&'static str],
}

const DEFINITIONS: &[Definition] = &[
    Definition {
        archetype_type: ArchetypeType::Diplomat,
        name: "The Diplomat",
        description: "Bridges people and ideas through language and perspective-taking.",
        weights: &[
            ("verbal", 0.9),
            ("empathy", 0.8),
            ("cooperation", 0.6),
            ("emotional_regulation", 0.5),
        ],
        industries: &["Government", "Education", "Nonprofit", "Media"],
    },
    Definition {
        archetype_type: ArchetypeType::SystemsArchitect,
        name: "The Systems Architect",
        description: "Designs structures and abstractions; thrives on rules and patterns.",
        weights: &[
            ("logic", 0.9),
            ("spatial", 0.7),
            ("math", 0.6),
            ("delayed_gratification", 0.5),
        ],
        industries: &["Technology", "Engineering", "Finance"],
    },
    Definition {
        archetype_type: ArchetypeType::Operator,
        name: "The Operator",
        description: "Gets things done reliably, on a team and against a plan.",
        weights: &[
            ("cooperation", 0.8),
            ("delayed_gratification", 0.7),
            ("failure_resilience", 0.6),
            ("logic", 0.5),
        ],
        industries: &["Logistics", "Manufacturing", "Retail", "Hospitality"],
    },
    Definition {
        archetype_type: ArchetypeType::Caregiver,
        name: "The Caregiver",
        description: "Tuned to the needs of others; steady, patient and warm.",
        weights: &[
            ("empathy", 0.9),
            ("cooperation", 0.8),
            ("emotional_regulation", 0.6),
            ("delayed_gratification", 0.4),
        ],
        industries: &["Healthcare", "Education", "Social Services"],
    },
    Definition {
        archetype_type: ArchetypeType::Creator,
        name: "The Creator",
        description: "Makes new things; comfortable with ambiguity and risk.",
        weights: &[
            ("spatial", 0.8),
            ("risk_tolerance", 0.7),
            ("verbal", 0.6),
            ("empathy", 0.4),
        ],
        industries: &["Media", "Design", "Entertainment", "Technology"],
    },
    Definition {
        archetype_type: ArchetypeType::Analyst,
        name: "The Analyst",
        description: "Finds the signal: numbers, patterns, evidence.",
        weights: &[("math", 0.9), ("logic", 0.8), ("memory", 0.6)],
        industries: &["Finance", "Technology", "Research", "Insurance"],
    },
    Definition {
        archetype_type: ArchetypeType::Builder,
        name: "The Builder",
        description: "Shapes the physical world, one patient iteration at a time.",
        weights: &[
            ("spatial", 0.9),
            ("delayed_gratification", 0.6),
            ("failure_resilience", 0.6),
        ],
        industries: &["Construction", "Manufacturing", "Engineering", "Agriculture"],
    },
    Definition {
        archetype_type: ArchetypeType::Explorer,
        name: "The Explorer",
        description: "Seeks the unfamiliar; learns by trying and recovering.",
        weights: &[
            ("risk_tolerance", 0.9),
            ("failure_resilience", 0.7),
            ("spatial", 0.6),
        ],
        industries: &["Travel", "Research", "Energy", "Outdoor Recreation"],
    },
    Definition {
        archetype_type: ArchetypeType::Connector,
        name: "The Connector",
        description: "Builds networks; energized by people and shared goals.",
        weights: &[
            ("empathy", 0.8),
            ("cooperation", 0.8),
            ("verbal", 0.7),
        ],
        industries: &["Sales", "Media", "Hospitality", "Community Services"],
    },
    Definition {
        archetype_type: ArchetypeType::Guardian,
        name: "The Guardian",
        description: "Protects and upholds; dependable under pressure.",
        weights: &[
            ("failure_resilience", 0.8),
            ("cooperation", 0.7),
            ("logic", 0.5),
            ("empathy", 0.5),
        ],
        industries: &["Public Safety", "Healthcare", "Government", "Security"],
    },
];

/// Build the built-in archetype catalogue in definition order.
pub fn builtin_archetypes() -> Vec<Archetype> {
    DEFINITIONS
        .iter()
        .enumerate()
        .map(|(order, def)| Archetype {
            archetype_type: def.archetype_type,
            name: def.name.to_string(),
            description: def.description.to_string(),
            trait_weights: def
                .weights
                .iter()
                .map(|(key, weight)| (key.to_string(), *weight))
                .collect(),
            industry_matches: def.industries.iter().map(|s| s.to_string()).collect(),
            order: order as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_types::{CognitiveDomain, EmotionalDimension};

    #[test]
    fn ten_archetypes_in_definition_order() {
        let archetypes = builtin_archetypes();
        assert_eq!(archetypes.len(), 10);
        for (i, archetype) in archetypes.iter().enumerate() {
            assert_eq!(archetype.order, i as u32);
        }
    }

    #[test]
    fn weights_use_known_trait_keys_in_range() {
        let known: Vec<&str> = CognitiveDomain::ALL
            .iter()
            .map(|d| d.label())
            .chain(EmotionalDimension::ALL.iter().map(|d| d.label()))
            .collect();

        for archetype in builtin_archetypes() {
            assert!(!archetype.trait_weights.is_empty());
            for (key, weight) in &archetype.trait_weights {
                assert!(known.contains(&key.as_str()), "unknown trait key {key}");
                assert!((-1.0..=1.0).contains(weight));
            }
        }
    }
}
