//! Mosaic generation.

use chrono::Utc;
use tracing::info;

use mosaic_irt::percentile_from_score;
use mosaic_types::{
    Archetype, ChildId, CognitiveProfile, ContextMultiplier, EmotionalProfile, EngineError,
    EngineResult, MosaicAssessment, MosaicId,
};

use crate::config::CompositeConfig;
use crate::gaps::gap_analysis;
use crate::matching::{local_viability_score, match_archetypes};
use crate::traits::trait_vector;

/// Stateless composite engine.
#[derive(Clone, Debug, Default)]
pub struct MosaicEngine {
    config: CompositeConfig,
}

impl MosaicEngine {
    pub fn new(config: CompositeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompositeConfig {
        &self.config
    }

    /// Raw cognitive score on a 0-100 scale: the composite percentile, or
    /// the mean of the available domain percentiles.
    fn raw_cognitive(profile: &CognitiveProfile) -> Option<f64> {
        if let Some(percentile) = profile.composite_percentile {
            return Some(percentile);
        }
        if profile.domains.is_empty() {
            return None;
        }
        let sum: f64 = profile.domains.values().map(|d| d.percentile).sum();
        Some(sum / profile.domains.len() as f64)
    }

    /// Confidence in [0, 1] from completed cognitive domains and
    /// behavioral sessions alone.
    fn confidence(&self, domains_completed: u32, sessions_completed: u32) -> f64 {
        let cognitive = domains_completed as f64 / 5.0;
        let behavioral = sessions_completed.min(self.config.confidence_session_cap) as f64
            / self.config.confidence_session_cap as f64;
        ((cognitive + behavioral) / 2.0)
            .max(self.config.min_confidence)
            .min(1.0)
    }

    /// Generate one versioned Mosaic assessment.
    ///
    /// Requires at least one profile; a missing profile degrades the
    /// combined score to the other profile alone and lowers confidence
    /// rather than failing.
    #[allow(clippy::too_many_arguments)]
    pub fn generate(
        &self,
        child_id: ChildId,
        cognitive: Option<&CognitiveProfile>,
        emotional: Option<&EmotionalProfile>,
        context: Option<&ContextMultiplier>,
        archetypes: &[Archetype],
        local_industries: &[String],
        version: u32,
    ) -> EngineResult<MosaicAssessment> {
        if cognitive.is_none() && emotional.is_none() {
            return Err(EngineError::DataIncomplete(format!(
                "no cognitive or emotional profile exists for child {child_id}"
            )));
        }
        if archetypes.is_empty() {
            return Err(EngineError::ContentUnavailable(
                "archetype catalogue is empty".into(),
            ));
        }

        let raw_cognitive_score = cognitive.and_then(Self::raw_cognitive);
        let raw_emotional_score = emotional.and_then(EmotionalProfile::composite_eq_score);

        let raw_combined_score = match (raw_cognitive_score, raw_emotional_score) {
            (Some(cognitive), Some(emotional)) => Some(
                cognitive * self.config.cognitive_weight
                    + emotional * self.config.emotional_weight,
            ),
            // Degraded: score from the single available profile.
            (Some(cognitive), None) => Some(cognitive),
            (None, Some(emotional)) => Some(emotional),
            (None, None) => None,
        };

        let adversity_multiplier = context.map(|c| c.adversity_multiplier).unwrap_or(1.0);

        let true_potential_score = raw_combined_score.map(|raw| raw * adversity_multiplier);
        let true_potential_percentile = true_potential_score.map(|score| {
            percentile_from_score(score, self.config.population_mean, self.config.population_sd)
        });

        let confidence_level = self.confidence(
            cognitive.map(|p| p.domains_completed()).unwrap_or(0),
            emotional.map(|p| p.sessions_completed).unwrap_or(0),
        );

        let traits = trait_vector(cognitive, emotional);
        let archetype_matches = match_archetypes(&traits, archetypes, local_industries);

        let primary_archetype = archetype_matches.first().map(|m| m.archetype_type);
        let secondary_archetype = archetype_matches.get(1).map(|m| m.archetype_type);
        let local_viability = local_viability_score(
            &archetype_matches,
            local_industries,
            self.config.viability_top_n,
        );

        let primary_definition: Option<&Archetype> = primary_archetype
            .and_then(|t| archetypes.iter().find(|a| a.archetype_type == t));
        let gaps = gap_analysis(&traits, primary_definition, &self.config);

        info!(
            child = %child_id,
            version,
            true_potential = true_potential_score.unwrap_or(0.0),
            archetype = primary_archetype.map(|a| a.label()).unwrap_or("unknown"),
            confidence = confidence_level,
            "generated mosaic assessment"
        );

        Ok(MosaicAssessment {
            id: MosaicId::new(),
            child_id,
            version,
            raw_cognitive_score,
            raw_emotional_score,
            raw_combined_score,
            adversity_multiplier,
            true_potential_score,
            true_potential_percentile,
            confidence_level,
            primary_archetype,
            secondary_archetype,
            local_viability_score: local_viability,
            archetype_matches,
            gap_analysis: gaps,
            calculated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_types::{
        ArchetypeType, ChildId, CognitiveDomain, DomainEstimate, EmotionalDimension,
    };

    fn cognitive_with_percentile(percentile: f64) -> CognitiveProfile {
        let mut profile = CognitiveProfile::new(ChildId::new());
        for domain in CognitiveDomain::ALL {
            profile.domains.insert(
                domain,
                DomainEstimate {
                    score: 0.0,
                    percentile,
                },
            );
        }
        profile.composite_percentile = Some(percentile);
        profile.composite_score = Some(0.0);
        profile
    }

    fn emotional_with_mean(dimension_score: f64, sessions: u32) -> EmotionalProfile {
        let mut profile = EmotionalProfile::new(ChildId::new());
        for dimension in EmotionalDimension::ALL {
            profile.dimensions.insert(dimension, dimension_score);
        }
        profile.sessions_completed = sessions;
        profile
    }

    fn catalogue() -> Vec<Archetype> {
        [
            (ArchetypeType::Analyst, &[("math", 0.9), ("logic", 0.8)][..]),
            (ArchetypeType::Caregiver, &[("empathy", 0.9), ("cooperation", 0.7)][..]),
            (ArchetypeType::Explorer, &[("risk_tolerance", 0.8), ("spatial", 0.6)][..]),
        ]
        .iter()
        .enumerate()
        .map(|(i, (t, weights))| Archetype {
            archetype_type: *t,
            name: t.label().into(),
            description: String::new(),
            trait_weights: weights.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            industry_matches: vec![],
            order: i as u32,
        })
        .collect()
    }

    fn multiplier(value: f64) -> ContextMultiplier {
        ContextMultiplier {
            child_id: ChildId::new(),
            opportunity_index: Some(0.8),
            socio_econ_status: Some(0.4),
            gap_score: Some(0.4),
            adversity_multiplier: value,
            data_completeness: 0.8,
            calculated_at: Utc::now(),
        }
    }

    #[test]
    fn combined_score_respects_fixed_weights() {
        // Cognitive 70, emotional 50 -> 0.4*70 + 0.6*50 = 58; x1.2 = 69.6.
        let engine = MosaicEngine::default();
        let cognitive = cognitive_with_percentile(70.0);
        let emotional = emotional_with_mean(0.0, 3); // mean 0 maps to 50

        let mosaic = engine
            .generate(
                ChildId::new(),
                Some(&cognitive),
                Some(&emotional),
                Some(&multiplier(1.2)),
                &catalogue(),
                &[],
                1,
            )
            .unwrap();

        assert!((mosaic.raw_combined_score.unwrap() - 58.0).abs() < 1e-9);
        assert!((mosaic.true_potential_score.unwrap() - 69.6).abs() < 1e-9);
        assert!(mosaic.true_potential_percentile.unwrap() > 50.0);
    }

    #[test]
    fn no_profiles_is_data_incomplete() {
        let engine = MosaicEngine::default();
        let err = engine
            .generate(ChildId::new(), None, None, None, &catalogue(), &[], 1)
            .unwrap_err();
        assert!(matches!(err, EngineError::DataIncomplete(_)));
    }

    #[test]
    fn single_profile_degrades_instead_of_failing() {
        let engine = MosaicEngine::default();
        let emotional = emotional_with_mean(20.0, 2);

        let mosaic = engine
            .generate(
                ChildId::new(),
                None,
                Some(&emotional),
                None,
                &catalogue(),
                &[],
                1,
            )
            .unwrap();

        assert!(mosaic.raw_cognitive_score.is_none());
        let emotional_score = mosaic.raw_emotional_score.unwrap();
        assert!((mosaic.raw_combined_score.unwrap() - emotional_score).abs() < 1e-9);
        // Missing cognitive data halves the confidence basis.
        assert!(mosaic.confidence_level < 0.5);
    }

    #[test]
    fn confidence_grows_with_coverage() {
        let engine = MosaicEngine::default();
        assert!(engine.confidence(5, 5) > engine.confidence(2, 5));
        assert!(engine.confidence(5, 5) > engine.confidence(5, 1));
        assert!((engine.confidence(5, 5) - 1.0).abs() < f64::EPSILON);
        assert!(engine.confidence(0, 0) >= 0.1);
    }

    #[test]
    fn missing_context_means_multiplier_one() {
        let engine = MosaicEngine::default();
        let cognitive = cognitive_with_percentile(60.0);
        let mosaic = engine
            .generate(
                ChildId::new(),
                Some(&cognitive),
                None,
                None,
                &catalogue(),
                &[],
                1,
            )
            .unwrap();
        assert!((mosaic.adversity_multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn archetype_ranks_and_primaries_are_assigned() {
        let engine = MosaicEngine::default();
        let cognitive = cognitive_with_percentile(80.0);
        let emotional = emotional_with_mean(40.0, 4);

        let mosaic = engine
            .generate(
                ChildId::new(),
                Some(&cognitive),
                Some(&emotional),
                None,
                &catalogue(),
                &[],
                2,
            )
            .unwrap();

        let ranks: Vec<u32> = mosaic.archetype_matches.iter().map(|m| m.match_rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(
            mosaic.primary_archetype.unwrap(),
            mosaic.archetype_matches[0].archetype_type
        );
        assert_eq!(
            mosaic.secondary_archetype.unwrap(),
            mosaic.archetype_matches[1].archetype_type
        );
        assert_eq!(mosaic.version, 2);
    }

    #[test]
    fn empty_catalogue_is_content_unavailable() {
        let engine = MosaicEngine::default();
        let cognitive = cognitive_with_percentile(60.0);
        let err = engine
            .generate(ChildId::new(), Some(&cognitive), None, None, &[], &[], 1)
            .unwrap_err();
        assert!(matches!(err, EngineError::ContentUnavailable(_)));
    }
}
