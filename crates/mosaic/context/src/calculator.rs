//! The adversity multiplier calculation.

use chrono::Utc;
use tracing::{debug, info};

use mosaic_types::{ChildId, ContextMultiplier, FamilyContext, OpportunityIndex};

use crate::config::ContextConfig;
use crate::ses::socio_economic_status;

/// Derive the context multiplier for a child.
///
/// `gap_score = opportunity_index - socio_econ_status`; only a positive
/// gap (high surrounding opportunity, low family status) raises the
/// multiplier, clamped to the configured band. The multiplier stays at
/// exactly `min_multiplier` (1.0) when either input is missing or the
/// family context is too sparse to trust.
pub fn calculate_multiplier(
    child_id: ChildId,
    family: Option<&FamilyContext>,
    opportunity: Option<&OpportunityIndex>,
    config: &ContextConfig,
) -> ContextMultiplier {
    let data_completeness = family
        .map(|f| f.filled_fields() as f64 / FamilyContext::FIELD_COUNT as f64)
        .unwrap_or(0.0);

    let ses = family.map(socio_economic_status);
    let opportunity_index = opportunity.map(|o| o.opportunity_index);

    let complete_enough = data_completeness >= config.completeness_floor;
    let (gap_score, adversity_multiplier) = match (opportunity_index, ses) {
        (Some(opportunity), Some(ses)) if complete_enough => {
            let gap = opportunity - ses;
            let multiplier = (config.min_multiplier
                + config.max_adversity_bonus * gap.max(0.0))
            .clamp(config.min_multiplier, config.max_multiplier);
            (Some(gap), multiplier)
        }
        // Missing or untrustworthy inputs: never extrapolate.
        _ => {
            debug!(
                child = %child_id,
                data_completeness,
                "context data incomplete; multiplier defaults to minimum"
            );
            (None, config.min_multiplier)
        }
    };

    info!(
        child = %child_id,
        multiplier = adversity_multiplier,
        completeness = data_completeness,
        "calculated context multiplier"
    );

    ContextMultiplier {
        child_id,
        opportunity_index,
        socio_econ_status: ses,
        gap_score,
        adversity_multiplier,
        data_completeness,
        calculated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_types::{EducationLevel, IncomeBracket};

    fn rich_context() -> FamilyContext {
        FamilyContext {
            zip_code: Some("30310".into()),
            household_size: Some(4),
            parent_education: Some(EducationLevel::HighSchool),
            income_bracket: Some(IncomeBracket::Under25k),
            single_parent: Some(false),
            languages_spoken: Some(1),
            receives_assistance: Some(false),
            childcare_type: Some("family".into()),
            screen_time_hours_daily: Some(2.0),
            books_in_home: Some(10),
        }
    }

    fn opportunity(index: f64) -> OpportunityIndex {
        OpportunityIndex {
            zip_code: "30310".into(),
            opportunity_index: index,
            key_industries: vec!["Technology".into()],
            is_estimated: false,
        }
    }

    #[test]
    fn positive_gap_raises_multiplier() {
        let config = ContextConfig::default();
        let result = calculate_multiplier(
            ChildId::new(),
            Some(&rich_context()),
            Some(&opportunity(0.8)),
            &config,
        );
        assert!(result.adversity_multiplier > 1.0);
        assert!(result.adversity_multiplier <= 1.5);
        assert!(result.gap_score.unwrap() > 0.0);
    }

    #[test]
    fn non_positive_gap_yields_exactly_one() {
        let config = ContextConfig::default();
        let mut context = rich_context();
        context.income_bracket = Some(IncomeBracket::Over200k);
        context.parent_education = Some(EducationLevel::Doctorate);

        let result = calculate_multiplier(
            ChildId::new(),
            Some(&context),
            Some(&opportunity(0.2)),
            &config,
        );
        assert!(result.gap_score.unwrap() <= 0.0);
        assert!((result.adversity_multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn multiplier_is_always_in_band() {
        let config = ContextConfig::default();
        for opp in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let result = calculate_multiplier(
                ChildId::new(),
                Some(&rich_context()),
                Some(&opportunity(opp)),
                &config,
            );
            assert!(
                (1.0..=1.5).contains(&result.adversity_multiplier),
                "multiplier out of band for opportunity {opp}"
            );
        }
    }

    #[test]
    fn missing_opportunity_defaults_to_one() {
        let config = ContextConfig::default();
        let result =
            calculate_multiplier(ChildId::new(), Some(&rich_context()), None, &config);
        assert!((result.adversity_multiplier - 1.0).abs() < f64::EPSILON);
        assert!(result.gap_score.is_none());
    }

    #[test]
    fn sparse_context_defaults_to_one() {
        let config = ContextConfig::default();
        // Only 2 of 10 fields: below the 0.4 floor.
        let sparse = FamilyContext {
            zip_code: Some("30310".into()),
            income_bracket: Some(IncomeBracket::Under25k),
            ..Default::default()
        };
        let result = calculate_multiplier(
            ChildId::new(),
            Some(&sparse),
            Some(&opportunity(0.9)),
            &config,
        );
        assert!((result.adversity_multiplier - 1.0).abs() < f64::EPSILON);
        assert!((result.data_completeness - 0.2).abs() < 1e-9);
    }

    #[test]
    fn no_context_at_all_defaults_to_one() {
        let config = ContextConfig::default();
        let result = calculate_multiplier(ChildId::new(), None, None, &config);
        assert!((result.adversity_multiplier - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.data_completeness, 0.0);
        assert!(result.socio_econ_status.is_none());
    }
}
