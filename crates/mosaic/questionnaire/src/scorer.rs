//! Domain scoring and risk classification.

use chrono::Utc;
use tracing::info;

use mosaic_irt::percentile_from_z;
use mosaic_types::{
    ChildId, CutoffBand, CutoffTable, DomainScore, EngineError, EngineResult,
    QuestionnaireDomain, QuestionnaireReport, QuestionnaireResponse, RiskLevel,
};

use crate::recommend::recommendations_for;

/// Items per questionnaire domain.
pub const ITEMS_PER_DOMAIN: usize = 6;
/// Total responses a complete questionnaire carries.
pub const TOTAL_ITEMS: usize = 30;

/// Maximum raw score per domain (6 items x 10 points).
const MAX_DOMAIN_SCORE: u32 = 60;

/// Classify one domain raw score against its cutoff band.
///
/// At or above the monitoring cutoff is typical; at or above the at-risk
/// cutoff is the monitoring zone; below the at-risk cutoff is a concern.
pub fn classify_domain(raw_score: u32, band: &CutoffBand) -> RiskLevel {
    let score = raw_score as f64;
    if score >= band.monitoring_cutoff {
        RiskLevel::Typical
    } else if score >= band.at_risk_cutoff {
        RiskLevel::Monitoring
    } else {
        RiskLevel::Concern
    }
}

/// Score a complete questionnaire.
///
/// Requires exactly 30 responses, 6 per domain; anything else is a
/// validation failure with nothing persisted. Overall risk is the most
/// severe domain classification, so a single concern domain forces an
/// overall concern regardless of the rest.
pub fn score_questionnaire(
    child_id: ChildId,
    age_months: u32,
    responses: &[QuestionnaireResponse],
    table: &CutoffTable,
) -> EngineResult<QuestionnaireReport> {
    if responses.len() != TOTAL_ITEMS {
        return Err(EngineError::Validation(format!(
            "incomplete response set: expected {TOTAL_ITEMS} responses, got {}",
            responses.len()
        )));
    }

    let mut domain_scores = Vec::with_capacity(QuestionnaireDomain::ALL.len());
    for domain in QuestionnaireDomain::ALL {
        let domain_responses: Vec<_> =
            responses.iter().filter(|r| r.domain == domain).collect();
        if domain_responses.len() != ITEMS_PER_DOMAIN {
            return Err(EngineError::Validation(format!(
                "domain {domain} has {} responses, expected {ITEMS_PER_DOMAIN}",
                domain_responses.len()
            )));
        }

        let raw_score: u32 = domain_responses.iter().map(|r| r.response.score()).sum();
        let band = table.lookup(age_months, domain)?;
        band.validate()?;

        let risk_level = classify_domain(raw_score, &band);
        let z_score = (raw_score as f64 - band.mean) / band.std_dev;

        domain_scores.push(DomainScore {
            domain,
            raw_score,
            max_score: MAX_DOMAIN_SCORE,
            percentile: percentile_from_z(z_score),
            z_score,
            risk_level,
            at_risk_cutoff: band.at_risk_cutoff,
            monitoring_cutoff: band.monitoring_cutoff,
        });
    }

    let overall_risk = domain_scores
        .iter()
        .map(|s| s.risk_level)
        .max()
        .unwrap_or(RiskLevel::Typical);

    let recommendations = recommendations_for(&domain_scores);

    info!(
        child = %child_id,
        age_months,
        overall = %overall_risk,
        "scored questionnaire"
    );

    Ok(QuestionnaireReport {
        child_id,
        age_months,
        domain_scores,
        overall_risk,
        recommendations,
        scored_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_types::ResponseValue;

    fn band(at_risk: f64, monitoring: f64) -> CutoffBand {
        CutoffBand {
            at_risk_cutoff: at_risk,
            monitoring_cutoff: monitoring,
            mean: 41.4,
            std_dev: 12.88,
        }
    }

    fn table() -> CutoffTable {
        let mut table = CutoffTable::new();
        for domain in QuestionnaireDomain::ALL {
            table.insert(18, domain, band(25.0, 39.0));
        }
        table
    }

    /// Build a full 30-response set with a fixed per-domain raw score.
    /// `score` must be expressible with 6 items of 0/5/10.
    fn responses_scoring(per_domain: [u32; 5]) -> Vec<QuestionnaireResponse> {
        QuestionnaireDomain::ALL
            .iter()
            .zip(per_domain)
            .flat_map(|(&domain, target)| {
                // Greedy fill: tens, then one five, then zeros.
                let tens = (target / 10).min(6);
                let five = u32::from(target % 10 >= 5);
                (0..6).map(move |i| {
                    let response = if (i as u32) < tens {
                        ResponseValue::Yes
                    } else if (i as u32) < tens + five {
                        ResponseValue::Sometimes
                    } else {
                        ResponseValue::NotYet
                    };
                    QuestionnaireResponse {
                        item_id: format!("{domain}-{}", i + 1),
                        domain,
                        response,
                    }
                })
            })
            .collect()
    }

    #[test]
    fn classification_boundaries() {
        let band = band(25.0, 39.0);
        assert_eq!(classify_domain(45, &band), RiskLevel::Typical);
        assert_eq!(classify_domain(39, &band), RiskLevel::Typical);
        assert_eq!(classify_domain(30, &band), RiskLevel::Monitoring);
        assert_eq!(classify_domain(25, &band), RiskLevel::Monitoring);
        assert_eq!(classify_domain(20, &band), RiskLevel::Concern);
    }

    #[test]
    fn incomplete_set_is_rejected() {
        let mut responses = responses_scoring([45, 45, 45, 45, 45]);
        responses.pop();
        let err =
            score_questionnaire(ChildId::new(), 18, &responses, &table()).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn lopsided_domains_are_rejected() {
        let mut responses = responses_scoring([45, 45, 45, 45, 45]);
        // Move one response from the last domain into the first.
        responses[29].domain = QuestionnaireDomain::Communication;
        let err =
            score_questionnaire(ChildId::new(), 18, &responses, &table()).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn typical_across_the_board() {
        let report = score_questionnaire(
            ChildId::new(),
            18,
            &responses_scoring([45, 45, 45, 45, 45]),
            &table(),
        )
        .unwrap();
        assert_eq!(report.overall_risk, RiskLevel::Typical);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn monitoring_domain_raises_overall() {
        let report = score_questionnaire(
            ChildId::new(),
            18,
            &responses_scoring([30, 60, 60, 60, 60]),
            &table(),
        )
        .unwrap();
        assert_eq!(report.domain_scores[0].risk_level, RiskLevel::Monitoring);
        assert_eq!(report.overall_risk, RiskLevel::Monitoring);
    }

    #[test]
    fn single_concern_domain_forces_overall_concern() {
        let report = score_questionnaire(
            ChildId::new(),
            18,
            &responses_scoring([20, 60, 60, 60, 60]),
            &table(),
        )
        .unwrap();
        assert_eq!(report.domain_scores[0].risk_level, RiskLevel::Concern);
        assert_eq!(report.overall_risk, RiskLevel::Concern);
    }

    #[test]
    fn scoring_is_deterministic() {
        let responses = responses_scoring([20, 35, 45, 60, 30]);
        let a = score_questionnaire(ChildId::new(), 18, &responses, &table()).unwrap();
        let b = score_questionnaire(ChildId::new(), 18, &responses, &table()).unwrap();

        assert_eq!(a.overall_risk, b.overall_risk);
        for (x, y) in a.domain_scores.iter().zip(&b.domain_scores) {
            assert_eq!(x.raw_score, y.raw_score);
            assert_eq!(x.risk_level, y.risk_level);
            assert!((x.percentile - y.percentile).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn percentile_tracks_z_score() {
        let report = score_questionnaire(
            ChildId::new(),
            18,
            &responses_scoring([45, 45, 45, 45, 45]),
            &table(),
        )
        .unwrap();
        let score = &report.domain_scores[0];
        // 45 sits above the mean of 41.4, so the percentile exceeds 50.
        assert!(score.z_score > 0.0);
        assert!(score.percentile > 50.0);
    }
}
