//! Follow-up recommendations derived from domain classifications.

use mosaic_types::{DomainScore, Priority, Recommendation, RecommendationKind, RiskLevel};

fn display_name(score: &DomainScore) -> String {
    score
        .domain
        .label()
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One recommendation per non-typical domain: referral for concern-level
/// scores, continued monitoring for the monitoring zone.
pub fn recommendations_for(domain_scores: &[DomainScore]) -> Vec<Recommendation> {
    domain_scores
        .iter()
        .filter_map(|score| match score.risk_level {
            RiskLevel::Concern | RiskLevel::AtRisk => Some(Recommendation {
                domain: score.domain,
                kind: RecommendationKind::Referral,
                priority: Priority::High,
                title: format!(
                    "Further evaluation recommended for {}",
                    display_name(score)
                ),
                description: format!(
                    "Score of {} is below the cutoff of {}. Professional evaluation \
                     is recommended.",
                    score.raw_score, score.at_risk_cutoff
                ),
            }),
            RiskLevel::Monitoring => Some(Recommendation {
                domain: score.domain,
                kind: RecommendationKind::Monitoring,
                priority: Priority::Medium,
                title: format!("Monitor {} development", display_name(score)),
                description: format!(
                    "Score of {} is in the monitoring zone. Continue with suggested \
                     activities and reassess in 2-3 months.",
                    score.raw_score
                ),
            }),
            RiskLevel::Typical => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_types::QuestionnaireDomain;

    fn score(domain: QuestionnaireDomain, raw: u32, risk: RiskLevel) -> DomainScore {
        DomainScore {
            domain,
            raw_score: raw,
            max_score: 60,
            percentile: 50.0,
            z_score: 0.0,
            risk_level: risk,
            at_risk_cutoff: 25.0,
            monitoring_cutoff: 39.0,
        }
    }

    #[test]
    fn typical_domains_produce_nothing() {
        let scores = vec![score(QuestionnaireDomain::Communication, 50, RiskLevel::Typical)];
        assert!(recommendations_for(&scores).is_empty());
    }

    #[test]
    fn concern_gets_high_priority_referral() {
        let scores = vec![score(QuestionnaireDomain::GrossMotor, 18, RiskLevel::Concern)];
        let recs = recommendations_for(&scores);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].kind, RecommendationKind::Referral);
        assert_eq!(recs[0].priority, Priority::High);
        assert!(recs[0].title.contains("Gross Motor"));
    }

    #[test]
    fn monitoring_gets_medium_priority() {
        let scores = vec![score(
            QuestionnaireDomain::ProblemSolving,
            30,
            RiskLevel::Monitoring,
        )];
        let recs = recommendations_for(&scores);
        assert_eq!(recs[0].kind, RecommendationKind::Monitoring);
        assert_eq!(recs[0].priority, Priority::Medium);
    }
}
