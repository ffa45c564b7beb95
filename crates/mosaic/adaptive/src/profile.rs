//! Cognitive profile aggregation after a completed domain test.

use chrono::Utc;

use mosaic_irt::percentile_from_z;
use mosaic_types::{CognitiveDomain, CognitiveProfile, DomainEstimate};

/// Fold a completed domain test into the profile: store the domain
/// estimate, refresh the composite, and recompute strengths and growth
/// areas as the top and bottom tertile of attempted-domain percentiles.
pub fn apply_completed_domain(
    profile: &mut CognitiveProfile,
    domain: CognitiveDomain,
    theta: f64,
    percentile: f64,
) {
    profile.domains.insert(
        domain,
        DomainEstimate {
            score: theta,
            percentile,
        },
    );

    let n = profile.domains.len();
    let composite = profile.domains.values().map(|d| d.score).sum::<f64>() / n as f64;
    profile.composite_score = Some(composite);
    profile.composite_percentile = Some(percentile_from_z(composite));

    if n >= 2 {
        let mut ranked: Vec<(CognitiveDomain, f64)> = profile
            .domains
            .iter()
            .map(|(d, est)| (*d, est.percentile))
            .collect();
        // Descending by percentile; BTreeMap iteration keeps ties stable.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let tertile = n.div_ceil(3);
        profile.strengths = ranked.iter().take(tertile).map(|(d, _)| *d).collect();
        profile.growth_areas = ranked
            .iter()
            .rev()
            .take(tertile)
            .map(|(d, _)| *d)
            .collect();
    } else {
        profile.strengths.clear();
        profile.growth_areas.clear();
    }

    profile.last_updated_at = Utc::now();
}
