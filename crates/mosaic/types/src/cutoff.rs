//! Age- and domain-specific questionnaire cutoff reference data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domains::QuestionnaireDomain;
use crate::error::{EngineError, EngineResult};

/// Cutoffs and normative distribution for one (age, domain) cell.
///
/// Invariant: `at_risk_cutoff < monitoring_cutoff <= 60`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CutoffBand {
    /// Below this score the domain classifies as a concern.
    pub at_risk_cutoff: f64,
    /// Below this score (but at or above `at_risk_cutoff`) the domain
    /// classifies as monitoring.
    pub monitoring_cutoff: f64,
    /// Normative mean for z-score percentiles.
    pub mean: f64,
    /// Normative standard deviation for z-score percentiles.
    pub std_dev: f64,
}

impl CutoffBand {
    /// Check the band invariant.
    pub fn validate(&self) -> EngineResult<()> {
        if self.at_risk_cutoff >= self.monitoring_cutoff || self.monitoring_cutoff > 60.0 {
            return Err(EngineError::ContentUnavailable(format!(
                "invalid cutoff band: at_risk={} monitoring={}",
                self.at_risk_cutoff, self.monitoring_cutoff
            )));
        }
        Ok(())
    }
}

/// The full cutoff table, keyed by (age interval in months, domain).
/// Static reference data owned by the content store.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CutoffTable {
    entries: BTreeMap<(u32, QuestionnaireDomain), CutoffBand>,
}

impl CutoffTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a band for an (age, domain) cell.
    pub fn insert(&mut self, age_months: u32, domain: QuestionnaireDomain, band: CutoffBand) {
        self.entries.insert((age_months, domain), band);
    }

    /// The distinct age intervals the table defines, ascending.
    pub fn age_intervals(&self) -> Vec<u32> {
        let mut ages: Vec<u32> = self.entries.keys().map(|(age, _)| *age).collect();
        ages.dedup();
        ages
    }

    /// Look up the band for an age and domain.
    ///
    /// Uses an exact age match when one exists, otherwise the nearest
    /// defined interval, with ties broken toward the younger interval.
    pub fn lookup(&self, age_months: u32, domain: QuestionnaireDomain) -> EngineResult<CutoffBand> {
        if let Some(band) = self.entries.get(&(age_months, domain)) {
            return Ok(*band);
        }

        let nearest = self
            .age_intervals()
            .into_iter()
            .min_by_key(|&age| {
                let distance = age_months.abs_diff(age);
                // Tie-break toward the younger interval.
                (distance, age)
            })
            .ok_or_else(|| {
                EngineError::ContentUnavailable("cutoff table is empty".into())
            })?;

        self.entries
            .get(&(nearest, domain))
            .copied()
            .ok_or_else(|| {
                EngineError::ContentUnavailable(format!(
                    "no cutoff band for age {nearest} months, domain {domain}"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(at_risk: f64, monitoring: f64) -> CutoffBand {
        CutoffBand {
            at_risk_cutoff: at_risk,
            monitoring_cutoff: monitoring,
            mean: 48.0,
            std_dev: 12.0,
        }
    }

    fn table_with_ages(ages: &[u32]) -> CutoffTable {
        let mut table = CutoffTable::new();
        for &age in ages {
            table.insert(age, QuestionnaireDomain::Communication, band(20.0, 35.0));
        }
        table
    }

    #[test]
    fn exact_match_wins() {
        let table = table_with_ages(&[12, 24]);
        let found = table.lookup(24, QuestionnaireDomain::Communication).unwrap();
        assert!((found.at_risk_cutoff - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nearest_interval_rounds() {
        let table = table_with_ages(&[12, 24]);
        // 16 is nearer to 12 than 24.
        assert!(table.lookup(16, QuestionnaireDomain::Communication).is_ok());
        // Equidistant: 18 is 6 from both; younger interval wins.
        let intervals = table.age_intervals();
        assert_eq!(intervals, vec![12, 24]);
        let nearest = intervals
            .into_iter()
            .min_by_key(|&age| (18u32.abs_diff(age), age))
            .unwrap();
        assert_eq!(nearest, 12);
    }

    #[test]
    fn missing_domain_is_content_error() {
        let table = table_with_ages(&[12]);
        let err = table.lookup(12, QuestionnaireDomain::GrossMotor).unwrap_err();
        assert!(matches!(err, EngineError::ContentUnavailable(_)));
    }

    #[test]
    fn invalid_band_rejected() {
        assert!(band(40.0, 30.0).validate().is_err());
        assert!(band(20.0, 35.0).validate().is_ok());
    }
}
