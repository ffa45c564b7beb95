//! The adaptive test session driver.
//!
//! `AdaptiveTester` is stateless; it transforms a `CognitiveAssessment`
//! record plus the domain's item pool into the next record state. Callers
//! persist the record between steps.

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info};

use mosaic_irt::{percentile_from_z, theta_to_raw_score};
use mosaic_types::{
    AssessmentId, AssessmentStatus, ChildId, CognitiveAssessment, CognitiveDomain, EngineError,
    EngineResult, ItemResponse, ResponseRecord, StoppingReason, TestItem,
};

use crate::config::AdaptiveConfig;
use crate::estimator::estimate_ability;
use crate::selector::{params_of, select_item};

/// Result of one response submission.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    pub is_correct: bool,
    pub new_theta: f64,
    pub new_se: f64,
    pub is_complete: bool,
    pub stopping_reason: Option<StoppingReason>,
    /// The next item to administer; `None` once the session is complete.
    pub next_item: Option<TestItem>,
}

/// Stateless driver for adaptive test sessions.
#[derive(Clone, Debug, Default)]
pub struct AdaptiveTester {
    config: AdaptiveConfig,
}

impl AdaptiveTester {
    pub fn new(config: AdaptiveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    /// Start a session: create the assessment record and pick the first
    /// item by maximum information at the initial ability estimate.
    ///
    /// Fails with `ContentUnavailable` when the pool holds no
    /// age-eligible item for the domain.
    pub fn start(
        &self,
        child_id: ChildId,
        domain: CognitiveDomain,
        age_months: u32,
        pool: &[TestItem],
    ) -> EngineResult<(CognitiveAssessment, TestItem)> {
        let first = select_item(
            self.config.initial_theta,
            age_months,
            pool,
            &HashSet::new(),
            self.config.age_slack_months,
        )
        .ok_or_else(|| {
            EngineError::ContentUnavailable(format!(
                "no eligible items for domain {domain} at age {age_months} months"
            ))
        })?;

        let assessment = CognitiveAssessment {
            id: AssessmentId::new(),
            child_id,
            domain,
            age_months,
            status: AssessmentStatus::InProgress,
            ability_estimate: self.config.initial_theta,
            standard_error: self.config.initial_se,
            items_administered: 0,
            history: Vec::new(),
            stopping_reason: None,
            raw_score: None,
            percentile: None,
            started_at: Utc::now(),
            completed_at: None,
        };

        info!(
            assessment = %assessment.id,
            %domain,
            age_months,
            "started adaptive assessment"
        );

        Ok((assessment, first.clone()))
    }

    /// Record a response: re-estimate ability over the full history,
    /// append the response record, apply the stopping rule and select the
    /// next item at the updated estimate.
    pub fn respond(
        &self,
        assessment: &mut CognitiveAssessment,
        item: &TestItem,
        response: ItemResponse,
        reaction_time_ms: u32,
        pool: &[TestItem],
    ) -> EngineResult<StepOutcome> {
        if assessment.status != AssessmentStatus::InProgress {
            return Err(EngineError::Validation(format!(
                "assessment {} is not in progress",
                assessment.id
            )));
        }
        if item.domain != assessment.domain {
            return Err(EngineError::Validation(format!(
                "item {} belongs to domain {}, assessment targets {}",
                item.id, item.domain, assessment.domain
            )));
        }
        if assessment.history.iter().any(|r| r.item_id == item.id) {
            return Err(EngineError::Validation(format!(
                "item {} was already administered in this session",
                item.id
            )));
        }

        let is_correct = item.content.correct_answer.matches(&response);

        // Rebuild the (params, correctness) history including this response.
        let mut history = Vec::with_capacity(assessment.history.len() + 1);
        for record in &assessment.history {
            let prior = pool.iter().find(|i| i.id == record.item_id).ok_or_else(|| {
                EngineError::ContentUnavailable(format!(
                    "administered item {} missing from pool",
                    record.item_id
                ))
            })?;
            history.push((params_of(prior), record.is_correct));
        }
        history.push((params_of(item), is_correct));

        let theta_before = assessment.ability_estimate;
        let se_before = assessment.standard_error;
        let (theta_after, se_after) = estimate_ability(&history, theta_before, &self.config);

        let sequence = assessment.items_administered + 1;
        assessment.history.push(ResponseRecord {
            item_id: item.id.clone(),
            response,
            is_correct,
            reaction_time_ms,
            theta_before,
            theta_after,
            se_before,
            se_after,
            sequence,
        });
        assessment.ability_estimate = theta_after;
        assessment.standard_error = se_after;
        assessment.items_administered = sequence;

        debug!(
            assessment = %assessment.id,
            sequence,
            is_correct,
            theta = theta_after,
            se = se_after,
            "recorded adaptive response"
        );

        // Stopping rule.
        let mut stopping_reason = if sequence >= self.config.max_items {
            Some(StoppingReason::MaxItems)
        } else if sequence >= self.config.min_items && se_after <= self.config.target_se {
            Some(StoppingReason::TargetPrecision)
        } else {
            None
        };

        let mut next_item = None;
        if stopping_reason.is_none() {
            let used: HashSet<_> = assessment
                .administered_items()
                .into_iter()
                .cloned()
                .collect();
            match select_item(
                theta_after,
                assessment.age_months,
                pool,
                &used,
                self.config.age_slack_months,
            ) {
                Some(item) => next_item = Some(item.clone()),
                // Content exhausted: complete rather than repeat an item.
                None => stopping_reason = Some(StoppingReason::ItemPoolExhausted),
            }
        }

        if let Some(reason) = stopping_reason {
            self.complete(assessment, reason);
        }

        Ok(StepOutcome {
            is_correct,
            new_theta: theta_after,
            new_se: se_after,
            is_complete: stopping_reason.is_some(),
            stopping_reason,
            next_item,
        })
    }

    /// Cancel an in-progress session. The assessment finalizes as
    /// abandoned and contributes nothing to the profile.
    pub fn cancel(&self, assessment: &mut CognitiveAssessment) -> EngineResult<()> {
        if assessment.status != AssessmentStatus::InProgress {
            return Err(EngineError::Validation(format!(
                "assessment {} is not in progress",
                assessment.id
            )));
        }
        assessment.status = AssessmentStatus::Abandoned;
        assessment.stopping_reason = Some(StoppingReason::Cancelled);
        assessment.completed_at = Some(Utc::now());
        info!(assessment = %assessment.id, "adaptive assessment cancelled");
        Ok(())
    }

    fn complete(&self, assessment: &mut CognitiveAssessment, reason: StoppingReason) {
        assessment.status = AssessmentStatus::Completed;
        assessment.stopping_reason = Some(reason);
        assessment.raw_score = Some(theta_to_raw_score(assessment.ability_estimate));
        assessment.percentile = Some(percentile_from_z(assessment.ability_estimate));
        assessment.completed_at = Some(Utc::now());

        info!(
            assessment = %assessment.id,
            theta = assessment.ability_estimate,
            se = assessment.standard_error,
            items = assessment.items_administered,
            reason = ?reason,
            "completed adaptive assessment"
        );
    }
}
