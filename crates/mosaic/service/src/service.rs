//! The assessment service.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use mosaic_adaptive::{apply_completed_domain, AdaptiveConfig, AdaptiveTester};
use mosaic_behavioral::{
    abandon_session, apply_session, finalize_session, weight_deltas, BehavioralConfig,
};
use mosaic_composite::{CompositeConfig, MosaicEngine};
use mosaic_context::{calculate_multiplier, ContextConfig};
use mosaic_questionnaire::score_questionnaire;
use mosaic_store::{ContentStore, ContextProvider, ProfileStore};
use mosaic_types::{
    AssessmentId, AssessmentStatus, BehavioralSession, ChildId, ChoiceRecord,
    CognitiveAssessment, CognitiveProfile, ConsentCategory, ContextMultiplier,
    EmotionalProfile, EngineError, EngineResult, FamilyContext, MosaicAssessment,
    OpportunityIndex, QuestionnaireReport, SessionId, SessionStatus,
};

use crate::requests::{
    GenerateMosaic, GenerateMosaicResponse, ScoreQuestionnaire, StartAdaptiveTest,
    StartAdaptiveTestResponse, StartBehavioralSession, StartBehavioralSessionResponse,
    SubmitAdaptiveResponse, SubmitAdaptiveResponseResponse, SubmitBehavioralChoice,
    SubmitBehavioralChoiceResponse,
};

/// Oldest supported screening age, in months.
const MAX_AGE_MONTHS: u32 = 72;

/// The engine's operation surface over injected collaborators.
pub struct AssessmentService {
    content: Arc<dyn ContentStore>,
    profiles: Arc<dyn ProfileStore>,
    context: Arc<dyn ContextProvider>,
    tester: AdaptiveTester,
    behavioral_config: BehavioralConfig,
    context_config: ContextConfig,
    engine: MosaicEngine,
}

impl AssessmentService {
    pub fn new(
        content: Arc<dyn ContentStore>,
        profiles: Arc<dyn ProfileStore>,
        context: Arc<dyn ContextProvider>,
    ) -> Self {
        Self {
            content,
            profiles,
            context,
            tester: AdaptiveTester::new(AdaptiveConfig::default()),
            behavioral_config: BehavioralConfig::default(),
            context_config: ContextConfig::default(),
            engine: MosaicEngine::new(CompositeConfig::default()),
        }
    }

    fn validate_age(age_months: u32) -> EngineResult<()> {
        if age_months == 0 || age_months > MAX_AGE_MONTHS {
            return Err(EngineError::Validation(format!(
                "age {age_months} months is outside the supported range 1..={MAX_AGE_MONTHS}"
            )));
        }
        Ok(())
    }

    // ── Adaptive Testing ───────────────────────────────────────────────

    /// Start an adaptive test for a (child, domain) pair.
    pub async fn start_adaptive_test(
        &self,
        request: StartAdaptiveTest,
    ) -> EngineResult<StartAdaptiveTestResponse> {
        Self::validate_age(request.age_months)?;

        let pool = self.content.domain_items(request.domain).await?;
        let (assessment, first_item) = self.tester.start(
            request.child_id,
            request.domain,
            request.age_months,
            &pool,
        )?;

        self.profiles.save_assessment(&assessment).await?;

        Ok(StartAdaptiveTestResponse {
            assessment_id: assessment.id,
            first_item,
        })
    }

    /// Record one response; completes the session and folds the result
    /// into the cognitive profile when a stopping rule fires.
    pub async fn submit_adaptive_response(
        &self,
        request: SubmitAdaptiveResponse,
    ) -> EngineResult<SubmitAdaptiveResponseResponse> {
        let mut assessment = self
            .profiles
            .assessment(&request.assessment_id)
            .await?
            .ok_or_else(|| {
                EngineError::Validation(format!(
                    "unknown assessment {}",
                    request.assessment_id
                ))
            })?;

        let item = self.content.item(&request.item_id).await?;
        let pool = self.content.domain_items(assessment.domain).await?;

        let outcome = self.tester.respond(
            &mut assessment,
            &item,
            request.response,
            request.reaction_time_ms,
            &pool,
        )?;

        self.profiles.save_assessment(&assessment).await?;

        if assessment.status == AssessmentStatus::Completed {
            self.fold_completed_assessment(&assessment).await?;
        }

        Ok(SubmitAdaptiveResponseResponse {
            is_correct: outcome.is_correct,
            new_theta: outcome.new_theta,
            new_se: outcome.new_se,
            is_complete: outcome.is_complete,
            stopping_reason: outcome.stopping_reason,
            next_item: outcome.next_item,
        })
    }

    /// Cancel an in-progress test. The session finalizes as abandoned and
    /// never touches the profile.
    pub async fn cancel_adaptive_test(&self, assessment_id: &AssessmentId) -> EngineResult<()> {
        let mut assessment = self
            .profiles
            .assessment(assessment_id)
            .await?
            .ok_or_else(|| {
                EngineError::Validation(format!("unknown assessment {assessment_id}"))
            })?;
        self.tester.cancel(&mut assessment)?;
        self.profiles.save_assessment(&assessment).await
    }

    /// Fetch an assessment record.
    pub async fn assessment(
        &self,
        assessment_id: &AssessmentId,
    ) -> EngineResult<Option<CognitiveAssessment>> {
        self.profiles.assessment(assessment_id).await
    }

    /// Update the cognitive profile from a completed assessment, retrying
    /// once on a version conflict with fresh reads.
    async fn fold_completed_assessment(
        &self,
        assessment: &CognitiveAssessment,
    ) -> EngineResult<()> {
        let percentile = assessment.percentile.ok_or_else(|| {
            EngineError::Validation(format!(
                "completed assessment {} carries no percentile",
                assessment.id
            ))
        })?;

        let mut attempt = 0;
        loop {
            let mut profile = self
                .profiles
                .cognitive_profile(&assessment.child_id)
                .await?
                .unwrap_or_else(|| CognitiveProfile::new(assessment.child_id.clone()));

            apply_completed_domain(
                &mut profile,
                assessment.domain,
                assessment.ability_estimate,
                percentile,
            );

            match self.profiles.save_cognitive_profile(&profile).await {
                Ok(_) => return Ok(()),
                Err(conflict @ EngineError::ConcurrencyConflict { .. }) => {
                    if attempt >= 1 {
                        return Err(conflict);
                    }
                    attempt += 1;
                    warn!(
                        child = %assessment.child_id,
                        "cognitive profile write conflicted; retrying with fresh read"
                    );
                }
                Err(other) => return Err(other),
            }
        }
    }

    // ── Questionnaire ──────────────────────────────────────────────────

    /// Score a complete 30-response questionnaire and persist the report.
    pub async fn score_questionnaire(
        &self,
        request: ScoreQuestionnaire,
    ) -> EngineResult<QuestionnaireReport> {
        Self::validate_age(request.age_months)?;

        let table = self.content.cutoff_table().await?;
        let report = score_questionnaire(
            request.child_id,
            request.age_months,
            &request.responses,
            &table,
        )?;

        self.profiles.save_questionnaire_report(&report).await?;
        Ok(report)
    }

    /// Past questionnaire reports for a child, newest first.
    pub async fn questionnaire_reports(
        &self,
        child: &ChildId,
    ) -> EngineResult<Vec<QuestionnaireReport>> {
        self.profiles.questionnaire_reports(child).await
    }

    // ── Behavioral Sessions ────────────────────────────────────────────

    /// Open a scenario session for a child.
    pub async fn start_behavioral_session(
        &self,
        request: StartBehavioralSession,
    ) -> EngineResult<StartBehavioralSessionResponse> {
        let scenario = self.content.scenario(&request.scenario_id).await?;

        let session = BehavioralSession {
            id: SessionId::new(),
            child_id: request.child_id,
            scenario_id: scenario.id.clone(),
            scenario_type: scenario.scenario_type,
            status: SessionStatus::InProgress,
            choices: Vec::new(),
            engagement_score: None,
            total_duration_ms: None,
            started_at: Utc::now(),
            completed_at: None,
        };
        self.profiles.save_session(&session).await?;

        info!(session = %session.id, scenario = %scenario.id, "started behavioral session");

        Ok(StartBehavioralSessionResponse {
            session_id: session.id,
            scenario,
        })
    }

    /// Record one scenario choice. When the last choice point resolves,
    /// the session finalizes and folds into the emotional profile.
    pub async fn submit_behavioral_choice(
        &self,
        request: SubmitBehavioralChoice,
    ) -> EngineResult<SubmitBehavioralChoiceResponse> {
        let mut session = self
            .profiles
            .session(&request.session_id)
            .await?
            .ok_or_else(|| {
                EngineError::Validation(format!("unknown session {}", request.session_id))
            })?;

        if session.status != SessionStatus::InProgress {
            return Err(EngineError::Validation(format!(
                "session {} is not in progress",
                session.id
            )));
        }

        let scenario = self.content.scenario(&session.scenario_id).await?;
        let choice = scenario
            .choices
            .iter()
            .find(|c| c.id == request.choice_id)
            .ok_or_else(|| {
                EngineError::Validation(format!("unknown choice {}", request.choice_id))
            })?;
        let option = choice
            .options
            .iter()
            .find(|o| o.id == request.option_id)
            .ok_or_else(|| {
                EngineError::Validation(format!(
                    "unknown option {} for choice {}",
                    request.option_id, request.choice_id
                ))
            })?;

        let weighted = weight_deltas(
            &option.dimension_deltas,
            request.reaction_time_ms,
            &self.behavioral_config,
        );

        let sequence = session.choices_made() + 1;
        session.choices.push(ChoiceRecord {
            choice_id: request.choice_id,
            selected_option: request.option_id,
            reaction_time_ms: request.reaction_time_ms,
            hesitation_count: request.hesitation_count,
            weighted_deltas: weighted.clone(),
            sequence,
        });

        let is_session_complete = session.choices_made() >= scenario.choices.len() as u32;
        let next_segment_id = if is_session_complete {
            None
        } else {
            option.next_segment_id.clone()
        };

        if is_session_complete {
            finalize_session(&mut session)?;
            self.fold_completed_session(&session).await?;
        }
        self.profiles.save_session(&session).await?;

        Ok(SubmitBehavioralChoiceResponse {
            recorded: true,
            weighted_deltas: weighted,
            next_segment_id,
            is_session_complete,
        })
    }

    /// Abandon an in-progress session before its terminal segment. The
    /// session never increments `sessions_completed` or moves a score.
    pub async fn abandon_behavioral_session(&self, session_id: &SessionId) -> EngineResult<()> {
        let mut session = self
            .profiles
            .session(session_id)
            .await?
            .ok_or_else(|| EngineError::Validation(format!("unknown session {session_id}")))?;
        abandon_session(&mut session)?;
        self.profiles.save_session(&session).await
    }

    /// Fold a finalized session into the emotional profile, retrying once
    /// on a version conflict with fresh reads.
    async fn fold_completed_session(&self, session: &BehavioralSession) -> EngineResult<()> {
        let mut attempt = 0;
        loop {
            let mut profile = self
                .profiles
                .emotional_profile(&session.child_id)
                .await?
                .unwrap_or_else(|| EmotionalProfile::new(session.child_id.clone()));

            apply_session(&mut profile, session, &self.behavioral_config)?;

            match self.profiles.save_emotional_profile(&profile).await {
                Ok(_) => return Ok(()),
                Err(conflict @ EngineError::ConcurrencyConflict { .. }) => {
                    if attempt >= 1 {
                        return Err(conflict);
                    }
                    attempt += 1;
                    warn!(
                        child = %session.child_id,
                        "emotional profile write conflicted; retrying with fresh read"
                    );
                }
                Err(other) => return Err(other),
            }
        }
    }

    // ── Mosaic Generation ──────────────────────────────────────────────

    /// Generate a new versioned Mosaic assessment for a child.
    ///
    /// Context is read only behind the caller's consent grants: the
    /// family context requires both the family-context and socioeconomic
    /// grants, the opportunity index additionally requires the location
    /// grant. Missing consent silently degrades to a 1.0 multiplier; a
    /// child with neither profile fails with `DataIncomplete`.
    pub async fn generate_mosaic(
        &self,
        request: GenerateMosaic,
    ) -> EngineResult<GenerateMosaicResponse> {
        let cognitive = self.profiles.cognitive_profile(&request.child_id).await?;
        let emotional = self.profiles.emotional_profile(&request.child_id).await?;

        let (context_multiplier, local_industries) = if request.include_context {
            self.read_consented_context(&request).await?
        } else {
            (None, Vec::new())
        };

        let archetypes = self.content.archetypes().await?;

        let mut attempt = 0;
        let mosaic = loop {
            let version = self
                .profiles
                .latest_mosaic(&request.child_id)
                .await?
                .map(|m| m.version + 1)
                .unwrap_or(1);

            let mosaic = self.engine.generate(
                request.child_id.clone(),
                cognitive.as_ref(),
                emotional.as_ref(),
                context_multiplier.as_ref(),
                &archetypes,
                &local_industries,
                version,
            )?;

            match self.profiles.append_mosaic(&mosaic).await {
                Ok(()) => break mosaic,
                Err(conflict @ EngineError::ConcurrencyConflict { .. }) => {
                    if attempt >= 1 {
                        return Err(conflict);
                    }
                    attempt += 1;
                    warn!(
                        child = %request.child_id,
                        "mosaic version conflicted; retrying with fresh version"
                    );
                }
                Err(other) => return Err(other),
            }
        };

        Ok(GenerateMosaicResponse {
            archetype_matches: mosaic.archetype_matches.clone(),
            gap_analysis: mosaic.gap_analysis.clone(),
            mosaic_assessment: mosaic,
        })
    }

    /// Read whatever context the caller's grants allow and derive the
    /// multiplier from it.
    async fn read_consented_context(
        &self,
        request: &GenerateMosaic,
    ) -> EngineResult<(Option<ContextMultiplier>, Vec<String>)> {
        let now = Utc::now();

        let family: Option<FamilyContext> = if request
            .consents
            .allows(ConsentCategory::FamilyContext, now)
            && request.consents.allows(ConsentCategory::Socioeconomic, now)
        {
            self.context.family_context(&request.child_id).await?
        } else {
            info!(child = %request.child_id, "family context not consented; skipping");
            None
        };

        let opportunity: Option<OpportunityIndex> = match family
            .as_ref()
            .and_then(|f| f.zip_code.clone())
        {
            Some(zip) if request.consents.allows(ConsentCategory::Location, now) => {
                Some(self.context.opportunity_index(&zip).await?)
            }
            Some(_) => {
                info!(child = %request.child_id, "location not consented; skipping opportunity index");
                None
            }
            None => None,
        };

        let local_industries = opportunity
            .as_ref()
            .map(|o| o.key_industries.clone())
            .unwrap_or_default();

        let multiplier = calculate_multiplier(
            request.child_id.clone(),
            family.as_ref(),
            opportunity.as_ref(),
            &self.context_config,
        );

        Ok((Some(multiplier), local_industries))
    }

    /// Latest Mosaic for a child, if any.
    pub async fn latest_mosaic(&self, child: &ChildId) -> EngineResult<Option<MosaicAssessment>> {
        self.profiles.latest_mosaic(child).await
    }

    /// Full Mosaic history for longitudinal trends, newest first.
    pub async fn mosaic_history(&self, child: &ChildId) -> EngineResult<Vec<MosaicAssessment>> {
        self.profiles.mosaic_history(child).await
    }

    /// The child's cognitive profile, if any test has completed.
    pub async fn cognitive_profile(
        &self,
        child: &ChildId,
    ) -> EngineResult<Option<CognitiveProfile>> {
        self.profiles.cognitive_profile(child).await
    }

    /// The child's emotional profile, if any session has completed.
    pub async fn emotional_profile(
        &self,
        child: &ChildId,
    ) -> EngineResult<Option<EmotionalProfile>> {
        self.profiles.emotional_profile(child).await
    }
}
