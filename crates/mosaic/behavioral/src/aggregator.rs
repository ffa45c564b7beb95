//! Session finalization and emotional profile aggregation.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{debug, info};

use mosaic_types::{
    BehavioralSession, EmotionalDimension, EmotionalProfile, EngineError, EngineResult,
    SessionStatus,
};

use crate::config::BehavioralConfig;
use crate::engagement::engagement_score;

/// Sum the weighted deltas of a session's choices per dimension, clamped
/// to the profile score bound.
pub fn session_dimension_totals(
    session: &BehavioralSession,
    config: &BehavioralConfig,
) -> BTreeMap<EmotionalDimension, f64> {
    let mut totals: BTreeMap<EmotionalDimension, f64> = BTreeMap::new();
    for choice in &session.choices {
        for (&dim, &delta) in &choice.weighted_deltas {
            *totals.entry(dim).or_insert(0.0) += delta;
        }
    }
    for total in totals.values_mut() {
        *total = total.clamp(-config.score_bound, config.score_bound);
    }
    totals
}

/// Mark an in-progress session as completed: computes engagement and
/// total duration. Fails on sessions that are not in progress or have no
/// recorded choices.
pub fn finalize_session(session: &mut BehavioralSession) -> EngineResult<()> {
    if session.status != SessionStatus::InProgress {
        return Err(EngineError::Validation(format!(
            "session {} is not in progress",
            session.id
        )));
    }
    if session.choices.is_empty() {
        return Err(EngineError::Validation(format!(
            "session {} has no recorded choices",
            session.id
        )));
    }

    session.status = SessionStatus::Completed;
    session.engagement_score = Some(engagement_score(&session.choices));
    session.total_duration_ms = Some(
        session
            .choices
            .iter()
            .map(|c| c.reaction_time_ms as u64)
            .sum(),
    );
    session.completed_at = Some(Utc::now());

    info!(
        session = %session.id,
        choices = session.choices.len(),
        engagement = session.engagement_score.unwrap_or(0.0),
        "finalized behavioral session"
    );
    Ok(())
}

/// Mark a session abandoned. Abandoned sessions never reach
/// [`apply_session`], so they contribute nothing to the profile.
pub fn abandon_session(session: &mut BehavioralSession) -> EngineResult<()> {
    if session.status != SessionStatus::InProgress {
        return Err(EngineError::Validation(format!(
            "session {} is not in progress",
            session.id
        )));
    }
    session.status = SessionStatus::Abandoned;
    session.completed_at = Some(Utc::now());
    info!(session = %session.id, "behavioral session abandoned");
    Ok(())
}

/// Fold one completed session into the emotional profile.
///
/// Dimension scores move by an exponentially-weighted step
/// `new = old + alpha * (session_total - old)` with
/// `alpha = 1 / sessions_completed`, so the first session sets the score
/// and each later session has diminishing influence. The instinct index
/// blends the speed of net-positive choices; the consistency index
/// tracks the spread of session totals within each scenario type.
pub fn apply_session(
    profile: &mut EmotionalProfile,
    session: &BehavioralSession,
    config: &BehavioralConfig,
) -> EngineResult<()> {
    if session.status != SessionStatus::Completed {
        return Err(EngineError::Validation(format!(
            "session {} is not completed; only finalized sessions are aggregated",
            session.id
        )));
    }

    let totals = session_dimension_totals(session, config);

    profile.sessions_completed += 1;
    let n = profile.sessions_completed as f64;
    let alpha = 1.0 / n;

    for (&dim, &total) in &totals {
        let old = profile.dimensions.get(&dim).copied().unwrap_or(0.0);
        let updated = old + alpha * (total - old);
        profile
            .dimensions
            .insert(dim, updated.clamp(-config.score_bound, config.score_bound));
    }

    let session_instinct = instinct_of(session, config);
    profile.instinct_index =
        ((profile.instinct_index * (n - 1.0)) + session_instinct) / n;

    // Per-type running statistics feed the consistency index.
    let type_entry = profile
        .type_stats
        .entry(session.scenario_type)
        .or_default();
    for (&dim, &total) in &totals {
        type_entry.entry(dim).or_default().push(total);
    }
    profile.consistency_index = consistency_of(profile, config);

    profile.last_updated_at = Utc::now();

    debug!(
        child = %profile.child_id,
        sessions = profile.sessions_completed,
        instinct = profile.instinct_index,
        consistency = profile.consistency_index,
        "applied behavioral session to profile"
    );
    Ok(())
}

/// Session-level instinct: mean speed score of the choices whose net
/// weighted delta is positive (the expected, prosocial picks). Neutral
/// 0.5 when the session has none.
fn instinct_of(session: &BehavioralSession, config: &BehavioralConfig) -> f64 {
    let span = (config.slow_reaction_ms - config.fast_reaction_ms) as f64;
    let speeds: Vec<f64> = session
        .choices
        .iter()
        .filter(|c| c.weighted_deltas.values().sum::<f64>() > 0.0)
        .map(|c| {
            let over = c.reaction_time_ms as f64 - config.fast_reaction_ms as f64;
            (1.0 - over / span).clamp(0.0, 1.0)
        })
        .collect();

    if speeds.is_empty() {
        0.5
    } else {
        speeds.iter().sum::<f64>() / speeds.len() as f64
    }
}

/// Consistency across sessions of the same scenario type: low spread of
/// session totals maps to high consistency. Neutral 0.5 until some type
/// has at least two sessions.
fn consistency_of(profile: &EmotionalProfile, config: &BehavioralConfig) -> f64 {
    let mut type_scores = Vec::new();
    for stats in profile.type_stats.values() {
        let repeated: Vec<f64> = stats
            .values()
            .filter(|s| s.count >= 2)
            .map(|s| s.std_dev())
            .collect();
        if repeated.is_empty() {
            continue;
        }
        let avg_std = repeated.iter().sum::<f64>() / repeated.len() as f64;
        type_scores.push((1.0 - avg_std / config.consistency_scale).clamp(0.0, 1.0));
    }

    if type_scores.is_empty() {
        0.5
    } else {
        type_scores.iter().sum::<f64>() / type_scores.len() as f64
    }
}
