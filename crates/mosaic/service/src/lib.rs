//! # mosaic-service
//!
//! The engine's operation surface. Orchestrates the adaptive tester,
//! questionnaire scorer, behavioral aggregator, context calculator and
//! composite engine over the content/profile/context collaborator
//! boundary.
//!
//! Per-child profile writes are serialized through the profile store's
//! optimistic version check; a lost race is retried once with fresh reads
//! before the conflict surfaces. Context data is read only behind the
//! caller-supplied consent grants.

#![deny(unsafe_code)]

pub mod requests;
pub mod service;

pub use requests::{
    GenerateMosaic, GenerateMosaicResponse, ScoreQuestionnaire, StartAdaptiveTest,
    StartAdaptiveTestResponse, StartBehavioralSession, StartBehavioralSessionResponse,
    SubmitAdaptiveResponse, SubmitAdaptiveResponseResponse, SubmitBehavioralChoice,
    SubmitBehavioralChoiceResponse,
};
pub use service::AssessmentService;
