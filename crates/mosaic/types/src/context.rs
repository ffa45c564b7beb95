//! Socio-economic context records and consent grants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::{ConsentCategory, ConsentStatus};
use crate::ids::ChildId;

// ── Family Context ─────────────────────────────────────────────────────

/// Household income brackets, mapped to a socio-economic status component
/// in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeBracket {
    Under25k,
    From25kTo50k,
    From50kTo75k,
    From75kTo100k,
    From100kTo150k,
    From150kTo200k,
    Over200k,
    PreferNotSay,
}

impl IncomeBracket {
    /// Socio-economic status component for this bracket.
    pub fn ses_component(&self) -> f64 {
        match self {
            Self::Under25k => 0.1,
            Self::From25kTo50k => 0.25,
            Self::From50kTo75k => 0.4,
            Self::From75kTo100k => 0.55,
            Self::From100kTo150k => 0.7,
            Self::From150kTo200k => 0.85,
            Self::Over200k => 0.95,
            // Neutral default when the family declines to answer.
            Self::PreferNotSay => 0.5,
        }
    }
}

/// Highest parental education level, mapped to a SES component in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    LessThanHighSchool,
    HighSchool,
    SomeCollege,
    Associates,
    Bachelors,
    Masters,
    Doctorate,
}

impl EducationLevel {
    /// Socio-economic status component for this education level.
    pub fn ses_component(&self) -> f64 {
        match self {
            Self::LessThanHighSchool => 0.1,
            Self::HighSchool => 0.25,
            Self::SomeCollege => 0.4,
            Self::Associates => 0.5,
            Self::Bachelors => 0.7,
            Self::Masters => 0.85,
            Self::Doctorate => 0.95,
        }
    }
}

/// Optional family context. Every field except `child_id` is optional;
/// `data_completeness` counts how many of the ten optional fields are
/// filled.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FamilyContext {
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub household_size: Option<u32>,
    #[serde(default)]
    pub parent_education: Option<EducationLevel>,
    #[serde(default)]
    pub income_bracket: Option<IncomeBracket>,
    #[serde(default)]
    pub single_parent: Option<bool>,
    #[serde(default)]
    pub languages_spoken: Option<u32>,
    #[serde(default)]
    pub receives_assistance: Option<bool>,
    #[serde(default)]
    pub childcare_type: Option<String>,
    #[serde(default)]
    pub screen_time_hours_daily: Option<f64>,
    #[serde(default)]
    pub books_in_home: Option<u32>,
}

impl FamilyContext {
    /// Number of optional fields counted toward data completeness.
    pub const FIELD_COUNT: u32 = 10;

    /// How many of the optional fields are filled.
    pub fn filled_fields(&self) -> u32 {
        [
            self.zip_code.is_some(),
            self.household_size.is_some(),
            self.parent_education.is_some(),
            self.income_bracket.is_some(),
            self.single_parent.is_some(),
            self.languages_spoken.is_some(),
            self.receives_assistance.is_some(),
            self.childcare_type.is_some(),
            self.screen_time_hours_daily.is_some(),
            self.books_in_home.is_some(),
        ]
        .iter()
        .filter(|&&filled| filled)
        .count() as u32
    }
}

// ── Opportunity Index ──────────────────────────────────────────────────

/// Regional opportunity data for a zip code.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OpportunityIndex {
    pub zip_code: String,
    /// Composite opportunity measure in [0, 1].
    pub opportunity_index: f64,
    pub key_industries: Vec<String>,
    /// True when this is the national-average fallback rather than real
    /// regional data.
    pub is_estimated: bool,
}

impl OpportunityIndex {
    /// National-average fallback for a zip code with no regional data.
    pub fn national_estimate(zip_code: impl Into<String>) -> Self {
        Self {
            zip_code: zip_code.into(),
            opportunity_index: 0.50,
            key_industries: vec![
                "Healthcare".into(),
                "Education".into(),
                "Retail".into(),
                "Technology".into(),
            ],
            is_estimated: true,
        }
    }
}

// ── Context Multiplier ─────────────────────────────────────────────────

/// Derived adversity context for one child.
///
/// `gap_score = opportunity_index - socio_econ_status`; the multiplier is
/// `1.0` exactly whenever the gap is non-positive, an input is missing, or
/// `data_completeness` is below the configured floor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContextMultiplier {
    pub child_id: ChildId,
    pub opportunity_index: Option<f64>,
    pub socio_econ_status: Option<f64>,
    pub gap_score: Option<f64>,
    pub adversity_multiplier: f64,
    pub data_completeness: f64,
    pub calculated_at: DateTime<Utc>,
}

// ── Consent ────────────────────────────────────────────────────────────

/// One consent grant for a data category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConsentGrant {
    pub category: ConsentCategory,
    pub status: ConsentStatus,
    pub granted_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ConsentGrant {
    /// Whether this grant currently permits a read.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        if self.status != ConsentStatus::Granted {
            return false;
        }
        match self.expires_at {
            Some(expires) => now < expires,
            None => true,
        }
    }
}

/// The consent grants a caller supplies with a request. Absence of a
/// category means no consent; the engine never infers a grant.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConsentGrants {
    pub grants: Vec<ConsentGrant>,
}

impl ConsentGrants {
    /// Whether the caller holds an active grant for the category.
    pub fn allows(&self, category: ConsentCategory, now: DateTime<Utc>) -> bool {
        self.grants
            .iter()
            .any(|g| g.category == category && g.is_active(now))
    }

    /// Convenience constructor granting the given categories without
    /// expiry. Used in tests and trusted callers.
    pub fn granted(categories: &[ConsentCategory], now: DateTime<Utc>) -> Self {
        Self {
            grants: categories
                .iter()
                .map(|&category| ConsentGrant {
                    category,
                    status: ConsentStatus::Granted,
                    granted_at: Some(now),
                    expires_at: None,
                })
                .collect(),
        }
    }
}
