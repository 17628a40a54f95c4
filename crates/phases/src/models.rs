//! Review Phase Models
//!
//! Data structures for review-phase classification and role eligibility.
//! Upstream services deliver loosely typed records (numeric or string ids,
//! free-text phase names), so the record types here keep identifier fields as
//! raw JSON values and leave the typing to the classifier.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use challenge_review_core::{CoreError, CoreResult};

/// The closed set of review-phase kinds a challenge timeline can carry.
///
/// Classification reduces free-text phase names to this enumeration; the rest
/// of the workspace depends only on these values, never on raw strings.
/// "Undetermined" is expressed as `Option<ReviewPhaseType>` = `None`, never as
/// an extra variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewPhaseType {
    /// Final screening round
    #[serde(rename = "screening")]
    Screening,
    /// Intermediate screening round preceding the final one
    #[serde(rename = "checkpoint screening")]
    CheckpointScreening,
    /// Intermediate review round preceding the final one
    #[serde(rename = "checkpoint review")]
    CheckpointReview,
    /// Wrap-up review after a challenge closes
    #[serde(rename = "post-mortem")]
    PostMortem,
    /// Final approval of the winning submission
    #[serde(rename = "approval")]
    Approval,
    /// Final review round
    #[serde(rename = "review")]
    Review,
}

impl ReviewPhaseType {
    /// Get the canonical lowercase name for this phase type
    pub fn display_name(&self) -> &'static str {
        match self {
            ReviewPhaseType::Screening => "screening",
            ReviewPhaseType::CheckpointScreening => "checkpoint screening",
            ReviewPhaseType::CheckpointReview => "checkpoint review",
            ReviewPhaseType::PostMortem => "post-mortem",
            ReviewPhaseType::Approval => "approval",
            ReviewPhaseType::Review => "review",
        }
    }
}

impl std::fmt::Display for ReviewPhaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One phase of a challenge's timeline, as delivered by the challenge API.
///
/// `id` stays a raw JSON value because the timeline service sends numeric ids
/// while other collaborators send strings; comparisons are always done on the
/// string-coerced form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePhaseSummary {
    /// Phase identifier (numeric or string upstream)
    #[serde(default)]
    pub id: Option<Value>,
    /// Free-text phase name (e.g. "Checkpoint Review Round 1")
    #[serde(default)]
    pub name: Option<String>,
}

/// A configured reviewer assignment binding a review type to a phase or
/// scorecard identifier, as delivered by the review API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerConfig {
    /// Phase identifier this assignment is bound to
    #[serde(default)]
    pub phase_id: Option<Value>,
    /// Scorecard identifier this assignment is bound to
    #[serde(default)]
    pub scorecard_id: Option<Value>,
    /// Free-form review type; a string or an object depending on the source
    #[serde(default, rename = "type")]
    pub review_type: Option<Value>,
}

/// Parse a challenge-timeline payload into phase summaries
pub fn parse_phase_list(json: &str) -> CoreResult<Vec<ChallengePhaseSummary>> {
    serde_json::from_str(json)
        .map_err(|e| CoreError::parse(format!("Failed to parse phase list: {}", e)))
}

/// Parse a reviewer-assignment payload into reviewer configs
pub fn parse_reviewer_configs(json: &str) -> CoreResult<Vec<ReviewerConfig>> {
    serde_json::from_str(json)
        .map_err(|e| CoreError::parse(format!("Failed to parse reviewer configs: {}", e)))
}

/// Which rule of the eligibility resolver produced the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityReason {
    /// The target phase type could not be determined; denied by default
    UndeterminedPhaseType,
    /// The session is scoped to a different phase type than the target
    ScopeMismatch,
    /// The role predicate for the phase type matched
    RoleMatched,
    /// The role predicate for the phase type did not match
    RoleRejected,
}

impl std::fmt::Display for EligibilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EligibilityReason::UndeterminedPhaseType => write!(f, "undetermined_phase_type"),
            EligibilityReason::ScopeMismatch => write!(f, "scope_mismatch"),
            EligibilityReason::RoleMatched => write!(f, "role_matched"),
            EligibilityReason::RoleRejected => write!(f, "role_rejected"),
        }
    }
}

/// Result of an eligibility evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityDecision {
    /// Whether the role may edit the target phase
    pub eligible: bool,
    /// Classified type of the target phase, if determined
    pub phase_type: Option<ReviewPhaseType>,
    /// Which resolver rule fired
    pub reason: EligibilityReason,
    /// Human-readable reasoning
    pub reasoning: String,
}
