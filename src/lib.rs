//! Challenge Review - Phase Classification & Role Eligibility
//!
//! This library sits between the challenge/review/identity services and the
//! review UI. It includes:
//! - Heuristic classification of heterogeneous phase records into a closed
//!   set of review-phase kinds
//! - Role-eligibility resolution deciding which reviewer roles may edit
//!   which phases
//! - The `ReviewAccess` service facade composing the two over fetched data

pub mod services;

// Re-export core error types
pub use challenge_review_core::{CoreError, CoreResult};

// Re-export phase models
pub use challenge_review_phases::{
    ChallengePhaseSummary, EligibilityDecision, EligibilityReason, ReviewPhaseType, ReviewerConfig,
};

// Re-export classifier and resolver entry points
pub use challenge_review_phases::{
    can_role_edit_phase, classify_from_phases, classify_from_reviewer_configs, classify_metadata,
    classify_phase_name, classify_value, evaluate_role, normalize_role_name, role_matches,
};

// Re-export the service facade
pub use services::review_access::ReviewAccess;
