//! Challenge Review Phases
//!
//! Classification and eligibility logic for challenge review workflows:
//!
//! - `models` - Data types (ReviewPhaseType, ChallengePhaseSummary, ReviewerConfig, EligibilityDecision)
//! - `classifier` - Heuristic phase-type classification over heterogeneous sources
//! - `eligibility` - Role-name normalization and per-phase-type eligibility resolution
//!
//! Both components are pure, side-effect-free functions: absent or malformed
//! input yields "undetermined" (`None`) or a deny decision, never an error.
//! The only fallible surface is payload parsing in `models`.

pub mod classifier;
pub mod eligibility;
pub mod models;

// Re-export model types
pub use models::{
    parse_phase_list, parse_reviewer_configs, ChallengePhaseSummary, EligibilityDecision,
    EligibilityReason, ReviewPhaseType, ReviewerConfig,
};

// Re-export classifier entry points
pub use classifier::{
    classify_from_phases, classify_from_reviewer_configs, classify_metadata, classify_phase_name,
    classify_value, id_as_string,
};

// Re-export eligibility resolver
pub use eligibility::{can_role_edit_phase, evaluate_role, normalize_role_name, role_matches};
