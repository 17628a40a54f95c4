//! Role Eligibility Resolution
//!
//! Decides whether a reviewer role may edit a phase of a classified type,
//! taking into account the phase type the caller's session is scoped to.
//! Like the classifier, everything here is pure and total: unknown input
//! denies, it never fails.

use crate::models::{EligibilityDecision, EligibilityReason, ReviewPhaseType};

/// Reduce a raw role name to lowercase ASCII letters only.
///
/// Digits, punctuation, and whitespace are dropped entirely, so
/// "Checkpoint-Reviewer #2" and "checkpoint reviewer" both normalize to
/// "checkpointreviewer".
pub fn normalize_role_name(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Per-type role predicate over a normalized role name.
///
/// Checkpoint roles require exact equality while the other categories accept
/// substrings. The asymmetry is deliberate: a stray suffix that survives
/// normalization breaks a checkpoint match but not the others.
pub fn role_matches(phase_type: ReviewPhaseType, role: &str) -> bool {
    match phase_type {
        ReviewPhaseType::Approval => role.contains("approver") || role.contains("approval"),
        ReviewPhaseType::CheckpointReview => role == "checkpointreviewer",
        ReviewPhaseType::CheckpointScreening => role == "checkpointscreener",
        ReviewPhaseType::PostMortem => role.contains("postmortem"),
        ReviewPhaseType::Review => {
            role.contains("reviewer")
                && !role.contains("checkpoint")
                && !role.contains("postmortem")
        }
        ReviewPhaseType::Screening => {
            (role.contains("screener") || role.contains("screening"))
                && !role.contains("checkpoint")
        }
    }
}

/// Evaluate whether a normalized role may edit a phase of the given type.
///
/// `current_phase_type` is the type the caller's session is scoped to. An
/// undetermined target denies by default, and a determined scope that differs
/// from the target denies regardless of the role name.
pub fn evaluate_role(
    phase_type: Option<ReviewPhaseType>,
    current_phase_type: Option<ReviewPhaseType>,
    normalized_role: &str,
) -> EligibilityDecision {
    let Some(target) = phase_type else {
        return EligibilityDecision {
            eligible: false,
            phase_type: None,
            reason: EligibilityReason::UndeterminedPhaseType,
            reasoning: "Target phase type could not be determined; denying by default".to_string(),
        };
    };

    if let Some(scope) = current_phase_type {
        if scope != target {
            return EligibilityDecision {
                eligible: false,
                phase_type: Some(target),
                reason: EligibilityReason::ScopeMismatch,
                reasoning: format!(
                    "Session is scoped to '{}' but the target phase is '{}'",
                    scope, target
                ),
            };
        }
    }

    if role_matches(target, normalized_role) {
        EligibilityDecision {
            eligible: true,
            phase_type: Some(target),
            reason: EligibilityReason::RoleMatched,
            reasoning: format!(
                "Role '{}' matches the '{}' predicate",
                normalized_role, target
            ),
        }
    } else {
        EligibilityDecision {
            eligible: false,
            phase_type: Some(target),
            reason: EligibilityReason::RoleRejected,
            reasoning: format!(
                "Role '{}' does not match the '{}' predicate",
                normalized_role, target
            ),
        }
    }
}

/// Boolean form of [`evaluate_role`].
pub fn can_role_edit_phase(
    phase_type: Option<ReviewPhaseType>,
    current_phase_type: Option<ReviewPhaseType>,
    normalized_role: &str,
) -> bool {
    evaluate_role(phase_type, current_phase_type, normalized_role).eligible
}
