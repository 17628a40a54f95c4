//! Eligibility Integration Tests
//!
//! Exercises the full path the review UI takes: raw JSON payloads from the
//! challenge and review services are parsed, the target phase is classified,
//! the session scope is resolved from reviewer configs, and the role
//! predicate decides eligibility.

use serde_json::json;

use challenge_review::{
    classify_metadata, classify_phase_name, EligibilityReason, ReviewAccess, ReviewPhaseType,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// A realistic two-round challenge timeline with mixed id types.
fn timeline_json() -> &'static str {
    r#"[
        { "id": 731001, "name": "Registration" },
        { "id": 731002, "name": "Checkpoint Submission" },
        { "id": 731003, "name": "Checkpoint Screening" },
        { "id": 731004, "name": "Checkpoint Review" },
        { "id": "731005", "name": "Submission" },
        { "id": "731006", "name": "Screening" },
        { "id": "731007", "name": "Review" },
        { "id": 731008, "name": "Approval" },
        { "id": 731009, "name": "Post-Mortem" }
    ]"#
}

/// Reviewer assignments covering both rounds.
fn reviewer_configs_json() -> &'static str {
    r#"[
        { "phaseId": 731003, "scorecardId": 30010, "type": "Checkpoint Screening" },
        { "phaseId": 731004, "scorecardId": 30011, "type": "Checkpoint Review" },
        { "phaseId": "731006", "scorecardId": "30012", "type": "Screening" },
        { "phaseId": "731007", "scorecardId": "30013", "type": { "name": "Review" } }
    ]"#
}

fn access() -> ReviewAccess {
    ReviewAccess::from_json(timeline_json(), reviewer_configs_json()).unwrap()
}

// ============================================================================
// Timeline Classification Tests
// ============================================================================

#[test]
fn test_timeline_phase_types() {
    let access = access();

    assert_eq!(
        access.phase_type_of(&json!(731003)),
        Some(ReviewPhaseType::CheckpointScreening)
    );
    assert_eq!(
        access.phase_type_of(&json!(731004)),
        Some(ReviewPhaseType::CheckpointReview)
    );
    assert_eq!(
        access.phase_type_of(&json!("731006")),
        Some(ReviewPhaseType::Screening)
    );
    assert_eq!(
        access.phase_type_of(&json!("731007")),
        Some(ReviewPhaseType::Review)
    );
    assert_eq!(
        access.phase_type_of(&json!(731008)),
        Some(ReviewPhaseType::Approval)
    );
    assert_eq!(
        access.phase_type_of(&json!(731009)),
        Some(ReviewPhaseType::PostMortem)
    );

    // Non-review phases stay undetermined
    assert_eq!(access.phase_type_of(&json!(731001)), None);
    assert_eq!(access.phase_type_of(&json!(731002)), None);
}

#[test]
fn test_timeline_ids_match_across_types() {
    let access = access();

    // Numeric target against string id and vice versa
    assert_eq!(
        access.phase_type_of(&json!(731006)),
        Some(ReviewPhaseType::Screening)
    );
    assert_eq!(
        access.phase_type_of(&json!("731004")),
        Some(ReviewPhaseType::CheckpointReview)
    );
}

// ============================================================================
// Scope Resolution Tests
// ============================================================================

#[test]
fn test_scope_from_phase_or_scorecard_id() {
    let access = access();

    assert_eq!(
        access.scope_of(Some(&json!(731004)), None),
        Some(ReviewPhaseType::CheckpointReview)
    );
    assert_eq!(
        access.scope_of(None, Some(&json!(30012))),
        Some(ReviewPhaseType::Screening)
    );
    // Object-shaped type field on the config
    assert_eq!(
        access.scope_of(None, Some(&json!("30013"))),
        Some(ReviewPhaseType::Review)
    );
    assert_eq!(access.scope_of(None, None), None);
}

// ============================================================================
// End-to-End Eligibility Tests
// ============================================================================

#[test]
fn test_checkpoint_reviewer_edits_checkpoint_review() {
    let access = access();

    let decision = access.can_edit(
        &json!(731004),
        Some(&json!(731004)),
        None,
        "Checkpoint Reviewer #2",
    );
    assert!(decision.eligible);
    assert_eq!(decision.phase_type, Some(ReviewPhaseType::CheckpointReview));
    assert_eq!(decision.reason, EligibilityReason::RoleMatched);
}

#[test]
fn test_checkpoint_reviewer_cannot_edit_final_review() {
    let access = access();

    // Scope mismatch: session is bound to the checkpoint round
    let decision = access.can_edit(
        &json!("731007"),
        Some(&json!(731004)),
        None,
        "Checkpoint Reviewer",
    );
    assert!(!decision.eligible);
    assert_eq!(decision.reason, EligibilityReason::ScopeMismatch);

    // Even without a scope, the role name is excluded from the review predicate
    let decision = access.can_edit(&json!("731007"), None, None, "Checkpoint Reviewer");
    assert!(!decision.eligible);
    assert_eq!(decision.reason, EligibilityReason::RoleRejected);
}

#[test]
fn test_senior_reviewer_edits_final_review() {
    let access = access();

    let decision = access.can_edit(
        &json!("731007"),
        Some(&json!("731007")),
        None,
        "Senior Reviewer",
    );
    assert!(decision.eligible);
}

#[test]
fn test_screener_excluded_from_checkpoint_screening() {
    let access = access();

    // Plain screener role is a substring match for screening...
    let decision = access.can_edit(&json!("731006"), None, None, "Screener");
    assert!(decision.eligible);

    // ...but checkpoint screening demands the exact normalized role
    let decision = access.can_edit(&json!(731003), None, None, "Screener");
    assert!(!decision.eligible);
    assert_eq!(decision.reason, EligibilityReason::RoleRejected);

    let decision = access.can_edit(&json!(731003), None, None, "Checkpoint Screener");
    assert!(decision.eligible);
}

#[test]
fn test_unknown_target_phase_denies_by_default() {
    let access = access();

    let decision = access.can_edit(&json!(999999), None, None, "Reviewer");
    assert!(!decision.eligible);
    assert_eq!(decision.reason, EligibilityReason::UndeterminedPhaseType);
    assert!(decision.phase_type.is_none());
}

// ============================================================================
// Metadata Classification Tests
// ============================================================================

#[test]
fn test_metadata_bag_classification() {
    let metadata = json!({
        "scorecardType": "Checkpoint Screening",
        "phaseName": "Screening"
    });
    // "type" and "reviewType" are absent; "scorecardType" classifies first
    assert_eq!(
        classify_metadata(&metadata),
        Some(ReviewPhaseType::CheckpointScreening)
    );
}

#[test]
fn test_phase_name_precedence_end_to_end() {
    // The checkpoint rules must win over their generic counterparts
    assert_eq!(
        classify_phase_name("Checkpoint Screening Round 1"),
        Some(ReviewPhaseType::CheckpointScreening)
    );
    assert_eq!(
        classify_phase_name("Checkpoint Review Round 1"),
        Some(ReviewPhaseType::CheckpointReview)
    );
    // Post-mortem wins even when "review" appears in the name
    assert_eq!(
        classify_phase_name("Post-Mortem Review"),
        Some(ReviewPhaseType::PostMortem)
    );
}
