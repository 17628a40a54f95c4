//! Review Access Facade
//!
//! Holds the challenge data a session has already fetched (timeline phases
//! and reviewer configs) and answers edit-eligibility questions by running
//! the classifier first and feeding its output to the role resolver.
//!
//! The facade performs no I/O of its own: callers fetch the payloads from the
//! challenge and review services and hand them over once. All queries are
//! side-effect-free and safe to run concurrently.

use serde_json::Value;
use tracing::{debug, warn};

use challenge_review_core::CoreResult;
use challenge_review_phases::{
    classify_from_phases, classify_from_reviewer_configs, evaluate_role, normalize_role_name,
    parse_phase_list, parse_reviewer_configs, ChallengePhaseSummary, EligibilityDecision,
    EligibilityReason, ReviewPhaseType, ReviewerConfig,
};

/// Composition layer over fetched challenge data.
#[derive(Debug, Clone, Default)]
pub struct ReviewAccess {
    /// Challenge timeline phases
    phases: Vec<ChallengePhaseSummary>,
    /// Configured reviewer assignments
    reviewer_configs: Vec<ReviewerConfig>,
}

impl ReviewAccess {
    /// Create a facade over already-deserialized records.
    pub fn new(
        phases: Vec<ChallengePhaseSummary>,
        reviewer_configs: Vec<ReviewerConfig>,
    ) -> Self {
        Self {
            phases,
            reviewer_configs,
        }
    }

    /// Create a facade from raw JSON payloads.
    pub fn from_json(phases_json: &str, reviewer_configs_json: &str) -> CoreResult<Self> {
        Ok(Self {
            phases: parse_phase_list(phases_json)?,
            reviewer_configs: parse_reviewer_configs(reviewer_configs_json)?,
        })
    }

    /// Classified type of the phase with the given id, if determined.
    pub fn phase_type_of(&self, phase_id: &Value) -> Option<ReviewPhaseType> {
        classify_from_phases(&self.phases, phase_id)
    }

    /// Phase type the session's reviewer assignment is scoped to, if any.
    pub fn scope_of(
        &self,
        phase_id: Option<&Value>,
        scorecard_id: Option<&Value>,
    ) -> Option<ReviewPhaseType> {
        classify_from_reviewer_configs(&self.reviewer_configs, phase_id, scorecard_id)
    }

    /// Decide whether `raw_role` may edit the phase with `target_phase_id`.
    ///
    /// `scope_phase_id` / `scope_scorecard_id` identify the reviewer
    /// assignment the caller's session is acting under, if any. A session
    /// scoped to one phase type may never edit a phase of a different type,
    /// even if the role name would otherwise qualify.
    pub fn can_edit(
        &self,
        target_phase_id: &Value,
        scope_phase_id: Option<&Value>,
        scope_scorecard_id: Option<&Value>,
        raw_role: &str,
    ) -> EligibilityDecision {
        let phase_type = self.phase_type_of(target_phase_id);
        let scope = self.scope_of(scope_phase_id, scope_scorecard_id);
        let role = normalize_role_name(raw_role);

        debug!(?phase_type, ?scope, role = %role, "evaluating edit eligibility");

        let decision = evaluate_role(phase_type, scope, &role);
        if decision.reason == EligibilityReason::UndeterminedPhaseType {
            warn!(phase_id = %target_phase_id, "denying edit: target phase type undetermined");
        }
        decision
    }
}
