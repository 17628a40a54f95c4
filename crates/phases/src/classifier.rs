//! Review Phase Classification
//!
//! Maps heterogeneous phase records, reviewer configs, and free-text metadata
//! to the closed [`ReviewPhaseType`] enumeration. Upstream services do not
//! provide a typed phase kind, so classification is a substring heuristic over
//! normalized names. All entry points are pure and total: absent, malformed,
//! or unrecognized input yields `None`.

use serde_json::Value;
use tracing::debug;

use crate::models::{ChallengePhaseSummary, ReviewPhaseType, ReviewerConfig};

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// One ordered classification rule: the normalized name must contain at least
/// one of `any_of` and none of `none_of`.
struct PhaseNameRule {
    any_of: &'static [&'static str],
    none_of: &'static [&'static str],
    phase_type: ReviewPhaseType,
}

/// Rule table, evaluated top to bottom with the first match winning.
///
/// The order is load-bearing: "checkpoint screening" must be tested before the
/// generic "screening" rule and "checkpoint review" before generic "review",
/// otherwise checkpoint phases would be misclassified as their non-checkpoint
/// counterparts.
const PHASE_NAME_RULES: &[PhaseNameRule] = &[
    PhaseNameRule {
        any_of: &["checkpoint screening"],
        none_of: &[],
        phase_type: ReviewPhaseType::CheckpointScreening,
    },
    PhaseNameRule {
        any_of: &["checkpoint review"],
        none_of: &[],
        phase_type: ReviewPhaseType::CheckpointReview,
    },
    PhaseNameRule {
        any_of: &["post-mortem", "post mortem", "postmortem"],
        none_of: &[],
        phase_type: ReviewPhaseType::PostMortem,
    },
    PhaseNameRule {
        any_of: &["screening"],
        none_of: &["checkpoint"],
        phase_type: ReviewPhaseType::Screening,
    },
    PhaseNameRule {
        any_of: &["approval"],
        none_of: &[],
        phase_type: ReviewPhaseType::Approval,
    },
    PhaseNameRule {
        any_of: &["review"],
        none_of: &[],
        phase_type: ReviewPhaseType::Review,
    },
];

/// Name-bearing object fields probed, in priority order, by [`classify_value`].
const NAME_BEARING_KEYS: &[&str] = &["name", "phaseName", "phase", "type"];

/// Metadata-bag keys probed, in priority order, by [`classify_metadata`].
const METADATA_KEYS: &[&str] = &["type", "reviewType", "scorecardType", "phaseName", "name"];

// ---------------------------------------------------------------------------
// Classification entry points
// ---------------------------------------------------------------------------

/// Classify a free-text phase name into a review phase type.
///
/// The name is trimmed and lowercased before matching; an empty result yields
/// `None`.
pub fn classify_phase_name(name: &str) -> Option<ReviewPhaseType> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    for rule in PHASE_NAME_RULES {
        let matched = rule.any_of.iter().any(|needle| normalized.contains(needle))
            && !rule.none_of.iter().any(|needle| normalized.contains(needle));
        if matched {
            return Some(rule.phase_type);
        }
    }

    None
}

/// Classify an arbitrary source value.
///
/// Strings are classified directly. Objects are probed for name-bearing
/// fields (`name`, `phaseName`, `phase`, `type`, in that order) and the first
/// populated one is classified recursively, even if that classification comes
/// back undetermined. Null and any other value kind yield `None`.
pub fn classify_value(value: &Value) -> Option<ReviewPhaseType> {
    match value {
        Value::String(name) => classify_phase_name(name),
        Value::Object(map) => {
            for key in NAME_BEARING_KEYS {
                if let Some(inner) = map.get(*key) {
                    if !inner.is_null() {
                        return classify_value(inner);
                    }
                }
            }
            None
        }
        _ => None,
    }
}

/// Classify from a metadata bag.
///
/// Unlike the object probe in [`classify_value`], keys whose values classify
/// to `None` are skipped: the first *successful* classification across
/// `type`, `reviewType`, `scorecardType`, `phaseName`, `name` wins.
pub fn classify_metadata(metadata: &Value) -> Option<ReviewPhaseType> {
    let map = metadata.as_object()?;
    for key in METADATA_KEYS {
        if let Some(found) = map.get(*key).and_then(classify_value) {
            return Some(found);
        }
    }
    None
}

/// Classify the phase with the given id from a challenge timeline.
///
/// Ids are compared as strings, coercing both sides, so numeric and string
/// ids from mixed upstream sources still match. The first matching phase's
/// name is classified; no match yields `None`.
pub fn classify_from_phases(
    phases: &[ChallengePhaseSummary],
    phase_id: &Value,
) -> Option<ReviewPhaseType> {
    let target = id_as_string(phase_id)?;

    let phase = phases.iter().find(|phase| {
        phase
            .id
            .as_ref()
            .and_then(id_as_string)
            .is_some_and(|id| id == target)
    })?;

    let result = phase.name.as_deref().and_then(classify_phase_name);
    debug!(
        phase_id = %target,
        name = phase.name.as_deref().unwrap_or(""),
        phase_type = ?result,
        "classified phase from timeline"
    );
    result
}

/// Classify from reviewer configs.
///
/// The first config whose `phaseId` OR `scorecardId` string-matches one of
/// the provided ids is taken and its `type` field classified. Empty configs,
/// no provided ids, or no match yield `None`.
pub fn classify_from_reviewer_configs(
    configs: &[ReviewerConfig],
    phase_id: Option<&Value>,
    scorecard_id: Option<&Value>,
) -> Option<ReviewPhaseType> {
    let target_phase = phase_id.and_then(id_as_string);
    let target_scorecard = scorecard_id.and_then(id_as_string);
    if target_phase.is_none() && target_scorecard.is_none() {
        return None;
    }

    let config = configs.iter().find(|config| {
        id_matches(target_phase.as_deref(), config.phase_id.as_ref())
            || id_matches(target_scorecard.as_deref(), config.scorecard_id.as_ref())
    })?;

    config.review_type.as_ref().and_then(classify_value)
}

// ---------------------------------------------------------------------------
// Identifier coercion
// ---------------------------------------------------------------------------

/// Coerce an id value to its string form for comparison.
///
/// Strings are trimmed and numbers stringified; anything else (including an
/// id that is empty after trimming) is treated as absent. Note that `1` and
/// `"1"` coerce to the same string while `"01"` does not.
pub fn id_as_string(id: &Value) -> Option<String> {
    match id {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn id_matches(target: Option<&str>, candidate: Option<&Value>) -> bool {
    match (target, candidate) {
        (Some(target), Some(candidate)) => {
            id_as_string(candidate).is_some_and(|id| id == target)
        }
        _ => false,
    }
}
