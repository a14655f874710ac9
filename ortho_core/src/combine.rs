//! Profile combiner: merges per-condition safety profiles into one
//! conservative constraint set.
//!
//! Merge rules, applied as a left-to-right fold:
//! - `allowed_movements`: set intersection
//! - `max_joint_load`: strictest (ordinal minimum) wins
//! - `pace`: slowest (ordinal minimum) wins
//! - `progression`: pinned to `increase_time`
//! - `note`: the first contributing profile's note

use crate::profiles::profile_for;
use crate::types::{CombinedProfile, Condition, ConditionProfile, Progression};

/// Combine a list of condition identifiers into a single safety profile.
///
/// Unknown identifiers are dropped, not an error. An empty list, or a list
/// where every identifier was unknown, falls back to the `none` baseline.
pub fn combine(conditions: &[String]) -> CombinedProfile {
    let mut valid: Vec<Condition> = conditions
        .iter()
        .filter_map(|id| match Condition::parse(id) {
            Some(condition) => Some(condition),
            None => {
                tracing::debug!("Dropping unknown condition id '{}'", id);
                None
            }
        })
        .collect();

    if valid.is_empty() {
        tracing::debug!("No recognized conditions, using baseline profile");
        valid.push(Condition::None);
    }

    let profiles: Vec<&ConditionProfile> = valid.iter().map(|c| profile_for(*c)).collect();
    let merged = combine_profiles(&profiles);

    tracing::debug!(
        "Combined {} condition(s): movements={:?}, max_joint_load={}, pace={}",
        valid.len(),
        merged.allowed_movements,
        merged.max_joint_load.as_str(),
        merged.pace.as_str()
    );

    merged
}

/// Fold a non-empty slice of profiles into a combined profile.
///
/// The first profile seeds the result by value; the source table is never
/// mutated. Falls back to the `none` baseline if the slice is empty.
pub fn combine_profiles(profiles: &[&ConditionProfile]) -> CombinedProfile {
    let first: &ConditionProfile = profiles
        .first()
        .copied()
        .unwrap_or_else(|| profile_for(Condition::None));
    let rest = profiles.get(1..).unwrap_or_default();

    let mut merged = CombinedProfile {
        allowed_movements: first.allowed_movements.clone(),
        max_joint_load: first.max_joint_load,
        pace: first.pace,
        progression: Progression::IncreaseTime,
        note: first.note.clone(),
    };

    for profile in rest {
        merged.allowed_movements = merged
            .allowed_movements
            .intersection(&profile.allowed_movements)
            .copied()
            .collect();
        merged.max_joint_load = merged.max_joint_load.min(profile.max_joint_load);
        merged.pace = merged.pace.min(profile.pace);
    }

    merged
}
