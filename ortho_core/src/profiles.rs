//! Fixed orthopedic condition-profile table.
//!
//! Each profile defines how a medical condition constrains safe orthopedic
//! exercise recommendations. The table is static configuration: built once,
//! never mutated, consumed read-only by the combiner.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

/// Cached profile table - built once and reused across all operations
static PROFILE_TABLE: Lazy<HashMap<Condition, ConditionProfile>> = Lazy::new(build_profile_table);

/// Get a reference to the cached condition-profile table
pub fn profile_table() -> &'static HashMap<Condition, ConditionProfile> {
    &PROFILE_TABLE
}

/// Look up the safety profile for a condition.
///
/// The table covers every [`Condition`] variant, so this always succeeds
/// for a parsed condition.
pub fn profile_for(condition: Condition) -> &'static ConditionProfile {
    PROFILE_TABLE
        .get(&condition)
        .expect("profile table covers every condition variant")
}

fn movements(list: &[MovementType]) -> BTreeSet<MovementType> {
    list.iter().copied().collect()
}

fn build_profile_table() -> HashMap<Condition, ConditionProfile> {
    let mut table = HashMap::new();

    table.insert(
        Condition::Hypertension,
        ConditionProfile {
            allowed_movements: movements(&[MovementType::Seated, MovementType::Walking]),
            max_joint_load: JointLoad::VeryLow,
            pace: Pace::SlowSteady,
            progression: Progression::IncreaseTime,
            note: "Avoid sudden pace or intensity changes".into(),
        },
    );

    table.insert(
        Condition::Diabetes,
        ConditionProfile {
            allowed_movements: movements(&[MovementType::Walking, MovementType::StandingSupported]),
            max_joint_load: JointLoad::Low,
            pace: Pace::Steady,
            progression: Progression::IncreaseTime,
            note: "Maintain rhythm and avoid fatigue".into(),
        },
    );

    table.insert(
        Condition::PreDiabetes,
        ConditionProfile {
            allowed_movements: movements(&[MovementType::Walking, MovementType::StandingSupported]),
            max_joint_load: JointLoad::Low,
            pace: Pace::Steady,
            progression: Progression::IncreaseTime,
            note: "Gradual progression is recommended".into(),
        },
    );

    table.insert(
        Condition::Pcos,
        ConditionProfile {
            allowed_movements: movements(&[MovementType::Walking, MovementType::Mobility]),
            max_joint_load: JointLoad::Low,
            pace: Pace::Steady,
            progression: Progression::IncreaseTime,
            note: "Consistency is more important than intensity".into(),
        },
    );

    table.insert(
        Condition::ThyroidHyper,
        ConditionProfile {
            allowed_movements: movements(&[MovementType::Seated, MovementType::Walking]),
            max_joint_load: JointLoad::VeryLow,
            pace: Pace::Slow,
            progression: Progression::IncreaseTime,
            note: "Avoid overexertion".into(),
        },
    );

    table.insert(
        Condition::ThyroidHypo,
        ConditionProfile {
            allowed_movements: movements(&[MovementType::Seated, MovementType::Walking]),
            max_joint_load: JointLoad::Low,
            pace: Pace::SlowSteady,
            progression: Progression::IncreaseTime,
            note: "Start slow and progress gradually".into(),
        },
    );

    table.insert(
        Condition::None,
        ConditionProfile {
            allowed_movements: movements(&[
                MovementType::Seated,
                MovementType::Walking,
                MovementType::StandingSupported,
            ]),
            max_joint_load: JointLoad::Low,
            pace: Pace::Steady,
            progression: Progression::IncreaseTime,
            note: "General orthopedic beginner plan".into(),
        },
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_condition() {
        for condition in Condition::ALL {
            assert!(
                profile_table().contains_key(&condition),
                "Missing profile for {:?}",
                condition
            );
        }
        assert_eq!(profile_table().len(), Condition::ALL.len());
    }

    #[test]
    fn test_hypertension_profile_values() {
        let profile = profile_for(Condition::Hypertension);
        assert_eq!(
            profile.allowed_movements,
            movements(&[MovementType::Seated, MovementType::Walking])
        );
        assert_eq!(profile.max_joint_load, JointLoad::VeryLow);
        assert_eq!(profile.pace, Pace::SlowSteady);
    }

    #[test]
    fn test_none_profile_is_baseline() {
        let profile = profile_for(Condition::None);
        assert_eq!(profile.max_joint_load, JointLoad::Low);
        assert_eq!(profile.pace, Pace::Steady);
        assert!(profile.allowed_movements.contains(&MovementType::Seated));
        assert!(profile.allowed_movements.contains(&MovementType::Walking));
        assert!(profile
            .allowed_movements
            .contains(&MovementType::StandingSupported));
    }

    #[test]
    fn test_every_profile_progresses_by_time() {
        for profile in profile_table().values() {
            assert_eq!(profile.progression, Progression::IncreaseTime);
        }
    }

    #[test]
    fn test_every_profile_has_a_note() {
        for profile in profile_table().values() {
            assert!(!profile.note.is_empty());
        }
    }
}
