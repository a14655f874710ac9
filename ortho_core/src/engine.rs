//! Exercise selection engine.
//!
//! Selection runs in three stages over the catalog:
//! 1. Safety filter: movement must be allowed and joint load within tolerance
//! 2. Diversity pass: at most one exercise per movement type, fixed priority
//! 3. Backfill pass: top up from the filtered list in catalog order

use crate::combine::combine;
use crate::types::{Catalog, CombinedProfile, Exercise, MovementType};
use serde::Serialize;
use std::collections::HashSet;

/// Upper bound on the number of recommended exercises.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Movement types visited by the diversity pass, in priority order.
/// `mobility` is deliberately absent: it only enters via backfill.
const DIVERSITY_ORDER: [MovementType; 3] = [
    MovementType::Seated,
    MovementType::StandingSupported,
    MovementType::Walking,
];

/// A complete recommendation: the merged constraints and the exercises
/// selected under them.
#[derive(Clone, Debug, Serialize)]
pub struct Recommendation {
    pub profile: CombinedProfile,
    pub exercises: Vec<Exercise>,
}

/// Combine conditions and select exercises in one step.
pub fn recommend(conditions: &[String], catalog: &Catalog) -> Recommendation {
    let profile = combine(conditions);
    let exercises = select(&profile, catalog);

    tracing::info!(
        "Recommending {} exercise(s) for {} condition id(s)",
        exercises.len(),
        conditions.len()
    );

    Recommendation { profile, exercises }
}

/// Select up to [`MAX_RECOMMENDATIONS`] exercises satisfying a profile.
///
/// A short or empty result is valid output, never an error: it means the
/// combined constraints admit few or no safe movements.
pub fn select(profile: &CombinedProfile, catalog: &Catalog) -> Vec<Exercise> {
    let eligible: Vec<&Exercise> = catalog
        .exercises
        .iter()
        .filter(|e| {
            profile.allowed_movements.contains(&e.movement_type)
                && e.joint_load <= profile.max_joint_load
        })
        .collect();

    tracing::debug!(
        "{} of {} catalog exercises pass the safety filter",
        eligible.len(),
        catalog.exercises.len()
    );

    let mut selected: Vec<Exercise> = Vec::with_capacity(MAX_RECOMMENDATIONS);
    // Dedup by stable id, not value equality: two otherwise-identical
    // catalog entries are distinct exercises.
    let mut selected_ids: HashSet<&str> = HashSet::new();

    // Diversity pass
    for movement in DIVERSITY_ORDER {
        if selected.len() >= MAX_RECOMMENDATIONS {
            break;
        }
        if let Some(exercise) = eligible.iter().find(|e| e.movement_type == movement) {
            selected_ids.insert(exercise.id.as_str());
            selected.push((*exercise).clone());
        }
    }

    // Backfill pass
    for exercise in &eligible {
        if selected.len() >= MAX_RECOMMENDATIONS {
            break;
        }
        if selected_ids.insert(exercise.id.as_str()) {
            selected.push((*exercise).clone());
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::types::{JointLoad, Pace, Progression};
    use std::collections::BTreeSet;

    fn exercise(id: &str, movement_type: MovementType, joint_load: JointLoad) -> Exercise {
        Exercise {
            id: id.into(),
            name: id.replace('_', " "),
            movement_type,
            joint_load,
            instructions: "Test instructions".into(),
        }
    }

    fn profile(movements: &[MovementType], max_joint_load: JointLoad) -> CombinedProfile {
        CombinedProfile {
            allowed_movements: movements.iter().copied().collect(),
            max_joint_load,
            pace: Pace::Steady,
            progression: Progression::IncreaseTime,
            note: "Test profile".into(),
        }
    }

    #[test]
    fn test_never_more_than_three() {
        let catalog = build_default_catalog();
        let all = profile(
            &[
                MovementType::Seated,
                MovementType::StandingSupported,
                MovementType::Walking,
                MovementType::Mobility,
            ],
            JointLoad::Low,
        );

        let selected = select(&all, &catalog);
        assert_eq!(selected.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn test_respects_allowed_movements() {
        let catalog = build_default_catalog();
        let walking_only = profile(&[MovementType::Walking], JointLoad::Low);

        let selected = select(&walking_only, &catalog);
        assert!(!selected.is_empty());
        for exercise in &selected {
            assert_eq!(exercise.movement_type, MovementType::Walking);
        }
    }

    #[test]
    fn test_very_low_tolerance_excludes_low_load() {
        let catalog = build_default_catalog();
        let strict = profile(
            &[
                MovementType::Seated,
                MovementType::StandingSupported,
                MovementType::Walking,
            ],
            JointLoad::VeryLow,
        );

        let selected = select(&strict, &catalog);
        assert!(!selected.is_empty());
        for exercise in &selected {
            assert_eq!(exercise.joint_load, JointLoad::VeryLow);
        }
    }

    #[test]
    fn test_diversity_priority_order() {
        let catalog = Catalog {
            exercises: vec![
                exercise("walk_a", MovementType::Walking, JointLoad::VeryLow),
                exercise("stand_a", MovementType::StandingSupported, JointLoad::VeryLow),
                exercise("seat_a", MovementType::Seated, JointLoad::VeryLow),
            ],
        };
        let all = profile(
            &[
                MovementType::Seated,
                MovementType::StandingSupported,
                MovementType::Walking,
            ],
            JointLoad::Low,
        );

        let selected = select(&all, &catalog);
        let ids: Vec<&str> = selected.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["seat_a", "stand_a", "walk_a"]);
    }

    #[test]
    fn test_mobility_enters_via_backfill_only() {
        let catalog = Catalog {
            exercises: vec![
                exercise("mobility_a", MovementType::Mobility, JointLoad::VeryLow),
                exercise("seat_a", MovementType::Seated, JointLoad::VeryLow),
            ],
        };
        let all = profile(
            &[MovementType::Seated, MovementType::Mobility],
            JointLoad::Low,
        );

        // Diversity pass picks the seated exercise first even though the
        // mobility entry precedes it in catalog order.
        let selected = select(&all, &catalog);
        let ids: Vec<&str> = selected.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["seat_a", "mobility_a"]);
    }

    #[test]
    fn test_backfill_preserves_catalog_order() {
        let catalog = Catalog {
            exercises: vec![
                exercise("seat_a", MovementType::Seated, JointLoad::VeryLow),
                exercise("seat_b", MovementType::Seated, JointLoad::VeryLow),
                exercise("seat_c", MovementType::Seated, JointLoad::VeryLow),
                exercise("seat_d", MovementType::Seated, JointLoad::VeryLow),
            ],
        };
        let seated = profile(&[MovementType::Seated], JointLoad::Low);

        let selected = select(&seated, &catalog);
        let ids: Vec<&str> = selected.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["seat_a", "seat_b", "seat_c"]);
    }

    #[test]
    fn test_single_eligible_returns_one() {
        let catalog = Catalog {
            exercises: vec![
                exercise("seat_a", MovementType::Seated, JointLoad::VeryLow),
                exercise("walk_a", MovementType::Walking, JointLoad::Low),
            ],
        };
        let strict = profile(&[MovementType::Seated], JointLoad::VeryLow);

        let selected = select(&strict, &catalog);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "seat_a");
    }

    #[test]
    fn test_no_eligible_returns_empty() {
        let catalog = build_default_catalog();
        let nothing = profile(&[], JointLoad::Low);

        let selected = select(&nothing, &catalog);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_identical_entries_with_distinct_ids_both_selectable() {
        let twin_a = exercise("seat_a", MovementType::Seated, JointLoad::VeryLow);
        let mut twin_b = twin_a.clone();
        twin_b.id = "seat_b".into();
        let catalog = Catalog {
            exercises: vec![twin_a, twin_b],
        };
        let seated = profile(&[MovementType::Seated], JointLoad::Low);

        let selected = select(&seated, &catalog);
        assert_eq!(selected.len(), 2);
        assert_ne!(selected[0].id, selected[1].id);
    }

    #[test]
    fn test_recommend_composes_combiner_and_selector() {
        let catalog = build_default_catalog();
        let conditions = vec!["hypertension".to_string(), "diabetes".to_string()];

        let recommendation = recommend(&conditions, &catalog);

        // hypertension ∩ diabetes leaves walking at very_low load.
        let expected_movements: BTreeSet<MovementType> =
            [MovementType::Walking].into_iter().collect();
        assert_eq!(recommendation.profile.allowed_movements, expected_movements);
        assert_eq!(recommendation.profile.max_joint_load, JointLoad::VeryLow);
        for exercise in &recommendation.exercises {
            assert_eq!(exercise.movement_type, MovementType::Walking);
            assert_eq!(exercise.joint_load, JointLoad::VeryLow);
        }
        assert!(!recommendation.exercises.is_empty());
    }

    #[test]
    fn test_default_catalog_covers_priority_movements() {
        // With the baseline profile the diversity pass should fill all
        // three slots, one per priority movement type.
        let catalog = build_default_catalog();
        let baseline = profile(
            &[
                MovementType::Seated,
                MovementType::StandingSupported,
                MovementType::Walking,
            ],
            JointLoad::Low,
        );

        let selected = select(&baseline, &catalog);
        assert_eq!(selected.len(), 3);
        assert_eq!(selected[0].movement_type, MovementType::Seated);
        assert_eq!(selected[1].movement_type, MovementType::StandingSupported);
        assert_eq!(selected[2].movement_type, MovementType::Walking);
    }
}
