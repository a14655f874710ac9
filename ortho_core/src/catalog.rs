//! Exercise catalog: embedded default, JSON file loading, validation.
//!
//! The catalog is an ordered sequence of exercises. The selector walks it
//! front to back, so entry order here is part of the behavior.

use crate::error::{Error, Result};
use crate::types::{Catalog, Exercise, JointLoad, MovementType};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

fn entry(
    id: &str,
    name: &str,
    movement_type: MovementType,
    joint_load: JointLoad,
    instructions: &str,
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        movement_type,
        joint_load,
        instructions: instructions.into(),
    }
}

/// Builds the default catalog of built-in orthopedic exercises
///
/// **Note**: For production use, prefer `default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> Catalog {
    Catalog {
        exercises: vec![
            entry(
                "seated_march",
                "Seated March",
                MovementType::Seated,
                JointLoad::VeryLow,
                "Sit tall on a firm chair. Lift one knee a few centimetres, \
                 lower it, then alternate at a comfortable rhythm.",
            ),
            entry(
                "seated_arm_raises",
                "Seated Arm Raises",
                MovementType::Seated,
                JointLoad::VeryLow,
                "Sit with feet flat. Raise both arms forward to shoulder \
                 height, hold briefly, and lower with control.",
            ),
            entry(
                "seated_leg_extension",
                "Seated Leg Extension",
                MovementType::Seated,
                JointLoad::Low,
                "Sit tall and straighten one knee until the leg is level, \
                 pause, then lower. Alternate legs.",
            ),
            entry(
                "supported_weight_shift",
                "Supported Weight Shifts",
                MovementType::StandingSupported,
                JointLoad::VeryLow,
                "Stand holding a counter or chair back. Shift weight slowly \
                 from one foot to the other without lifting either foot.",
            ),
            entry(
                "counter_calf_raise",
                "Counter-Supported Calf Raise",
                MovementType::StandingSupported,
                JointLoad::Low,
                "Stand holding a counter. Rise onto the balls of both feet, \
                 pause, and lower slowly.",
            ),
            entry(
                "supported_mini_squat",
                "Chair-Supported Mini Squat",
                MovementType::StandingSupported,
                JointLoad::Low,
                "Hold a chair back, bend knees a short way as if starting to \
                 sit, then stand back up. Keep heels down.",
            ),
            entry(
                "flat_walk",
                "Flat-Ground Walk",
                MovementType::Walking,
                JointLoad::VeryLow,
                "Walk on level ground at a comfortable pace for 5 to 10 \
                 minutes. Stop before fatigue sets in.",
            ),
            entry(
                "hallway_intervals",
                "Hallway Interval Walk",
                MovementType::Walking,
                JointLoad::Low,
                "Walk the length of a hallway, rest 30 seconds, and repeat \
                 up to 6 times.",
            ),
            entry(
                "ankle_circles",
                "Seated Ankle Circles",
                MovementType::Mobility,
                JointLoad::VeryLow,
                "Sit with one leg extended slightly. Circle the ankle slowly \
                 five times each direction, then switch.",
            ),
            entry(
                "shoulder_rolls",
                "Standing Shoulder Rolls",
                MovementType::Mobility,
                JointLoad::VeryLow,
                "Stand or sit tall. Roll both shoulders backward in slow, \
                 full circles.",
            ),
        ],
    }
}

impl Catalog {
    /// Load a catalog from a JSON file (an array of exercise records).
    ///
    /// Any failure to read or parse the source surfaces as
    /// [`Error::CatalogUnavailable`]; the core never substitutes a default.
    pub fn load_from(path: &Path) -> Result<Catalog> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::CatalogUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;

        let exercises: Vec<Exercise> = serde_json::from_str(&contents).map_err(|e| {
            Error::CatalogUnavailable(format!("cannot parse {}: {}", path.display(), e))
        })?;

        tracing::info!(
            "Loaded catalog with {} exercises from {}",
            exercises.len(),
            path.display()
        );

        Ok(Catalog { exercises })
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen_ids = HashSet::new();

        if self.exercises.is_empty() {
            errors.push("Catalog has no exercises".to_string());
        }

        for exercise in &self.exercises {
            if exercise.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
                continue;
            }
            if !seen_ids.insert(exercise.id.as_str()) {
                errors.push(format!("Duplicate exercise ID '{}'", exercise.id));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", exercise.id));
            }
            if exercise.instructions.is_empty() {
                errors.push(format!("Exercise '{}' has empty instructions", exercise.id));
            }
        }

        errors
    }
}
