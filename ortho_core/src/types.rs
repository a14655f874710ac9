//! Core domain types for the Ortho recommendation system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Conditions and their closed identifier vocabulary
//! - Movement, joint-load, pace, and progression tags
//! - Safety profiles (per-condition and combined)
//! - Exercises and the catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Condition Vocabulary
// ============================================================================

/// A chronic medical condition that constrains safe exercise.
///
/// The identifier vocabulary is closed; anything outside it is not a
/// condition the system knows about and is dropped by the combiner.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Hypertension,
    Diabetes,
    PreDiabetes,
    Pcos,
    ThyroidHyper,
    ThyroidHypo,
    /// Sentinel for "no conditions reported"; maps to the baseline plan.
    None,
}

impl Condition {
    /// Every known condition, in display order.
    pub const ALL: [Condition; 7] = [
        Condition::Hypertension,
        Condition::Diabetes,
        Condition::PreDiabetes,
        Condition::Pcos,
        Condition::ThyroidHyper,
        Condition::ThyroidHypo,
        Condition::None,
    ];

    /// Parse a condition identifier, returning `None` for unknown ids.
    pub fn parse(id: &str) -> Option<Condition> {
        match id {
            "hypertension" => Some(Condition::Hypertension),
            "diabetes" => Some(Condition::Diabetes),
            "pre-diabetes" => Some(Condition::PreDiabetes),
            "pcos" => Some(Condition::Pcos),
            "thyroid-hyper" => Some(Condition::ThyroidHyper),
            "thyroid-hypo" => Some(Condition::ThyroidHypo),
            "none" => Some(Condition::None),
            _ => None,
        }
    }

    /// The wire identifier for this condition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Hypertension => "hypertension",
            Condition::Diabetes => "diabetes",
            Condition::PreDiabetes => "pre-diabetes",
            Condition::Pcos => "pcos",
            Condition::ThyroidHyper => "thyroid-hyper",
            Condition::ThyroidHypo => "thyroid-hypo",
            Condition::None => "none",
        }
    }
}

// ============================================================================
// Constraint Tags
// ============================================================================

/// Physical posture/motion classification of an exercise.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Seated,
    StandingSupported,
    Walking,
    Mobility,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Seated => "seated",
            MovementType::StandingSupported => "standing_supported",
            MovementType::Walking => "walking",
            MovementType::Mobility => "mobility",
        }
    }
}

/// Joint stress severity. Ordinal: the smaller value is the stricter limit.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum JointLoad {
    VeryLow,
    Low,
}

impl JointLoad {
    pub fn as_str(&self) -> &'static str {
        match self {
            JointLoad::VeryLow => "very_low",
            JointLoad::Low => "low",
        }
    }
}

/// Required movement speed. Ordinal: the smaller value is slower.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
    Slow,
    SlowSteady,
    Steady,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Slow => "slow",
            Pace::SlowSteady => "slow_steady",
            Pace::Steady => "steady",
        }
    }
}

/// How to progress a plan over time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Progression {
    IncreaseTime,
}

// ============================================================================
// Safety Profiles
// ============================================================================

/// How a single medical condition constrains safe orthopedic exercise.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConditionProfile {
    pub allowed_movements: BTreeSet<MovementType>,
    pub max_joint_load: JointLoad,
    pub pace: Pace,
    pub progression: Progression,
    /// Display-only guidance; never consulted by selection logic.
    pub note: String,
}

/// The most restrictive union of one or more condition profiles.
///
/// Same shape as [`ConditionProfile`]; produced exclusively by the combiner.
/// The note is the first contributing profile's note.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombinedProfile {
    pub allowed_movements: BTreeSet<MovementType>,
    pub max_joint_load: JointLoad,
    pub pace: Pace,
    pub progression: Progression,
    pub note: String,
}

// ============================================================================
// Exercises and Catalog
// ============================================================================

/// A catalog entry. Only `movement_type` and `joint_load` drive selection;
/// the remaining fields are opaque display data.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub movement_type: MovementType,
    pub joint_load: JointLoad,
    pub instructions: String,
}

/// An ordered, read-only sequence of exercises.
///
/// Order is meaningful: the selector's backfill pass walks it front to back.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
}
