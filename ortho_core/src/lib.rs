#![forbid(unsafe_code)]

//! Core domain model and business logic for the Ortho recommendation system.
//!
//! This crate provides:
//! - Domain types (conditions, profiles, exercises, catalog)
//! - The fixed condition-profile table
//! - Profile combination
//! - Exercise selection
//! - Catalog management (embedded default, JSON loading, validation)

pub mod types;
pub mod error;
pub mod profiles;
pub mod combine;
pub mod catalog;
pub mod engine;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use profiles::{profile_for, profile_table};
pub use combine::{combine, combine_profiles};
pub use catalog::{build_default_catalog, default_catalog};
pub use config::Config;
pub use engine::{recommend, select, Recommendation, MAX_RECOMMENDATIONS};
