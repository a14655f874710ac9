use clap::{Parser, Subcommand};
use ortho_core::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ortho")]
#[command(about = "Orthopedic exercise recommendation system", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override catalog file (JSON array of exercises)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend up to three exercises for the given conditions (default)
    Recommend {
        /// Condition identifier (repeatable), e.g. hypertension
        #[arg(long = "condition", value_name = "ID")]
        conditions: Vec<String>,

        /// Emit the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the combined safety profile without selecting exercises
    Profile {
        /// Condition identifier (repeatable)
        #[arg(long = "condition", value_name = "ID")]
        conditions: Vec<String>,
    },

    /// List supported condition identifiers
    Conditions,

    /// Validate the active catalog
    Validate,
}

fn main() -> Result<()> {
    // Initialize logging
    ortho_core::logging::init();

    let cli = Cli::parse();

    // Flag wins over config file
    let config = Config::load()?;
    let catalog_path = cli.catalog.or_else(|| config.catalog.path.clone());

    match cli.command {
        Some(Commands::Recommend { conditions, json }) => {
            cmd_recommend(catalog_path.as_deref(), conditions, json, &config)
        }
        Some(Commands::Profile { conditions }) => cmd_profile(conditions),
        Some(Commands::Conditions) => cmd_conditions(),
        Some(Commands::Validate) => cmd_validate(catalog_path.as_deref()),
        None => {
            // Default to "recommend" with no conditions (baseline plan)
            cmd_recommend(catalog_path.as_deref(), vec![], false, &config)
        }
    }
}

/// Load the catalog from a file when a path is set, else the embedded one.
fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => Catalog::load_from(p),
        None => Ok(build_default_catalog()),
    }
}

fn warn_unknown_conditions(conditions: &[String]) {
    for id in conditions {
        if Condition::parse(id).is_none() {
            eprintln!("Unknown condition: {}. Ignoring.", id);
        }
    }
}

fn cmd_recommend(
    catalog_path: Option<&Path>,
    conditions: Vec<String>,
    json: bool,
    config: &Config,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    warn_unknown_conditions(&conditions);

    let recommendation = recommend(&conditions, &catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
        return Ok(());
    }

    display_recommendation(&recommendation, &conditions, config);
    Ok(())
}

fn cmd_profile(conditions: Vec<String>) -> Result<()> {
    warn_unknown_conditions(&conditions);

    let profile = combine(&conditions);
    display_profile(&profile);
    Ok(())
}

fn cmd_conditions() -> Result<()> {
    println!("Supported conditions:");
    for condition in Condition::ALL {
        let profile = profile_for(condition);
        println!("  {:<14} {}", condition.as_str(), profile.note);
    }
    Ok(())
}

fn cmd_validate(catalog_path: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let errors = catalog.validate();

    if errors.is_empty() {
        println!("✓ Catalog OK ({} exercises)", catalog.exercises.len());
        Ok(())
    } else {
        eprintln!("Catalog validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        Err(Error::CatalogValidation(format!(
            "{} problem(s) found",
            errors.len()
        )))
    }
}

fn display_profile(profile: &CombinedProfile) {
    let movements: Vec<&str> = profile
        .allowed_movements
        .iter()
        .map(|m| m.as_str())
        .collect();

    println!("  Movements:      {}", movements.join(", "));
    println!("  Max joint load: {}", profile.max_joint_load.as_str());
    println!("  Pace:           {}", profile.pace.as_str());
    println!("  Note:           {}", profile.note);
}

fn display_recommendation(
    recommendation: &Recommendation,
    conditions: &[String],
    config: &Config,
) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  ORTHOPEDIC EXERCISE PLAN");
    println!("╰─────────────────────────────────────────╯");
    println!();

    if conditions.is_empty() {
        println!("  Conditions: none reported");
    } else {
        println!("  Conditions: {}", conditions.join(", "));
    }

    let profile = &recommendation.profile;
    let movements: Vec<&str> = profile
        .allowed_movements
        .iter()
        .map(|m| m.as_str())
        .collect();
    println!(
        "  Constraints: {} pace, {} joint load, movements: {}",
        profile.pace.as_str(),
        profile.max_joint_load.as_str(),
        if movements.is_empty() {
            "(none)".to_string()
        } else {
            movements.join(", ")
        }
    );

    if config.display.show_notes {
        println!("  ℹ {}", profile.note);
    }
    println!();

    if recommendation.exercises.is_empty() {
        println!("  No safe exercises found for this combination of");
        println!("  conditions. Please consult a clinician for guidance.");
        println!();
        return;
    }

    for (index, exercise) in recommendation.exercises.iter().enumerate() {
        println!("  {}. {}", index + 1, exercise.name);
        println!(
            "     ({}, {} joint load)",
            exercise.movement_type.as_str(),
            exercise.joint_load.as_str()
        );
        println!("     {}", exercise.instructions);
        println!();
    }
}
