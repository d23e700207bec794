//! Command-line front end: prints the material plan for one subject.
mod config;
mod logging;
mod report;

use anyhow::{Context, Result};
use planner_content::ContentFactory;
use planner_core::MaterialPlanner;

use crate::config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env().with_args(std::env::args().skip(1))?;
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    run(&config)
}

fn run(config: &CliConfig) -> Result<()> {
    let factory = ContentFactory::new(&config.data_dir);
    tracing::info!("Data directory: {}", factory.data_dir().display());

    let Some(subject) = config.subject.as_deref() else {
        let names = factory.subject_names()?;
        println!("Available subjects:");
        for name in names {
            println!("  {name}");
        }
        return Ok(());
    };

    let planner_config = factory.load_config()?;
    let preset = config.preset.unwrap_or(planner_config.default_preset);
    let catalog = factory.load_materials()?;
    let bundle = factory
        .load_subject(subject)
        .with_context(|| format!("Cannot plan for '{subject}'"))?;

    let mut planner = MaterialPlanner::with_config(planner_config, catalog);
    planner.load_subject_with_preset(bundle, preset);
    tracing::info!(
        "Planned {} with preset {} ({} materials)",
        planner.subject().name,
        preset,
        planner.sorted_materials().len()
    );

    print!("{}", report::render(&planner));
    Ok(())
}
