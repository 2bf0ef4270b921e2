//! skylark-ops
//!
//! Operator front end over the roster store and the advisory engine. Every
//! command loads a fresh snapshot; status updates go straight to the store.

mod cli;
mod render;

use anyhow::Context;
use serde::Serialize;
use std::process;
use tracing::{error, info, warn};

use skylark_advisory::AssignmentAdvisor;
use skylark_core::{logging, Config, StoreBackend};
use skylark_store::{open_store, RosterStore, WorkbookStore};

use cli::{Command, Invocation};

#[derive(Debug, Serialize)]
struct CheckOutput {
    pilot_id: String,
    drone_id: String,
    mission_id: String,
    safe: bool,
    conflicts: Vec<String>,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let invocation = match cli::parse_args(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {}", e);
            println!();
            cli::print_usage();
            process::exit(1);
        }
    };

    if invocation.command == Command::Help {
        cli::print_usage();
        return;
    }

    let config = match load_config(&invocation) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };
    logging::init_from_config(&config.logging);

    if let Err(e) = run(&invocation, &config) {
        error!(error = %format!("{:#}", e), "Command failed");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn load_config(invocation: &Invocation) -> anyhow::Result<Config> {
    let mut config = match &invocation.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default_config(),
    };
    config.apply_env_overrides()?;
    Ok(config)
}

fn run(invocation: &Invocation, config: &Config) -> anyhow::Result<()> {
    let json = invocation.json;

    match &invocation.command {
        Command::Roster => {
            let roster = open(config)?.load_roster()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&roster)?);
            } else {
                print!("{}", render::roster(&roster));
            }
        }
        Command::Match { mission } => {
            let roster = open(config)?.load_roster()?;
            let report = AssignmentAdvisor::new(&roster).find_best_matches(mission)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::matches(&report));
            }
        }
        Command::Check {
            pilot,
            drone,
            mission,
        } => {
            let roster = open(config)?.load_roster()?;
            let conflicts = AssignmentAdvisor::new(&roster).check_conflicts(pilot, drone, mission)?;
            if json {
                let output = CheckOutput {
                    pilot_id: pilot.clone(),
                    drone_id: drone.clone(),
                    mission_id: mission.clone(),
                    safe: conflicts.is_empty(),
                    conflicts: conflicts.iter().map(ToString::to_string).collect(),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print!("{}", render::conflicts(&conflicts));
            }
        }
        Command::SetStatus { kind, id, status } => {
            let mut store = open(config)?;
            let result = store.update_status(*kind, id, *status);

            if json {
                let output = render::UpdateOutput::from_result(id, &result);
                println!("{}", serde_json::to_string_pretty(&output)?);
                if let Err(e) = result {
                    warn!(%kind, id = %id, error = %e, "Status update rejected");
                    process::exit(1);
                }
            } else {
                result?;
                print!("{}", render::status_updated(id));
            }

            info!(%kind, id = %id, %status, "Status synced");
        }
        Command::Import { from } => {
            let source = WorkbookStore::open(from)?;
            // Validate before writing anything
            source.load_roster()?;

            match config.store.backend {
                StoreBackend::Workbook => {
                    WorkbookStore::create(&config.store.path, source.workbook().clone())?;
                }
                StoreBackend::Sqlite => {
                    let mut store = skylark_store::SqliteStore::open(&config.store.path)?;
                    store.import_workbook(source.workbook())?;
                }
            }

            println!(
                "Imported {} into {}",
                from.display(),
                config.store.path.display()
            );
        }
        Command::Help => cli::print_usage(),
    }

    Ok(())
}

fn open(config: &Config) -> anyhow::Result<Box<dyn RosterStore>> {
    open_store(&config.store).with_context(|| {
        format!(
            "failed to open {:?} store at {}",
            config.store.backend,
            config.store.path.display()
        )
    })
}
