//! Argument parsing for skylark-ops

use std::path::PathBuf;

use skylark_roster::{AssetStatus, RecordKind};

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config: Option<PathBuf>,
    pub json: bool,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Roster,
    Match {
        mission: String,
    },
    Check {
        pilot: String,
        drone: String,
        mission: String,
    },
    SetStatus {
        kind: RecordKind,
        id: String,
        status: AssetStatus,
    },
    Import {
        from: PathBuf,
    },
    Help,
}

pub fn print_usage() {
    println!("skylark-ops - drone operations roster assistant");
    println!();
    println!("USAGE:");
    println!("    skylark-ops [--config <path>] [--json] <command> [options]");
    println!();
    println!("COMMANDS:");
    println!("    roster                                   List pilots, drones and missions");
    println!("    match --mission <id>                     Rank pilots and drones for a mission");
    println!("    check --pilot <id> --drone <id> --mission <id>");
    println!("                                             Validate a manual assignment");
    println!("    set-status --kind <pilot|drone> --id <id> --status <status>");
    println!("                                             Update a status in the store");
    println!("    import --from <workbook.json>            Seed the configured store");
    println!();
    println!("STATUS VALUES:");
    println!("    Available, On Leave, Maintenance, Assigned");
}

pub fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut config = None;
    let mut json = false;
    let mut rest = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => match iter.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => return Err("--config was provided without a path".to_string()),
            },
            "--json" => json = true,
            _ => rest.push(arg.as_str()),
        }
    }

    let (name, options) = match rest.split_first() {
        Some((name, options)) => (*name, options),
        None => return Err("missing command".to_string()),
    };

    let command = match name {
        "roster" => Command::Roster,
        "match" => Command::Match {
            mission: required(options, "--mission")?,
        },
        "check" => Command::Check {
            pilot: required(options, "--pilot")?,
            drone: required(options, "--drone")?,
            mission: required(options, "--mission")?,
        },
        "set-status" => {
            let kind = match required(options, "--kind")?.to_lowercase().as_str() {
                "pilot" => RecordKind::Pilot,
                "drone" => RecordKind::Drone,
                other => return Err(format!("--kind must be pilot or drone, got '{}'", other)),
            };
            let status = required(options, "--status")?
                .parse::<AssetStatus>()
                .map_err(|e| format!("{}", e))?;
            Command::SetStatus {
                kind,
                id: required(options, "--id")?,
                status,
            }
        }
        "import" => Command::Import {
            from: PathBuf::from(required(options, "--from")?),
        },
        "help" | "--help" | "-h" => Command::Help,
        other => return Err(format!("unknown command '{}'", other)),
    };

    Ok(Invocation {
        config,
        json,
        command,
    })
}

fn required(options: &[&str], flag: &str) -> Result<String, String> {
    let mut iter = options.iter();
    while let Some(option) = iter.next() {
        if *option == flag {
            return match iter.next() {
                Some(value) => Ok(value.to_string()),
                None => Err(format!("{} was provided without a value", flag)),
            };
        }
    }
    Err(format!("missing required {} argument", flag))
}
