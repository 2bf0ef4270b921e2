//! Plain-text rendering of engine output

use serde::Serialize;
use skylark_advisory::{Candidate, Conflict, MatchReport};
use skylark_roster::{Roster, RosterAsset};
use skylark_store::StoreError;

/// JSON body for `set-status`
#[derive(Debug, Serialize)]
pub struct UpdateOutput {
    pub success: bool,
    pub message: String,
}

impl UpdateOutput {
    pub fn from_result(id: &str, result: &Result<(), StoreError>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                message: status_updated(id).trim_end().to_string(),
            },
            Err(e) => Self {
                success: false,
                message: e.to_string(),
            },
        }
    }
}

pub fn status_updated(id: &str) -> String {
    format!("Successfully updated {}\n", id)
}

pub fn roster(roster: &Roster) -> String {
    let mut out = String::new();

    out.push_str("Live Roster\n");
    for pilot in roster.pilots() {
        out.push_str(&format!(
            "  {:<8} {:<16} {:<12} {:<12} skills={} certs={}\n",
            pilot.asset_id(),
            pilot.label(),
            pilot.location(),
            pilot.status(),
            pilot.skills,
            pilot.certifications
        ));
    }

    out.push_str("Live Fleet\n");
    for drone in roster.drones() {
        out.push_str(&format!(
            "  {:<8} {:<16} {:<12} {:<12} capabilities={}\n",
            drone.asset_id(),
            drone.label(),
            drone.location(),
            drone.status(),
            drone.capabilities
        ));
    }

    out.push_str("Missions\n");
    for mission in roster.missions() {
        out.push_str(&format!(
            "  {:<8} {:<12} {:<8} skills={} certs={}\n",
            mission.project_id,
            mission.location,
            mission.priority,
            mission.required_skills,
            mission.required_certs
        ));
    }

    out
}

pub fn matches(report: &MatchReport) -> String {
    let mut out = format!("Best matches for {}\n", report.mission_id);
    out.push_str("Top Pilots:\n");
    push_candidates(&mut out, &report.pilots);
    out.push_str("Top Drones:\n");
    push_candidates(&mut out, &report.drones);
    out
}

fn push_candidates(out: &mut String, candidates: &[Candidate]) {
    if candidates.is_empty() {
        out.push_str("  (none)\n");
    }
    for candidate in candidates {
        out.push_str(&format!(
            "  {:>2}  {:<8} {}\n",
            candidate.score, candidate.id, candidate.label
        ));
    }
}

pub fn conflicts(conflicts: &[Conflict]) -> String {
    if conflicts.is_empty() {
        return "No conflicts detected. Assignment is safe.\n".to_string();
    }

    conflicts
        .iter()
        .map(|conflict| format!("CONFLICT: {}\n", conflict))
        .collect()
}
