//! Conflict detection for a proposed assignment
//!
//! Every check runs regardless of earlier failures. The result is the
//! concatenation of whichever checks fire, in this fixed order:
//! skills, certifications, drone maintenance, pilot leave, pilot location,
//! drone location.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use skylark_roster::{AssetStatus, Drone, Mission, Pilot, Result, Roster, TagSet};

/// A detected mismatch between a proposed triple and the mission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Conflict {
    /// Pilot lacks required skills
    MissingSkills {
        /// Required skills minus the pilot's skills
        missing: TagSet,
    },
    /// Pilot lacks required certifications
    MissingCertifications {
        /// Required certifications minus the pilot's certifications
        missing: TagSet,
    },
    /// Drone is being serviced
    DroneInMaintenance {
        /// Drone identifier
        drone_id: String,
    },
    /// Pilot is on leave
    PilotOnLeave {
        /// Pilot display name
        pilot_name: String,
    },
    /// Pilot is based elsewhere
    PilotLocationMismatch {
        /// Pilot location
        pilot_location: String,
        /// Mission location
        mission_location: String,
    },
    /// Drone is staged elsewhere
    DroneLocationMismatch {
        /// Drone location
        drone_location: String,
        /// Mission location
        mission_location: String,
    },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::MissingSkills { missing } => {
                write!(f, "Skill mismatch: pilot lacks {}", missing)
            }
            Conflict::MissingCertifications { missing } => {
                write!(f, "Certification mismatch: pilot lacks {}", missing)
            }
            Conflict::DroneInMaintenance { drone_id } => {
                write!(f, "Drone {} is currently in Maintenance", drone_id)
            }
            Conflict::PilotOnLeave { pilot_name } => {
                write!(f, "Pilot {} is currently On Leave", pilot_name)
            }
            Conflict::PilotLocationMismatch {
                pilot_location,
                mission_location,
            } => write!(
                f,
                "Location alert: pilot is in {}, mission is in {}",
                pilot_location, mission_location
            ),
            Conflict::DroneLocationMismatch {
                drone_location,
                mission_location,
            } => write!(
                f,
                "Location alert: drone is in {}, mission is in {}",
                drone_location, mission_location
            ),
        }
    }
}

/// Check a proposed pilot, drone and mission for conflicts
///
/// # Returns
/// * `Ok(vec![])` - The triple is compatible
/// * `Ok(conflicts)` - Every detected conflict, in check order
/// * `Err(RosterError::NotFound)` - An identifier does not resolve
pub fn check_conflicts(
    roster: &Roster,
    pilot_id: &str,
    drone_id: &str,
    mission_id: &str,
) -> Result<Vec<Conflict>> {
    let pilot = roster.pilot(pilot_id)?;
    let drone = roster.drone(drone_id)?;
    let mission = roster.mission(mission_id)?;

    let conflicts = evaluate(pilot, drone, mission);

    debug!(
        pilot_id,
        drone_id,
        mission_id,
        conflicts = conflicts.len(),
        "Assignment checked"
    );

    Ok(conflicts)
}

/// Run all six checks against already-resolved records
pub fn evaluate(pilot: &Pilot, drone: &Drone, mission: &Mission) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    if !mission.required_skills.is_subset(&pilot.skills) {
        conflicts.push(Conflict::MissingSkills {
            missing: mission.required_skills.difference(&pilot.skills),
        });
    }

    if !mission.required_certs.is_subset(&pilot.certifications) {
        conflicts.push(Conflict::MissingCertifications {
            missing: mission.required_certs.difference(&pilot.certifications),
        });
    }

    if drone.status == AssetStatus::Maintenance {
        conflicts.push(Conflict::DroneInMaintenance {
            drone_id: drone.drone_id.clone(),
        });
    }

    if pilot.status == AssetStatus::OnLeave {
        conflicts.push(Conflict::PilotOnLeave {
            pilot_name: pilot.name.clone(),
        });
    }

    if pilot.location != mission.location {
        conflicts.push(Conflict::PilotLocationMismatch {
            pilot_location: pilot.location.clone(),
            mission_location: mission.location.clone(),
        });
    }

    if drone.location != mission.location {
        conflicts.push(Conflict::DroneLocationMismatch {
            drone_location: drone.location.clone(),
            mission_location: mission.location.clone(),
        });
    }

    conflicts
}
