//! Immutable roster snapshot
//!
//! A [`Roster`] holds the three relations exactly as loaded, in row order,
//! plus identifier indices. It is built once per request and handed to the
//! advisory engine by reference; nothing mutates it afterwards.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::assets::{Drone, Pilot};
use crate::error::{Result, RosterError};
use crate::mission::Mission;
use crate::record::{Record, RecordKind};

/// Snapshot of pilots, drones and missions
#[derive(Debug, Clone, Default, Serialize)]
pub struct Roster {
    pilots: Vec<Pilot>,
    drones: Vec<Drone>,
    missions: Vec<Mission>,

    #[serde(skip)]
    pilot_index: HashMap<String, usize>,
    #[serde(skip)]
    drone_index: HashMap<String, usize>,
    #[serde(skip)]
    mission_index: HashMap<String, usize>,
}

impl Roster {
    /// Build a snapshot, rejecting duplicate identifiers within a relation
    pub fn new(pilots: Vec<Pilot>, drones: Vec<Drone>, missions: Vec<Mission>) -> Result<Self> {
        let pilot_index = build_index(RecordKind::Pilot, pilots.iter().map(|p| &p.pilot_id))?;
        let drone_index = build_index(RecordKind::Drone, drones.iter().map(|d| &d.drone_id))?;
        let mission_index =
            build_index(RecordKind::Mission, missions.iter().map(|m| &m.project_id))?;

        debug!(
            pilots = pilots.len(),
            drones = drones.len(),
            missions = missions.len(),
            "Roster snapshot built"
        );

        Ok(Self {
            pilots,
            drones,
            missions,
            pilot_index,
            drone_index,
            mission_index,
        })
    }

    /// Parse three tabs worth of records into a snapshot
    pub fn from_records(pilots: &[Record], drones: &[Record], missions: &[Record]) -> Result<Self> {
        let pilots = pilots
            .iter()
            .map(Pilot::from_record)
            .collect::<Result<Vec<_>>>()?;
        let drones = drones
            .iter()
            .map(Drone::from_record)
            .collect::<Result<Vec<_>>>()?;
        let missions = missions
            .iter()
            .map(Mission::from_record)
            .collect::<Result<Vec<_>>>()?;

        Self::new(pilots, drones, missions)
    }

    /// Look up a pilot by identifier
    pub fn pilot(&self, pilot_id: &str) -> Result<&Pilot> {
        lookup(&self.pilots, &self.pilot_index, RecordKind::Pilot, pilot_id)
    }

    /// Look up a drone by identifier
    pub fn drone(&self, drone_id: &str) -> Result<&Drone> {
        lookup(&self.drones, &self.drone_index, RecordKind::Drone, drone_id)
    }

    /// Look up a mission by project identifier
    pub fn mission(&self, project_id: &str) -> Result<&Mission> {
        lookup(&self.missions, &self.mission_index, RecordKind::Mission, project_id)
    }

    /// Pilots in row order
    pub fn pilots(&self) -> &[Pilot] {
        &self.pilots
    }

    /// Drones in row order
    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    /// Missions in row order
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    /// Check if all three relations are empty
    pub fn is_empty(&self) -> bool {
        self.pilots.is_empty() && self.drones.is_empty() && self.missions.is_empty()
    }
}

fn build_index<'a, I>(kind: RecordKind, ids: I) -> Result<HashMap<String, usize>>
where
    I: Iterator<Item = &'a String>,
{
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.clone(), position).is_some() {
            return Err(RosterError::DuplicateId {
                kind,
                id: id.clone(),
            });
        }
    }
    Ok(index)
}

fn lookup<'a, T>(
    items: &'a [T],
    index: &HashMap<String, usize>,
    kind: RecordKind,
    id: &str,
) -> Result<&'a T> {
    index
        .get(id)
        .and_then(|&position| items.get(position))
        .ok_or_else(|| RosterError::NotFound {
            kind,
            id: id.to_string(),
        })
}
