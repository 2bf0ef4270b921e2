//! Closed enums for asset status and mission priority

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::RosterError;

/// Operational status of a pilot or drone
///
/// Pilots and drones share the same column vocabulary. `Maintenance` carries
/// no meaning for a pilot but is accepted there as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetStatus {
    /// Ready for assignment
    Available,
    /// Pilot is away
    #[serde(rename = "On Leave")]
    OnLeave,
    /// Drone is being serviced
    Maintenance,
    /// Already committed to a mission
    Assigned,
}

impl AssetStatus {
    /// All values, in the order the dashboard offers them
    pub const ALL: [AssetStatus; 4] = [
        AssetStatus::Available,
        AssetStatus::OnLeave,
        AssetStatus::Maintenance,
        AssetStatus::Assigned,
    ];

    /// Sheet spelling of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::OnLeave => "On Leave",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::Assigned => "Assigned",
        }
    }
}

impl FromStr for AssetStatus {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "available" => Ok(AssetStatus::Available),
            "onleave" => Ok(AssetStatus::OnLeave),
            "maintenance" => Ok(AssetStatus::Maintenance),
            "assigned" => Ok(AssetStatus::Assigned),
            _ => Err(RosterError::UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Mission priority
///
/// The sheet column is free text. Only `Urgent` changes ranking; any other
/// non-blank text is kept verbatim as `Other` and ranks as routine work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MissionPriority {
    /// Availability weighs double when ranking
    Urgent,
    /// High
    High,
    /// Routine work; also used for a blank cell
    #[default]
    Medium,
    /// Low
    Low,
    /// Unrecognized sheet text
    Other(String),
}

impl MissionPriority {
    /// Read a priority cell; never fails
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" => MissionPriority::default(),
            "urgent" => MissionPriority::Urgent,
            "high" => MissionPriority::High,
            "medium" | "normal" | "standard" => MissionPriority::Medium,
            "low" => MissionPriority::Low,
            _ => {
                warn!(priority = s, "Unrecognized mission priority, ranking as routine");
                MissionPriority::Other(s.trim().to_string())
            }
        }
    }

    /// Whether ranking should favour availability
    pub fn is_urgent(&self) -> bool {
        matches!(self, MissionPriority::Urgent)
    }

    /// Sheet spelling of the priority
    pub fn as_str(&self) -> &str {
        match self {
            MissionPriority::Urgent => "Urgent",
            MissionPriority::High => "High",
            MissionPriority::Medium => "Medium",
            MissionPriority::Low => "Low",
            MissionPriority::Other(text) => text,
        }
    }
}

impl FromStr for MissionPriority {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MissionPriority::parse(s))
    }
}

impl From<String> for MissionPriority {
    fn from(s: String) -> Self {
        MissionPriority::parse(&s)
    }
}

impl From<MissionPriority> for String {
    fn from(priority: MissionPriority) -> Self {
        priority.as_str().to_string()
    }
}

impl fmt::Display for MissionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
