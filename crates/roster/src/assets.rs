//! Pilot and drone domain models
//!
//! Both kinds of candidate implement [`RosterAsset`], which is everything
//! the ranking pass needs to know about them.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{Record, RecordKind};
use crate::status::AssetStatus;
use crate::tags::TagSet;

/// Common view over assignable roster entries
pub trait RosterAsset {
    /// Relation the asset belongs to
    fn kind(&self) -> RecordKind;

    /// Unique identifier within the relation
    fn asset_id(&self) -> &str;

    /// Human-facing label (pilot name, drone model)
    fn label(&self) -> &str;

    /// Current status
    fn status(&self) -> AssetStatus;

    /// Current city or region
    fn location(&self) -> &str;

    /// Check if the asset can take a mission right now
    fn is_available(&self) -> bool {
        self.status() == AssetStatus::Available
    }
}

/// Drone pilot (row of the `pilot_roster` tab)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pilot {
    /// Unique pilot identifier
    pub pilot_id: String,

    /// Display name
    pub name: String,

    /// City or region the pilot is based in
    pub location: String,

    /// Current status
    pub status: AssetStatus,

    /// Flying skills (mapping, inspection, thermal...)
    pub skills: TagSet,

    /// Held certifications
    pub certifications: TagSet,
}

impl Pilot {
    /// Identifier column of the pilot tab
    pub const ID_COLUMN: &'static str = "pilot_id";

    /// Create a pilot with no skills or certifications
    pub fn new(
        pilot_id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        status: AssetStatus,
    ) -> Self {
        Self {
            pilot_id: pilot_id.into(),
            name: name.into(),
            location: location.into(),
            status,
            skills: TagSet::new(),
            certifications: TagSet::new(),
        }
    }

    /// Builder: set skills
    pub fn with_skills(mut self, skills: TagSet) -> Self {
        self.skills = skills;
        self
    }

    /// Builder: set certifications
    pub fn with_certifications(mut self, certifications: TagSet) -> Self {
        self.certifications = certifications;
        self
    }

    /// Parse a sheet row
    pub fn from_record(record: &Record) -> Result<Self> {
        let kind = RecordKind::Pilot;
        Ok(Self {
            pilot_id: record.require(kind, Self::ID_COLUMN)?.trim().to_string(),
            name: record.get("name").unwrap_or_default().trim().to_string(),
            location: record.get("location").unwrap_or_default().to_string(),
            status: record.require(kind, "status")?.parse()?,
            skills: record.tags("skills"),
            certifications: record.tags("certifications"),
        })
    }
}

impl RosterAsset for Pilot {
    fn kind(&self) -> RecordKind {
        RecordKind::Pilot
    }

    fn asset_id(&self) -> &str {
        &self.pilot_id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn status(&self) -> AssetStatus {
        self.status
    }

    fn location(&self) -> &str {
        &self.location
    }
}

/// Drone unit (row of the `drone_fleet` tab)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drone {
    /// Unique drone identifier
    pub drone_id: String,

    /// Airframe model
    pub model: String,

    /// City or region the drone is staged in
    pub location: String,

    /// Current status
    pub status: AssetStatus,

    /// Payload capabilities (lidar, rgb, thermal, mapping...)
    pub capabilities: TagSet,
}

impl Drone {
    /// Identifier column of the drone tab
    pub const ID_COLUMN: &'static str = "drone_id";

    /// Create a drone with no listed capabilities
    pub fn new(
        drone_id: impl Into<String>,
        model: impl Into<String>,
        location: impl Into<String>,
        status: AssetStatus,
    ) -> Self {
        Self {
            drone_id: drone_id.into(),
            model: model.into(),
            location: location.into(),
            status,
            capabilities: TagSet::new(),
        }
    }

    /// Builder: set capabilities
    pub fn with_capabilities(mut self, capabilities: TagSet) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Parse a sheet row
    pub fn from_record(record: &Record) -> Result<Self> {
        let kind = RecordKind::Drone;
        Ok(Self {
            drone_id: record.require(kind, Self::ID_COLUMN)?.trim().to_string(),
            model: record.get("model").unwrap_or_default().trim().to_string(),
            location: record.get("location").unwrap_or_default().to_string(),
            status: record.require(kind, "status")?.parse()?,
            capabilities: record.tags("capabilities"),
        })
    }
}

impl RosterAsset for Drone {
    fn kind(&self) -> RecordKind {
        RecordKind::Drone
    }

    fn asset_id(&self) -> &str {
        &self.drone_id
    }

    fn label(&self) -> &str {
        &self.model
    }

    fn status(&self) -> AssetStatus {
        self.status
    }

    fn location(&self) -> &str {
        &self.location
    }
}
