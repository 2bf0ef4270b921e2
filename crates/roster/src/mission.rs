//! Mission domain model

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{Record, RecordKind};
use crate::status::MissionPriority;
use crate::tags::TagSet;

/// Field mission (row of the `missions` tab)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Unique project identifier
    pub project_id: String,

    /// Client name, if listed
    pub client: Option<String>,

    /// City or region where the mission is flown
    pub location: String,

    /// Scheduling priority
    pub priority: MissionPriority,

    /// Skills the pilot must hold
    pub required_skills: TagSet,

    /// Certifications the pilot must hold
    pub required_certs: TagSet,
}

impl Mission {
    /// Identifier column of the missions tab
    pub const ID_COLUMN: &'static str = "project_id";

    /// Create a mission with no requirements
    pub fn new(
        project_id: impl Into<String>,
        location: impl Into<String>,
        priority: MissionPriority,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            client: None,
            location: location.into(),
            priority,
            required_skills: TagSet::new(),
            required_certs: TagSet::new(),
        }
    }

    /// Builder: set required skills
    pub fn with_required_skills(mut self, skills: TagSet) -> Self {
        self.required_skills = skills;
        self
    }

    /// Builder: set required certifications
    pub fn with_required_certs(mut self, certs: TagSet) -> Self {
        self.required_certs = certs;
        self
    }

    /// Parse a sheet row
    pub fn from_record(record: &Record) -> Result<Self> {
        let kind = RecordKind::Mission;
        Ok(Self {
            project_id: record.require(kind, Self::ID_COLUMN)?.trim().to_string(),
            client: record
                .get("client")
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            location: record.get("location").unwrap_or_default().to_string(),
            priority: MissionPriority::parse(record.get("priority").unwrap_or_default()),
            required_skills: record.tags("required_skills"),
            required_certs: record.tags("required_certs"),
        })
    }

    /// Whether availability should weigh double when ranking
    pub fn is_urgent(&self) -> bool {
        self.priority.is_urgent()
    }
}
