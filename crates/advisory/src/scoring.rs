//! Heuristic candidate ranking
//!
//! Every pilot and every drone is scored against the mission; nothing is
//! filtered out. Two bonuses apply:
//! - Availability: 10 points for urgent missions, 5 otherwise, only when
//!   the candidate is `Available`
//! - Location: 10 points when the candidate's location equals the mission's
//!   exactly
//!
//! Scores therefore fall in {0, 5, 10, 15, 20}. This is a ranking aid, not
//! an optimal assignment; it does not look at skills or certifications.

use serde::{Deserialize, Serialize};
use tracing::debug;

use skylark_roster::{Mission, Result, Roster, RosterAsset};

/// A ranked pilot or drone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Pilot or drone identifier
    pub id: String,
    /// Pilot name or drone model
    pub label: String,
    /// Heuristic score, 0 to 20
    pub score: u8,
}

/// Ranked candidates for one mission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Mission the candidates were ranked for
    pub mission_id: String,
    /// Pilots, best first
    pub pilots: Vec<Candidate>,
    /// Drones, best first
    pub drones: Vec<Candidate>,
}

impl MatchReport {
    /// Highest-ranked pilot, if any pilots exist
    pub fn top_pilot(&self) -> Option<&Candidate> {
        self.pilots.first()
    }

    /// Highest-ranked drone, if any drones exist
    pub fn top_drone(&self) -> Option<&Candidate> {
        self.drones.first()
    }
}

/// Availability/location scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer;

impl MatchScorer {
    /// Availability bonus on urgent missions
    pub const URGENT_AVAILABILITY_BONUS: u8 = 10;
    /// Availability bonus on every other mission
    pub const ROUTINE_AVAILABILITY_BONUS: u8 = 5;
    /// Bonus for sharing the mission's location
    pub const LOCATION_BONUS: u8 = 10;
    /// Upper bound of any score
    pub const MAX_SCORE: u8 = Self::URGENT_AVAILABILITY_BONUS + Self::LOCATION_BONUS;

    /// Create a scorer
    pub fn new() -> Self {
        Self
    }

    /// Score one candidate against a mission
    pub fn score<A: RosterAsset + ?Sized>(&self, asset: &A, mission: &Mission) -> u8 {
        let mut score = 0;

        if asset.is_available() {
            score += if mission.is_urgent() {
                Self::URGENT_AVAILABILITY_BONUS
            } else {
                Self::ROUTINE_AVAILABILITY_BONUS
            };
        }

        if asset.location() == mission.location {
            score += Self::LOCATION_BONUS;
        }

        score
    }

    /// Score and rank a relation, best first; ties keep row order
    pub fn rank<'a, A, I>(&self, assets: I, mission: &Mission) -> Vec<Candidate>
    where
        A: RosterAsset + 'a,
        I: IntoIterator<Item = &'a A>,
    {
        let mut candidates: Vec<Candidate> = assets
            .into_iter()
            .map(|asset| Candidate {
                id: asset.asset_id().to_string(),
                label: asset.label().to_string(),
                score: self.score(asset, mission),
            })
            .collect();

        // sort_by is stable
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates
    }

    /// Rank all pilots and drones for a mission in the snapshot
    pub fn find_best_matches(&self, roster: &Roster, mission_id: &str) -> Result<MatchReport> {
        let mission = roster.mission(mission_id)?;

        let report = MatchReport {
            mission_id: mission.project_id.clone(),
            pilots: self.rank(roster.pilots(), mission),
            drones: self.rank(roster.drones(), mission),
        };

        debug!(
            mission_id,
            urgent = mission.is_urgent(),
            pilots = report.pilots.len(),
            drones = report.drones.len(),
            "Candidates ranked"
        );

        Ok(report)
    }
}

/// Rank all pilots and drones for a mission with the default scorer
pub fn find_best_matches(roster: &Roster, mission_id: &str) -> Result<MatchReport> {
    MatchScorer::new().find_best_matches(roster, mission_id)
}
