//! Snapshot-bound facade over both advisory passes

use skylark_roster::{Result, Roster};

use crate::conflicts::{self, Conflict};
use crate::scoring::{MatchReport, MatchScorer};

/// Advisory engine bound to one roster snapshot
///
/// Holds a shared borrow, so the snapshot cannot change for as long as the
/// advisor is alive.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentAdvisor<'a> {
    roster: &'a Roster,
    scorer: MatchScorer,
}

impl<'a> AssignmentAdvisor<'a> {
    /// Bind an advisor to a snapshot
    pub fn new(roster: &'a Roster) -> Self {
        Self {
            roster,
            scorer: MatchScorer::new(),
        }
    }

    /// Snapshot the advisor reads from
    pub fn roster(&self) -> &'a Roster {
        self.roster
    }

    /// See [`conflicts::check_conflicts`]
    pub fn check_conflicts(
        &self,
        pilot_id: &str,
        drone_id: &str,
        mission_id: &str,
    ) -> Result<Vec<Conflict>> {
        conflicts::check_conflicts(self.roster, pilot_id, drone_id, mission_id)
    }

    /// See [`MatchScorer::find_best_matches`]
    pub fn find_best_matches(&self, mission_id: &str) -> Result<MatchReport> {
        self.scorer.find_best_matches(self.roster, mission_id)
    }
}
