//! Skylark Advisory
//!
//! Assignment advisory engine for pilot/drone/mission triples.
//!
//! Two independent passes over an immutable [`Roster`] snapshot:
//! - **Conflict checking**: validates a proposed pilot, drone and mission
//!   against skills, certifications, availability and location
//! - **Match scoring**: ranks every pilot and drone for a mission by
//!   availability and location
//!
//! Scoring ignores skills and certifications entirely; a high score is a
//! suggestion, and the conflict check is the confirmation step.
//!
//! # Examples
//!
//! ```
//! use skylark_advisory::AssignmentAdvisor;
//! use skylark_roster::{AssetStatus, Drone, Mission, MissionPriority, Pilot, Roster, TagSet};
//!
//! let roster = Roster::new(
//!     vec![Pilot::new("P1", "Arjun", "Mumbai", AssetStatus::Available)
//!         .with_skills(TagSet::parse("thermal, mapping"))],
//!     vec![Drone::new("D1", "DJI M300", "Mumbai", AssetStatus::Available)],
//!     vec![Mission::new("M1", "Mumbai", MissionPriority::Urgent)
//!         .with_required_skills(TagSet::parse("thermal"))],
//! )
//! .unwrap();
//!
//! let advisor = AssignmentAdvisor::new(&roster);
//! assert!(advisor.check_conflicts("P1", "D1", "M1").unwrap().is_empty());
//! assert_eq!(advisor.find_best_matches("M1").unwrap().pilots[0].score, 20);
//! ```

#![warn(missing_docs)]

pub mod advisor;
pub mod conflicts;
pub mod scoring;

pub use advisor::AssignmentAdvisor;
pub use conflicts::{check_conflicts, Conflict};
pub use scoring::{find_best_matches, Candidate, MatchReport, MatchScorer};

pub use skylark_roster::{Roster, RosterError};
