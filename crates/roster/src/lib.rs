//! Skylark Roster
//!
//! Domain model for the drone-operations roster.
//!
//! This crate provides:
//! - Tag sets parsed once from comma-delimited sheet cells
//! - Closed enums for asset status and mission priority
//! - Pilot, drone and mission records parsed at the sheet boundary
//! - An immutable [`Roster`] snapshot with identifier lookup
//!
//! Nothing here performs I/O. Records arrive from a store adapter as
//! header-keyed rows and leave as typed values.

#![warn(missing_docs)]

pub mod assets;
pub mod error;
pub mod mission;
pub mod record;
pub mod roster;
pub mod status;
pub mod tags;

pub use assets::{Drone, Pilot, RosterAsset};
pub use error::{Result, RosterError};
pub use mission::Mission;
pub use record::{Record, RecordKind};
pub use roster::Roster;
pub use status::{AssetStatus, MissionPriority};
pub use tags::TagSet;
