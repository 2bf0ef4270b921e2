//! Skylark Store
//!
//! Roster store adapters. The system of record is spreadsheet-shaped: three
//! tabs (`pilot_roster`, `drone_fleet`, `missions`), each a header row over
//! data rows. Adapters load the tabs wholesale into an immutable
//! [`Roster`](skylark_roster::Roster) and perform single-cell point updates.
//!
//! Writes are last-write-wins. Nothing detects concurrent edits between a
//! load and a later update, and a snapshot never refreshes itself; reload
//! after an update to observe it.

#![warn(missing_docs)]

pub mod error;
pub mod json;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod workbook;

pub use error::{Result, StoreError};
pub use json::WorkbookStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
pub use workbook::{RosterTab, Workbook, Worksheet, STATUS_COLUMN};

use skylark_core::config::{StoreBackend, StoreConfig};
use skylark_roster::{AssetStatus, RecordKind, Roster};

/// Point-update access to the roster system of record
pub trait RosterStore {
    /// Load all three tabs into a fresh snapshot
    fn load_roster(&self) -> Result<Roster>;

    /// Set `column` on the row of `tab` whose `id_column` equals `id`
    ///
    /// # Returns
    /// * `Err(StoreError::SheetNotFound)` - No such tab
    /// * `Err(StoreError::IdNotFound)` - No row carries the identifier
    /// * `Err(StoreError::ColumnNotFound)` - The tab has no such column
    fn update_field(
        &mut self,
        tab: &str,
        id_column: &str,
        id: &str,
        column: &str,
        value: &str,
    ) -> Result<()>;

    /// Set the `status` cell of a pilot or drone
    fn update_status(&mut self, kind: RecordKind, id: &str, status: AssetStatus) -> Result<()> {
        let tab = RosterTab::from(kind);
        self.update_field(tab.title(), tab.id_column(), id, STATUS_COLUMN, status.as_str())
    }
}

/// Open the backend named by the `[store]` config section
pub fn open_store(config: &StoreConfig) -> Result<Box<dyn RosterStore>> {
    match config.backend {
        StoreBackend::Workbook => Ok(Box::new(WorkbookStore::open(&config.path)?)),
        #[cfg(feature = "sqlite")]
        StoreBackend::Sqlite => Ok(Box::new(SqliteStore::open(&config.path)?)),
        #[cfg(not(feature = "sqlite"))]
        StoreBackend::Sqlite => Err(StoreError::BackendUnavailable("sqlite".to_string())),
    }
}
