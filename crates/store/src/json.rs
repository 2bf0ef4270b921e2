//! JSON workbook backend
//!
//! The workbook lives in a single JSON file. Every load re-reads the file and
//! every update rewrites it, so edits made by other tools between calls are
//! picked up on the next load and overwritten by the next update.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use skylark_roster::Roster;

use crate::error::Result;
use crate::workbook::Workbook;
use crate::RosterStore;

/// Workbook store backed by a JSON file, or held purely in memory
#[derive(Debug, Clone)]
pub struct WorkbookStore {
    path: Option<PathBuf>,
    workbook: Workbook,
}

impl WorkbookStore {
    /// Open an existing workbook file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Opening workbook store");

        let workbook = read_workbook(path)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            workbook,
        })
    }

    /// Write `workbook` to `path` and open it
    pub fn create(path: impl AsRef<Path>, workbook: Workbook) -> Result<Self> {
        let path = path.as_ref();
        write_workbook(path, &workbook)?;
        Ok(Self {
            path: Some(path.to_path_buf()),
            workbook,
        })
    }

    /// Store that never touches the filesystem
    pub fn in_memory(workbook: Workbook) -> Self {
        Self {
            path: None,
            workbook,
        }
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Workbook as of the last load or update
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    fn refresh(&self) -> Result<Workbook> {
        match &self.path {
            Some(path) => read_workbook(path),
            None => Ok(self.workbook.clone()),
        }
    }
}

impl RosterStore for WorkbookStore {
    fn load_roster(&self) -> Result<Roster> {
        self.refresh()?.load_roster()
    }

    fn update_field(
        &mut self,
        tab: &str,
        id_column: &str,
        id: &str,
        column: &str,
        value: &str,
    ) -> Result<()> {
        let mut workbook = self.refresh()?;
        workbook.update_field(tab, id_column, id, column, value)?;

        if let Some(path) = &self.path {
            write_workbook(path, &workbook)?;
        }
        self.workbook = workbook;

        info!(tab, id, column, value, "Workbook cell updated");
        Ok(())
    }
}

fn read_workbook(path: &Path) -> Result<Workbook> {
    let raw = std::fs::read_to_string(path)?;
    let workbook: Workbook = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), worksheets = workbook.worksheets.len(), "Workbook read");
    Ok(workbook)
}

fn write_workbook(path: &Path, workbook: &Workbook) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Write beside the target then rename, so a crash never leaves half a file
    let staging = path.with_extension("json.tmp");
    std::fs::write(&staging, serde_json::to_vec_pretty(workbook)?)?;
    std::fs::rename(&staging, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::workbook::tests::sample_workbook;
    use skylark_roster::{AssetStatus, RecordKind};

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("test_workbook_{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_in_memory_update_and_reload() {
        let mut store = WorkbookStore::in_memory(sample_workbook());
        assert!(store.path().is_none());

        store
            .update_status(RecordKind::Pilot, "P002", AssetStatus::Available)
            .unwrap();

        let roster = store.load_roster().unwrap();
        assert_eq!(roster.pilot("P002").unwrap().status, AssetStatus::Available);
    }

    #[test]
    fn test_file_round_trip() {
        let path = temp_path();
        let mut store = WorkbookStore::create(&path, sample_workbook()).unwrap();

        store
            .update_status(RecordKind::Drone, "D002", AssetStatus::Assigned)
            .unwrap();

        let reopened = WorkbookStore::open(&path).unwrap();
        let roster = reopened.load_roster().unwrap();
        assert_eq!(roster.drone("D002").unwrap().status, AssetStatus::Assigned);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_snapshot_does_not_see_later_updates() {
        let path = temp_path();
        let mut store = WorkbookStore::create(&path, sample_workbook()).unwrap();

        let before = store.load_roster().unwrap();
        store
            .update_status(RecordKind::Pilot, "P001", AssetStatus::OnLeave)
            .unwrap();

        assert_eq!(before.pilot("P001").unwrap().status, AssetStatus::Available);
        assert_eq!(
            store.load_roster().unwrap().pilot("P001").unwrap().status,
            AssetStatus::OnLeave
        );

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_external_edit_picked_up_on_load() {
        let path = temp_path();
        let store = WorkbookStore::create(&path, sample_workbook()).unwrap();

        let mut edited = sample_workbook();
        edited
            .update_field("missions", "project_id", "PRJ001", "priority", "Low")
            .unwrap();
        std::fs::write(&path, serde_json::to_vec(&edited).unwrap()).unwrap();

        assert!(!store.load_roster().unwrap().mission("PRJ001").unwrap().is_urgent());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_update_failures_are_distinguishable() {
        let mut store = WorkbookStore::in_memory(sample_workbook());

        assert!(matches!(
            store.update_status(RecordKind::Pilot, "P404", AssetStatus::Assigned),
            Err(StoreError::IdNotFound { .. })
        ));
        assert!(matches!(
            store.update_status(RecordKind::Mission, "PRJ001", AssetStatus::Assigned),
            Err(StoreError::ColumnNotFound { .. })
        ));
        assert!(matches!(
            store.update_field("weather", "id", "W1", "status", "x"),
            Err(StoreError::SheetNotFound(_))
        ));
    }

    #[test]
    fn test_open_missing_file() {
        assert!(matches!(WorkbookStore::open(temp_path()), Err(StoreError::Io(_))));
    }
}
