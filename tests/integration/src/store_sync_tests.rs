//! Status updates flowing from the store into later engine calls

use crate::test_utils::{init_test_logging, scenario_workbook, temp_path, TempFile};
use skylark_advisory::{check_conflicts, find_best_matches};
use skylark_core::config::{StoreBackend, StoreConfig};
use skylark_roster::{AssetStatus, RecordKind, RosterError};
use skylark_store::{open_store, RosterStore, SqliteStore, StoreError, WorkbookStore};

#[test]
fn test_update_visible_only_after_reload() {
    init_test_logging();
    let path = TempFile(temp_path("sync_workbook", "json"));
    let mut store = WorkbookStore::create(&path.0, scenario_workbook()).unwrap();

    let stale = store.load_roster().unwrap();
    store
        .update_status(RecordKind::Drone, "D2", AssetStatus::Available)
        .unwrap();

    assert_eq!(check_conflicts(&stale, "P1", "D2", "M1").unwrap().len(), 1);

    let fresh = store.load_roster().unwrap();
    assert!(check_conflicts(&fresh, "P1", "D2", "M1").unwrap().is_empty());

    let d2 = find_best_matches(&fresh, "M1")
        .unwrap()
        .drones
        .into_iter()
        .find(|c| c.id == "D2")
        .unwrap();
    assert_eq!(d2.score, 20);
}

#[test]
fn test_open_store_from_config() {
    init_test_logging();
    let workbook_path = TempFile(temp_path("config_workbook", "json"));
    WorkbookStore::create(&workbook_path.0, scenario_workbook()).unwrap();

    let db_path = TempFile(temp_path("config_roster", "db"));
    SqliteStore::open(&db_path.0)
        .unwrap()
        .import_workbook(&scenario_workbook())
        .unwrap();

    for (backend, path) in [
        (StoreBackend::Workbook, &workbook_path.0),
        (StoreBackend::Sqlite, &db_path.0),
    ] {
        let mut store = open_store(&StoreConfig {
            backend,
            path: path.clone(),
        })
        .unwrap();

        store
            .update_status(RecordKind::Pilot, "P2", AssetStatus::Available)
            .unwrap();
        let roster = store.load_roster().unwrap();
        assert_eq!(roster.pilot("P2").unwrap().status, AssetStatus::Available);
    }
}

#[test]
fn test_temp_database_cleans_up_sidecars() {
    let db_path = TempFile(temp_path("sidecar_roster", "db"));
    let paths = db_path.paths();
    {
        let mut store = SqliteStore::open(&db_path.0).unwrap();
        store.import_workbook(&scenario_workbook()).unwrap();
        store
            .update_status(RecordKind::Drone, "D2", AssetStatus::Available)
            .unwrap();
    }
    drop(db_path);

    for path in paths {
        assert!(!path.exists(), "{} left behind", path.display());
    }
}

#[test]
fn test_failed_update_leaves_store_untouched() {
    let mut store = WorkbookStore::in_memory(scenario_workbook());

    let err = store
        .update_status(RecordKind::Pilot, "P404", AssetStatus::Assigned)
        .unwrap_err();
    assert!(matches!(err, StoreError::IdNotFound { .. }));
    assert_eq!(store.workbook(), &scenario_workbook());
}

#[test]
fn test_unknown_identifiers_fail_explicitly() {
    let roster = WorkbookStore::in_memory(scenario_workbook())
        .load_roster()
        .unwrap();

    assert!(matches!(
        check_conflicts(&roster, "P1", "D1", "M404"),
        Err(RosterError::NotFound {
            kind: RecordKind::Mission,
            ..
        })
    ));
    assert!(matches!(
        find_best_matches(&roster, "M404"),
        Err(RosterError::NotFound { .. })
    ));
}

#[test]
fn test_duplicate_identifier_in_sheet_rejected_on_load() {
    let mut workbook = scenario_workbook();
    workbook
        .worksheet_mut("drone_fleet")
        .unwrap()
        .push_row(["D1", "Spare", "", "Pune", "Available"]);

    assert!(matches!(
        WorkbookStore::in_memory(workbook).load_roster(),
        Err(StoreError::Roster(RosterError::DuplicateId { .. }))
    ));
}
