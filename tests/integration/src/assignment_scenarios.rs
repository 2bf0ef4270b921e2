//! Worked assignment scenarios through both store backends

use crate::test_utils::{init_test_logging, scenario_workbook, temp_path, TempFile};
use skylark_advisory::{AssignmentAdvisor, Conflict};
use skylark_roster::{Roster, TagSet};
use skylark_store::{RosterStore, SqliteStore, WorkbookStore};

fn backends() -> Vec<(&'static str, Box<dyn RosterStore>)> {
    let mut sqlite = SqliteStore::open_in_memory().unwrap();
    sqlite.import_workbook(&scenario_workbook()).unwrap();

    let workbook: Box<dyn RosterStore> = Box::new(WorkbookStore::in_memory(scenario_workbook()));
    let sqlite: Box<dyn RosterStore> = Box::new(sqlite);
    vec![("workbook", workbook), ("sqlite", sqlite)]
}

fn for_each_roster(check: impl Fn(&str, &Roster)) {
    init_test_logging();
    for (name, store) in backends() {
        let roster = store.load_roster().unwrap();
        check(name, &roster);
    }
}

#[test]
fn test_compatible_local_pilot_and_drone() {
    for_each_roster(|backend, roster| {
        let advisor = AssignmentAdvisor::new(roster);

        let conflicts = advisor.check_conflicts("P1", "D1", "M1").unwrap();
        assert!(conflicts.is_empty(), "{}: {:?}", backend, conflicts);

        let report = advisor.find_best_matches("M1").unwrap();
        let top = report.top_pilot().unwrap();
        assert_eq!((top.id.as_str(), top.score), ("P1", 20), "{}", backend);
    });
}

#[test]
fn test_remote_pilot_on_leave_without_skills() {
    for_each_roster(|backend, roster| {
        let conflicts = AssignmentAdvisor::new(roster)
            .check_conflicts("P2", "D1", "M1")
            .unwrap();

        assert_eq!(
            conflicts,
            vec![
                Conflict::MissingSkills {
                    missing: TagSet::parse("thermal"),
                },
                Conflict::PilotOnLeave {
                    pilot_name: "Neha".to_string(),
                },
                Conflict::PilotLocationMismatch {
                    pilot_location: "Delhi".to_string(),
                    mission_location: "Mumbai".to_string(),
                },
            ],
            "{}",
            backend
        );
    });
}

#[test]
fn test_drone_in_maintenance() {
    for_each_roster(|backend, roster| {
        let advisor = AssignmentAdvisor::new(roster);

        let conflicts = advisor.check_conflicts("P1", "D2", "M1").unwrap();
        let messages: Vec<String> = conflicts.iter().map(ToString::to_string).collect();
        assert_eq!(messages, vec!["Drone D2 is currently in Maintenance"], "{}", backend);

        let report = advisor.find_best_matches("M1").unwrap();
        let d2 = report.drones.iter().find(|c| c.id == "D2").unwrap();
        assert_eq!(d2.score, 10, "{}", backend);
    });
}

#[test]
fn test_empty_requirements_at_matching_location() {
    for_each_roster(|backend, roster| {
        // M2 is in Delhi with no requirements; P2 is there but on leave
        let conflicts = AssignmentAdvisor::new(roster)
            .check_conflicts("P2", "D1", "M2")
            .unwrap();
        let messages: Vec<String> = conflicts.iter().map(ToString::to_string).collect();

        assert_eq!(
            messages,
            vec![
                "Pilot Neha is currently On Leave",
                "Location alert: drone is in Mumbai, mission is in Delhi",
            ],
            "{}",
            backend
        );
    });
}

#[test]
fn test_routine_mission_ranking_keeps_row_order_on_ties() {
    for_each_roster(|backend, roster| {
        let report = AssignmentAdvisor::new(roster).find_best_matches("M2").unwrap();

        let pilots: Vec<_> = report.pilots.iter().map(|c| (c.id.as_str(), c.score)).collect();
        assert_eq!(pilots, vec![("P2", 10), ("P1", 5)], "{}", backend);

        let drones: Vec<_> = report.drones.iter().map(|c| (c.id.as_str(), c.score)).collect();
        assert_eq!(drones, vec![("D1", 5), ("D2", 0)], "{}", backend);
    });
}

#[test]
fn test_report_json_shape() {
    let path = TempFile(temp_path("scenario_workbook", "json"));
    let store = WorkbookStore::create(&path.0, scenario_workbook()).unwrap();
    let roster = store.load_roster().unwrap();

    let report = AssignmentAdvisor::new(&roster).find_best_matches("M1").unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["mission_id"], "M1");
    assert_eq!(json["pilots"][0]["id"], "P1");
    assert_eq!(json["pilots"][0]["label"], "Arjun");
    assert_eq!(json["pilots"][0]["score"], 20);
}

#[test]
fn test_free_text_priority_ranks_as_routine() {
    init_test_logging();
    let mut workbook = scenario_workbook();
    workbook
        .worksheet_mut("missions")
        .unwrap()
        .push_row(["M3", "Client C", "Mumbai", "", "", "Critical"]);

    let mut sqlite = SqliteStore::open_in_memory().unwrap();
    sqlite.import_workbook(&workbook).unwrap();
    let sqlite: Box<dyn RosterStore> = Box::new(sqlite);
    let workbook: Box<dyn RosterStore> = Box::new(WorkbookStore::in_memory(workbook));

    for (backend, store) in [("workbook", workbook), ("sqlite", sqlite)] {
        let roster = store.load_roster().unwrap();
        let advisor = AssignmentAdvisor::new(&roster);

        let report = advisor.find_best_matches("M3").unwrap();
        let pilots: Vec<_> = report.pilots.iter().map(|c| (c.id.as_str(), c.score)).collect();
        assert_eq!(pilots, vec![("P1", 15), ("P2", 0)], "{}", backend);

        let report = advisor.find_best_matches("M1").unwrap();
        assert_eq!(report.top_pilot().unwrap().score, 20, "{}", backend);
    }
}
