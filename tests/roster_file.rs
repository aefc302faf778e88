// Filesystem scenarios for the roster store and session: whole-file
// round-trips, the missing-file first run, malformed files, and the
// first-match contract on duplicate IDs across save/reload.

use rosterman_cli::model::Employee;
use rosterman_cli::roster::Roster;
use rosterman_cli::session::RosterSession;
use rosterman_cli::store::FileStore;
use tempfile::tempdir;

fn sample_records() -> Vec<Employee> {
    vec![
        Employee::new("Alice", 1, "Engineer", 50000.0),
        Employee::new("Bob", 2, "Manager", 70000.0),
    ]
}

#[test]
fn save_then_load_round_trips_in_order() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("employees.txt"));

    let records = sample_records();
    store.save(&records).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, records);
}

#[test]
fn saved_file_is_one_line_per_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.txt");
    FileStore::new(&path).save(&sample_records()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "Alice,1,Engineer,50000\nBob,2,Manager,70000\n");
}

#[test]
fn save_truncates_previous_contents() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("employees.txt"));

    store.save(&sample_records()).unwrap();
    store
        .save(&[Employee::new("Carol", 3, "Director", 90000.0)])
        .unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Carol");
}

#[test]
fn load_missing_file_returns_none() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("absent.txt"));
    assert!(store.load().unwrap().is_none());
}

#[test]
fn load_empty_file_returns_empty_roster() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.txt");
    std::fs::write(&path, "").unwrap();

    let loaded = FileStore::new(&path).load().unwrap().unwrap();
    assert!(loaded.is_empty());
    assert!(Roster::from_records(loaded).is_empty());
}

#[test]
fn load_rejects_malformed_id_with_line_number() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.txt");
    std::fs::write(&path, "Alice,abc,Engineer,50000\n").unwrap();

    let err = FileStore::new(&path).load().unwrap_err();
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn load_rejects_wrong_field_count_with_line_number() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.txt");
    std::fs::write(&path, "Alice,1,Engineer,50000\nBob,2,Manager\n").unwrap();

    let err = FileStore::new(&path).load().unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn save_to_unwritable_path_fails_and_leaves_records_alone() {
    let dir = tempdir().unwrap();
    // The roster path points through a regular file, so the write fails.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();
    let store = FileStore::new(blocker.join("employees.txt"));

    let records = sample_records();
    assert!(store.save(&records).is_err());
    assert_eq!(records, sample_records());
}

#[test]
fn update_then_reload_changes_only_the_target() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("employees.txt"));
    store.save(&sample_records()).unwrap();

    let mut roster = Roster::from_records(store.load().unwrap().unwrap());
    {
        let employee = roster.find_by_id_mut(1).unwrap();
        employee.name = "Alicia".to_string();
        employee.designation = "Lead Engineer".to_string();
        employee.salary = 61234.5;
    }
    store.save(roster.records()).unwrap();

    let reloaded = store.load().unwrap().unwrap();
    assert_eq!(
        reloaded[0],
        Employee::new("Alicia", 1, "Lead Engineer", 61234.5)
    );
    assert_eq!(reloaded[1], Employee::new("Bob", 2, "Manager", 70000.0));
}

#[test]
fn duplicate_id_chain_deletes_in_file_order() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("employees.txt"));
    store
        .save(&[
            Employee::new("First", 5, "Clerk", 100.0),
            Employee::new("Second", 5, "Clerk", 200.0),
        ])
        .unwrap();

    let mut roster = Roster::from_records(store.load().unwrap().unwrap());
    assert_eq!(roster.find_by_id(5).unwrap().name, "First");

    roster.delete(5).unwrap();
    store.save(roster.records()).unwrap();

    let mut roster = Roster::from_records(store.load().unwrap().unwrap());
    assert_eq!(roster.find_by_id(5).unwrap().name, "Second");
    roster.delete(5).unwrap();
    assert!(roster.records().is_empty());
}

#[test]
fn session_open_on_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("employees.txt"));
    let session = RosterSession::open(store).unwrap();
    assert!(session.roster.is_empty());
}

#[test]
fn session_open_loads_existing_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.txt");
    FileStore::new(&path).save(&sample_records()).unwrap();

    let session = RosterSession::open(FileStore::new(&path)).unwrap();
    assert_eq!(session.roster.len(), 2);
    assert_eq!(session.roster.find_by_id(1).unwrap().name, "Alice");
}

#[test]
fn session_persist_writes_roster_mutations() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.txt");
    FileStore::new(&path).save(&sample_records()).unwrap();

    let mut session = RosterSession::open(FileStore::new(&path)).unwrap();
    session
        .roster
        .add(Employee::new("Carol", 3, "Director", 90000.0));
    session.persist().unwrap();

    let reloaded = FileStore::new(&path).load().unwrap().unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded[2].name, "Carol");
}

#[test]
fn reload_preserves_view_order_and_format() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.txt");
    FileStore::new(&path).save(&sample_records()).unwrap();

    let session = RosterSession::open(FileStore::new(&path)).unwrap();
    let lines: Vec<String> = session.roster.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        lines,
        vec![
            "Employee [name=Alice, id=1, designation=Engineer, salary=50000]",
            "Employee [name=Bob, id=2, designation=Manager, salary=70000]",
        ]
    );
}
