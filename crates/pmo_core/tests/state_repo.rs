use pmo_core::db::open_db_in_memory;
use pmo_core::{
    AppState, Project, ProjectStatus, RepoError, Resource, Risk, RiskStatus, SqliteStateRepository,
    StateRepository, ValidationError,
};

fn sample_state() -> AppState {
    let mut alpha = Project::with_id("p1", "Alpha")
        .allocate("r2", 16.0)
        .allocate("r1", 24.5)
        .allocate("ghost", 3.0);
    alpha.status = ProjectStatus::Active;
    alpha.start_date = Some(1_700_000_000_000);
    alpha.end_date = Some(1_700_600_000_000);

    let mut risk = Risk::with_id("k1", "Vendor delay", 4, 3);
    risk.project_id = Some("p1".to_string());
    risk.status = RiskStatus::Mitigated;

    AppState {
        resources: vec![
            Resource::with_id("r2", "Grace Hopper", "Architect", 32.0),
            Resource::with_id("r1", "Ada Lovelace", "Engineer", 40.0),
        ],
        projects: vec![alpha, Project::with_id("p0", "Beta")],
        risks: vec![risk],
    }
}

#[test]
fn replace_and_load_preserves_order_and_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);
    let state = sample_state();

    repo.replace_state(&state).unwrap();
    let loaded = repo.load_state().unwrap();

    assert_eq!(loaded, state);
    assert_eq!(loaded.resources[0].avatar, "GH");
}

#[test]
fn replace_state_discards_previous_records() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);
    repo.replace_state(&sample_state()).unwrap();

    let next = AppState {
        resources: vec![Resource::with_id("r9", "Linus", "Engineer", 20.0)],
        ..AppState::default()
    };
    repo.replace_state(&next).unwrap();

    assert_eq!(repo.load_state().unwrap(), next);
}

#[test]
fn replace_state_rolls_back_on_duplicate_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);
    let original = sample_state();
    repo.replace_state(&original).unwrap();

    let broken = AppState {
        resources: vec![
            Resource::with_id("r1", "A", "x", 1.0),
            Resource::with_id("r1", "B", "y", 2.0),
        ],
        ..AppState::default()
    };
    let err = repo.replace_state(&broken).unwrap_err();
    assert!(
        matches!(err, RepoError::Duplicate { table: "resources", ref id } if id == "r1"),
        "unexpected error: {err}"
    );

    assert_eq!(repo.load_state().unwrap(), original);
}

#[test]
fn replace_state_validates_before_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);
    repo.replace_state(&sample_state()).unwrap();

    let invalid = AppState {
        risks: vec![Risk::with_id("k9", "off scale", 6, 1)],
        ..AppState::default()
    };
    let err = repo.replace_state(&invalid).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::InvalidRiskScale { probability: 6, .. })
    ));

    assert_eq!(repo.list_risks().unwrap().len(), 1);
}

#[test]
fn create_methods_validate_and_detect_duplicates() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    let resource = Resource::new("Ada Lovelace", "Engineer", 40.0);
    assert_eq!(repo.create_resource(&resource).unwrap(), resource.id);
    assert!(matches!(
        repo.create_resource(&resource).unwrap_err(),
        RepoError::Duplicate { table: "resources", .. }
    ));

    let bad_capacity = Resource::with_id("r-bad", "Bad", "x", -1.0);
    assert!(matches!(
        repo.create_resource(&bad_capacity).unwrap_err(),
        RepoError::Validation(ValidationError::InvalidCapacity { .. })
    ));

    let project = Project::new("Gamma").allocate(resource.id.clone(), 12.0);
    repo.create_project(&project).unwrap();
    let projects = repo.list_projects().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].allocations[0].resource_id, resource.id);

    let risk = Risk::new("Budget overrun", 2, 5);
    repo.create_risk(&risk).unwrap();
    assert_eq!(repo.list_risks().unwrap()[0].id, risk.id);
}

#[test]
fn invalid_persisted_status_is_rejected_on_read() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "PRAGMA ignore_check_constraints = ON;
         INSERT INTO projects (id, name, status) VALUES ('p1', 'Alpha', 'archived');",
    )
    .unwrap();
    let repo = SqliteStateRepository::new(&conn);

    let err = repo.list_projects().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(ref message) if message.contains("archived")));
}

#[test]
fn risks_may_reference_unknown_projects() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStateRepository::new(&conn);

    let mut orphan = Risk::with_id("k7", "Vendor exit", 3, 4);
    orphan.project_id = Some("p-deleted".to_string());
    let state = AppState {
        risks: vec![orphan],
        ..AppState::default()
    };

    repo.replace_state(&state).unwrap();

    let risks = repo.list_risks().unwrap();
    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].project_id.as_deref(), Some("p-deleted"));
}
