use jobdeck_core::{
    BoardService, Category, Company, DecisionOutcome, JobApplication, JobStore, Status, StoreError,
};

fn sample_job(role: &str, category: Category) -> JobApplication {
    let mut job = JobApplication::new(role, category);
    job.company = Company {
        name: "TechCorp".to_string(),
        size: "Enterprise".to_string(),
        industry: "Software".to_string(),
    };
    job.location = "Berlin".to_string();
    job.hybrid = true;
    job.skills = vec!["Node.js".to_string(), "Express".to_string()];
    job.percentage = Some(50);
    job
}

#[test]
fn add_and_get_roundtrip() {
    let mut store = JobStore::new();
    let job = sample_job("Backend Developer", Category::Interested);
    let added = store.add_job(job.clone()).unwrap();
    assert_eq!(added, job);

    let loaded = store.get_job(job.id).unwrap();
    assert_eq!(loaded.role, "Backend Developer");
    assert_eq!(loaded.category, Category::Interested);
    assert_eq!(loaded.company.name, "TechCorp");
}

#[test]
fn duplicate_id_is_rejected_and_store_unchanged() {
    let mut store = JobStore::new();
    let job = sample_job("Backend Developer", Category::Interested);
    store.add_job(job.clone()).unwrap();

    let mut clash = sample_job("Another Role", Category::Applied);
    clash.id = job.id;
    let err = store.add_job(clash).unwrap_err();

    assert!(matches!(err, StoreError::DuplicateId(id) if id == job.id));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get_job(job.id).unwrap().role, "Backend Developer");
}

#[test]
fn update_replaces_in_place_and_keeps_order() {
    let mut store = JobStore::new();
    let first = sample_job("First", Category::Interested);
    let second = sample_job("Second", Category::Applied);
    store.add_job(first.clone()).unwrap();
    store.add_job(second.clone()).unwrap();

    let mut edited = first.clone();
    edited.role = "First (edited)".to_string();
    edited.status = Status::Unset;
    store.update_job(edited).unwrap();

    let ids: Vec<_> = store.jobs().iter().map(|job| job.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(store.get_job(first.id).unwrap().role, "First (edited)");
}

#[test]
fn update_unknown_id_returns_not_found() {
    let mut store = JobStore::new();
    let job = sample_job("Missing", Category::Applied);
    let err = store.update_job(job.clone()).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == job.id));
}

#[test]
fn invalid_record_is_rejected_on_add() {
    let mut store = JobStore::new();
    let mut job = sample_job("Over-confident", Category::Applied);
    job.percentage = Some(120);
    let err = store.add_job(job).unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.is_empty());
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut interview = sample_job("Senior FE Developer", Category::Interview);
    interview.status = Status::Interview {
        round: 2,
        description: Some("Technical".to_string()),
    };
    let mut decision = sample_job("Full Stack Engineer", Category::Decision);
    decision.status = Status::Decision {
        outcome: DecisionOutcome::Offer,
    };
    let store = JobStore::from_jobs(vec![interview, decision]).unwrap();

    let json = serde_json::to_string(store.jobs()).unwrap();
    let restored: Vec<JobApplication> = serde_json::from_str(&json).unwrap();
    let reloaded = JobStore::from_jobs(restored).unwrap();

    assert_eq!(reloaded.jobs(), store.jobs());
}

#[test]
fn service_add_recomputes_sections() {
    let mut service = BoardService::new();
    let job = service
        .add_job(sample_job("Backend Developer", Category::Interested))
        .unwrap();

    let interested = service.sections().section(Category::Interested);
    assert_eq!(interested.len(), 1);
    assert_eq!(interested[0].id, job.id);
}

#[test]
fn service_edit_moves_record_between_sections() {
    let mut service = BoardService::new();
    let job = service
        .add_job(sample_job("Backend Developer", Category::Interested))
        .unwrap();

    let mut edited = job.clone();
    edited.category = Category::Applied;
    service.edit_job(edited).unwrap();

    assert!(service.sections().section(Category::Interested).is_empty());
    assert_eq!(service.sections().section(Category::Applied).len(), 1);
}

#[test]
fn service_edit_unknown_record_is_rejected() {
    let mut service = BoardService::new();
    let ghost = sample_job("Ghost", Category::Applied);
    let err = service.edit_job(ghost).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert_eq!(service.jobs().len(), 0);
}
