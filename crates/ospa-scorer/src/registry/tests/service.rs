use super::common::*;
use crate::registry::store::CandidateStore;
use crate::registry::{NominationService, NominationServiceError, ValidationError};
use crate::scoring::{
    CandidateId, InstanceEntry, InstanceId, InstanceList, InterviewDimension, InterviewRating,
    Level,
};
use std::sync::Arc;

#[tokio::test]
async fn save_persists_and_syncs_single_candidate() {
    let (service, store, gateway) = build_service(RecordingGateway::accepting());

    let outcome = service.save(nominee()).await.expect("save succeeds");

    assert!(outcome.synced);
    assert_eq!(outcome.candidate.total_score(), 54.0);
    assert_eq!(store.list().expect("list").len(), 1);
    assert_eq!(
        gateway.batches(),
        vec![vec![CandidateId("cand-001".to_string())]]
    );
    assert!(service.last_sync().expect("last sync").is_some());
}

#[tokio::test]
async fn failed_sync_keeps_local_record() {
    let (service, store, _) = build_service(RecordingGateway::rejecting());

    let outcome = service.save(nominee()).await.expect("save succeeds");

    assert!(!outcome.synced);
    assert!(store
        .fetch(&outcome.candidate.id)
        .expect("fetch")
        .is_some());
    assert!(service.last_sync().expect("last sync").is_none());
}

#[tokio::test]
async fn save_rejects_incomplete_nominee_before_syncing() {
    let (service, store, gateway) = build_service(RecordingGateway::accepting());

    match service.save(blank_school_nominee()).await {
        Err(NominationServiceError::Validation(ValidationError::MissingField("school"))) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(store.list().expect("list").is_empty());
    assert!(gateway.batches().is_empty());
}

#[tokio::test]
async fn saving_twice_replaces_the_record() {
    let (service, store, _) = build_service(RecordingGateway::accepting());
    service.save(nominee()).await.expect("first save");

    let mut edited = nominee();
    edited.performance_rating = false;
    service.save(edited).await.expect("second save");

    let stored = store.list().expect("list");
    assert_eq!(stored.len(), 1);
    assert!(!stored[0].performance_rating);
}

#[test]
fn get_and_delete_report_missing_candidates() {
    let service = seeded_service(Vec::new());
    let missing = CandidateId("missing".to_string());

    match service.get(&missing) {
        Err(NominationServiceError::NotFound(id)) => assert_eq!(id, missing),
        other => panic!("expected not found, got {other:?}"),
    }
    assert!(matches!(
        service.delete(&missing),
        Err(NominationServiceError::NotFound(_))
    ));
}

#[test]
fn instance_edits_recompute_the_stored_total() {
    let service = seeded_service(vec![nominee()]);
    let id = CandidateId("cand-001".to_string());

    let (candidate, instance_id) = service
        .add_instance(&id, InstanceList::Innovations, InstanceEntry::at(Level::District))
        .expect("instance added");
    assert_eq!(candidate.total_score(), 62.0);
    assert_eq!(service.get(&id).expect("stored").total_score(), 62.0);

    let candidate = service
        .remove_instance(&id, InstanceList::Innovations, &instance_id)
        .expect("instance removed");
    assert_eq!(candidate.total_score(), 54.0);
}

#[test]
fn removing_unknown_instance_is_not_found() {
    let service = seeded_service(vec![nominee()]);

    let result = service.remove_instance(
        &CandidateId("cand-001".to_string()),
        InstanceList::Books,
        &InstanceId("nope".to_string()),
    );

    assert!(matches!(
        result,
        Err(NominationServiceError::InstanceNotFound(_))
    ));
}

#[test]
fn rating_interview_updates_total() {
    let service = seeded_service(vec![nominee()]);

    let candidate = service
        .rate_interview(
            &CandidateId("cand-001".to_string()),
            InterviewDimension::Growth,
            InterviewRating::Insufficient,
        )
        .expect("rating stored");

    assert_eq!(candidate.total_score(), 54.4);
}

#[tokio::test]
async fn sync_all_sends_every_candidate_in_one_batch() {
    let (service, store, gateway) = build_service(RecordingGateway::accepting());
    let mut other = nominee();
    other.id = CandidateId("cand-002".to_string());
    store.put(nominee()).expect("seed first");
    store.put(other).expect("seed second");

    assert!(service.sync_all().await.expect("sync runs"));

    let batches = gateway.batches();
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].len(), 2);
    assert!(service.last_sync().expect("last sync").is_some());
}

#[test]
fn export_csv_is_none_for_empty_registry() {
    let service = seeded_service(Vec::new());
    assert!(service.export_csv().expect("export runs").is_none());

    let service = seeded_service(vec![nominee()]);
    let csv = service.export_csv().expect("export runs").expect("rows");
    assert_eq!(csv.lines().count(), 2);
}

#[tokio::test]
async fn store_failures_propagate() {
    let service = NominationService::new(
        Arc::new(UnavailableStore),
        Arc::new(RecordingGateway::accepting()),
    );

    assert!(matches!(
        service.list(),
        Err(NominationServiceError::Store(_))
    ));
    assert!(matches!(
        service.save(nominee()).await,
        Err(NominationServiceError::Store(_))
    ));
}
