use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::registry::store::{CandidateStore, InMemoryCandidateStore, StoreError};
use crate::registry::sync::SyncGateway;
use crate::registry::{nomination_router, NominationService};
use crate::scoring::{
    Candidate, CandidateId, InstanceEntry, InstanceList, InterviewDimension, InterviewRating,
    Level, Rank,
};

/// Candidate worth 20 + 12 + 15 + 5 + 2.0 = 54.0 points.
pub(super) fn nominee() -> Candidate {
    let mut candidate = Candidate::with_id(
        CandidateId("cand-001".to_string()),
        "Maria Santos",
        "Rizal High School",
        "Pasig",
    );
    candidate.add_instance(
        InstanceList::Individual,
        InstanceEntry::ranked(Level::National, Rank::First),
    );
    candidate.add_instance(
        InstanceList::Group,
        InstanceEntry::ranked(Level::Regional, Rank::First),
    );
    candidate.add_instance(
        InstanceList::Leadership,
        InstanceEntry::role(Level::Division, "President"),
    );
    candidate.add_instance(InstanceList::Speakership, InstanceEntry::at(Level::Division));
    candidate.rate_interview(InterviewDimension::Principles, InterviewRating::Commendable);
    candidate
}

pub(super) fn blank_school_nominee() -> Candidate {
    let mut candidate = nominee();
    candidate.school = "  ".to_string();
    candidate
}

pub(super) type MemoryService = NominationService<InMemoryCandidateStore, RecordingGateway>;

pub(super) fn build_service(
    gateway: RecordingGateway,
) -> (MemoryService, Arc<InMemoryCandidateStore>, Arc<RecordingGateway>) {
    let store = Arc::new(InMemoryCandidateStore::default());
    let gateway = Arc::new(gateway);
    let service = NominationService::new(store.clone(), gateway.clone());
    (service, store, gateway)
}

pub(super) fn seeded_service(candidates: Vec<Candidate>) -> MemoryService {
    NominationService::new(
        Arc::new(InMemoryCandidateStore::with_candidates(candidates)),
        Arc::new(RecordingGateway::accepting()),
    )
}

/// Gateway double that records every batch it is handed.
#[derive(Debug, Default)]
pub(super) struct RecordingGateway {
    accept: bool,
    batches: Mutex<Vec<Vec<CandidateId>>>,
}

impl RecordingGateway {
    pub(super) fn accepting() -> Self {
        Self {
            accept: true,
            batches: Mutex::default(),
        }
    }

    pub(super) fn rejecting() -> Self {
        Self::default()
    }

    pub(super) fn batches(&self) -> Vec<Vec<CandidateId>> {
        self.batches.lock().expect("gateway mutex poisoned").clone()
    }
}

impl SyncGateway for RecordingGateway {
    async fn send(&self, candidates: &[Candidate]) -> bool {
        self.batches
            .lock()
            .expect("gateway mutex poisoned")
            .push(candidates.iter().map(|candidate| candidate.id.clone()).collect());
        self.accept
    }
}

pub(super) struct UnavailableStore;

impl CandidateStore for UnavailableStore {
    fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn put(&self, _candidate: Candidate) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn delete(&self, _id: &CandidateId) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn last_sync(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn record_sync(&self, _at: DateTime<Utc>) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    nomination_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf8 body")
}
