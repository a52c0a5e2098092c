use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};

use super::export::{self, ExportError};
use super::form::{validate_nominee, ValidationError};
use super::store::{CandidateStore, StoreError};
use super::sync::SyncGateway;
use crate::scoring::{
    Candidate, CandidateId, InstanceEntry, InstanceId, InstanceList, InterviewDimension,
    InterviewRating,
};

/// Service composing the record store and the sheet sync gateway.
pub struct NominationService<S, G> {
    store: Arc<S>,
    gateway: Arc<G>,
}

/// Result of an explicit save: the stored record and whether the sync succeeded.
#[derive(Debug, Clone, Serialize)]
pub struct SaveOutcome {
    pub candidate: Candidate,
    pub synced: bool,
}

impl<S, G> NominationService<S, G>
where
    S: CandidateStore + 'static,
    G: SyncGateway + 'static,
{
    pub fn new(store: Arc<S>, gateway: Arc<G>) -> Self {
        Self { store, gateway }
    }

    pub fn list(&self) -> Result<Vec<Candidate>, NominationServiceError> {
        Ok(self.store.list()?)
    }

    pub fn get(&self, id: &CandidateId) -> Result<Candidate, NominationServiceError> {
        self.store
            .fetch(id)?
            .ok_or_else(|| NominationServiceError::NotFound(id.clone()))
    }

    /// Validate, persist locally, then attempt a single sync. A failed sync
    /// leaves the local record in place.
    pub async fn save(
        &self,
        mut candidate: Candidate,
    ) -> Result<SaveOutcome, NominationServiceError> {
        validate_nominee(&candidate)?;
        candidate.touch();
        self.store.put(candidate.clone())?;
        info!(candidate = %candidate.id, total = candidate.total_score(), "candidate saved");

        let synced = self.gateway.send(std::slice::from_ref(&candidate)).await;
        if synced {
            self.mark_synced();
        }

        Ok(SaveOutcome { candidate, synced })
    }

    pub fn delete(&self, id: &CandidateId) -> Result<(), NominationServiceError> {
        if self.store.delete(id)? {
            info!(candidate = %id, "candidate deleted");
            Ok(())
        } else {
            Err(NominationServiceError::NotFound(id.clone()))
        }
    }

    /// Load, mutate and `put` are separate store calls: overlapping edits to
    /// the same candidate keep only the last write.
    pub fn add_instance(
        &self,
        id: &CandidateId,
        list: InstanceList,
        entry: InstanceEntry,
    ) -> Result<(Candidate, InstanceId), NominationServiceError> {
        let mut candidate = self.get(id)?;
        let instance_id = candidate.add_instance(list, entry);
        self.store.put(candidate.clone())?;
        Ok((candidate, instance_id))
    }

    pub fn remove_instance(
        &self,
        id: &CandidateId,
        list: InstanceList,
        instance_id: &InstanceId,
    ) -> Result<Candidate, NominationServiceError> {
        let mut candidate = self.get(id)?;
        if candidate.remove_instance(list, instance_id).is_none() {
            return Err(NominationServiceError::InstanceNotFound(instance_id.clone()));
        }
        self.store.put(candidate.clone())?;
        Ok(candidate)
    }

    pub fn rate_interview(
        &self,
        id: &CandidateId,
        dimension: InterviewDimension,
        rating: InterviewRating,
    ) -> Result<Candidate, NominationServiceError> {
        let mut candidate = self.get(id)?;
        candidate.rate_interview(dimension, rating);
        self.store.put(candidate.clone())?;
        Ok(candidate)
    }

    /// Send every stored candidate in one call.
    pub async fn sync_all(&self) -> Result<bool, NominationServiceError> {
        let candidates = self.store.list()?;
        let synced = self.gateway.send(&candidates).await;
        if synced {
            self.mark_synced();
        }
        Ok(synced)
    }

    pub fn last_sync(&self) -> Result<Option<DateTime<Utc>>, NominationServiceError> {
        Ok(self.store.last_sync()?)
    }

    /// CSV export of every stored candidate; `None` when there is nothing to export.
    pub fn export(
        &self,
        dir: &Path,
        date: NaiveDate,
    ) -> Result<Option<PathBuf>, NominationServiceError> {
        let candidates = self.store.list()?;
        Ok(export::export_to_dir(&candidates, dir, date)?)
    }

    /// In-memory CSV rendering; `None` when there is nothing to export.
    pub fn export_csv(&self) -> Result<Option<String>, NominationServiceError> {
        let candidates = self.store.list()?;
        if candidates.is_empty() {
            return Ok(None);
        }
        let mut buffer = Vec::new();
        export::write_csv(&candidates, &mut buffer)?;
        Ok(Some(String::from_utf8_lossy(&buffer).into_owned()))
    }

    // The remote copy is already updated; a failed timestamp write is only logged.
    fn mark_synced(&self) {
        if let Err(err) = self.store.record_sync(Utc::now()) {
            warn!(error = %err, "unable to record last sync time");
        }
    }
}

/// Error raised by the nomination service.
#[derive(Debug, thiserror::Error)]
pub enum NominationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("candidate {0} not found")]
    NotFound(CandidateId),
    #[error("instance {0} not found")]
    InstanceNotFound(InstanceId),
}
