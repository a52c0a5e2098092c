use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::scoring::{Candidate, CandidateId};

/// Fixed key holding the candidate array in the persisted document.
pub const CANDIDATES_KEY: &str = "ospa_candidates";
/// Fixed key holding the last successful sync time.
pub const LAST_SYNC_KEY: &str = "ospa_last_sync";

/// Storage abstraction so the service can be exercised in isolation.
///
/// Records keep insertion order; `put` on an existing id replaces it in place
/// (last write wins).
pub trait CandidateStore: Send + Sync {
    fn list(&self) -> Result<Vec<Candidate>, StoreError>;
    fn put(&self, candidate: Candidate) -> Result<(), StoreError>;
    /// Returns `false` when no record had the id.
    fn delete(&self, id: &CandidateId) -> Result<bool, StoreError>;
    fn last_sync(&self) -> Result<Option<DateTime<Utc>>, StoreError>;
    fn record_sync(&self, at: DateTime<Utc>) -> Result<(), StoreError>;

    fn fetch(&self, id: &CandidateId) -> Result<Option<Candidate>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|candidate| &candidate.id == id))
    }
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("store document is malformed: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default)]
struct StoreDocument {
    candidates: Vec<Candidate>,
    /// Raw entries that failed to load; written back untouched.
    unreadable: Vec<Value>,
    last_sync: Option<DateTime<Utc>>,
}

/// On-disk shape; candidates stay raw so one bad record cannot hide the rest.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileDocument {
    #[serde(rename = "ospa_candidates", default)]
    candidates: Vec<Value>,
    #[serde(
        rename = "ospa_last_sync",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    last_sync: Option<DateTime<Utc>>,
}

impl From<FileDocument> for StoreDocument {
    fn from(file: FileDocument) -> Self {
        let mut document = StoreDocument {
            last_sync: file.last_sync,
            ..StoreDocument::default()
        };
        for (index, raw) in file.candidates.into_iter().enumerate() {
            match Candidate::deserialize(&raw) {
                Ok(candidate) => document.candidates.push(candidate),
                Err(err) => {
                    let id = raw.get("id").and_then(Value::as_str).unwrap_or("<missing>");
                    warn!(index, id, error = %err, "skipping unreadable candidate record");
                    document.unreadable.push(raw);
                }
            }
        }
        document
    }
}

impl StoreDocument {
    fn upsert(&mut self, candidate: Candidate) {
        match self
            .candidates
            .iter_mut()
            .find(|existing| existing.id == candidate.id)
        {
            Some(existing) => *existing = candidate,
            None => self.candidates.push(candidate),
        }
    }

    fn remove(&mut self, id: &CandidateId) -> bool {
        let before = self.candidates.len();
        self.candidates.retain(|candidate| &candidate.id != id);
        self.candidates.len() != before
    }
}

/// JSON file store: one document mapping [`CANDIDATES_KEY`] to the candidate array.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.lock
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn read(&self) -> Result<StoreDocument, StoreError> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(StoreDocument::default());
        }
        let file: FileDocument = serde_json::from_str(&contents)?;
        Ok(file.into())
    }

    fn write(&self, document: &StoreDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut candidates = document
            .candidates
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        candidates.extend(document.unreadable.iter().cloned());
        let file = FileDocument {
            candidates,
            last_sync: document.last_sync,
        };
        let contents = serde_json::to_string_pretty(&file)?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, contents)?;
        fs::rename(&staging, &self.path)?;
        debug!(
            path = %self.path.display(),
            records = document.candidates.len(),
            "candidate store written"
        );
        Ok(())
    }
}

impl CandidateStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        let _guard = self.guard()?;
        Ok(self.read()?.candidates)
    }

    fn put(&self, candidate: Candidate) -> Result<(), StoreError> {
        let _guard = self.guard()?;
        let mut document = self.read()?;
        document.upsert(candidate);
        self.write(&document)
    }

    fn delete(&self, id: &CandidateId) -> Result<bool, StoreError> {
        let _guard = self.guard()?;
        let mut document = self.read()?;
        let removed = document.remove(id);
        if removed {
            self.write(&document)?;
        }
        Ok(removed)
    }

    fn last_sync(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        let _guard = self.guard()?;
        Ok(self.read()?.last_sync)
    }

    fn record_sync(&self, at: DateTime<Utc>) -> Result<(), StoreError> {
        let _guard = self.guard()?;
        let mut document = self.read()?;
        document.last_sync = Some(at);
        self.write(&document)
    }
}

/// Process-local store used by tests and ephemeral servers.
#[derive(Debug, Default)]
pub struct InMemoryCandidateStore {
    document: Mutex<StoreDocument>,
}

impl InMemoryCandidateStore {
    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        Self {
            document: Mutex::new(StoreDocument {
                candidates,
                ..StoreDocument::default()
            }),
        }
    }

    fn document(&self) -> Result<MutexGuard<'_, StoreDocument>, StoreError> {
        self.document
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

impl CandidateStore for InMemoryCandidateStore {
    fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        Ok(self.document()?.candidates.clone())
    }

    fn put(&self, candidate: Candidate) -> Result<(), StoreError> {
        self.document()?.upsert(candidate);
        Ok(())
    }

    fn delete(&self, id: &CandidateId) -> Result<bool, StoreError> {
        Ok(self.document()?.remove(id))
    }

    fn last_sync(&self) -> Result<Option<DateTime<Utc>>, StoreError> {
        Ok(self.document()?.last_sync)
    }

    fn record_sync(&self, at: DateTime<Utc>) -> Result<(), StoreError> {
        self.document()?.last_sync = Some(at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_replaces_existing_record_in_place() {
        let store = InMemoryCandidateStore::default();
        let first = Candidate::new("Ana Reyes", "Rizal HS", "Pasig");
        let second = Candidate::new("Ben Cruz", "Marikina HS", "Marikina");
        store.put(first.clone()).expect("put first");
        store.put(second.clone()).expect("put second");

        let mut renamed = first.clone();
        renamed.name = "Ana R. Santos".to_string();
        store.put(renamed).expect("replace first");

        let names: Vec<String> = store
            .list()
            .expect("list")
            .into_iter()
            .map(|candidate| candidate.name)
            .collect();
        assert_eq!(names, vec!["Ana R. Santos".to_string(), "Ben Cruz".to_string()]);
    }

    #[test]
    fn delete_reports_missing_ids() {
        let candidate = Candidate::new("Ana Reyes", "Rizal HS", "Pasig");
        let store = InMemoryCandidateStore::with_candidates(vec![candidate.clone()]);

        assert!(store.delete(&candidate.id).expect("delete"));
        assert!(!store.delete(&candidate.id).expect("second delete"));
        assert!(store.fetch(&candidate.id).expect("fetch").is_none());
    }
}
