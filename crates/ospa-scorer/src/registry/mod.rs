//! Candidate registry: local record store, one-way sheet sync, CSV export and
//! the HTTP surface over them.

pub mod export;
pub(crate) mod form;
pub mod router;
pub mod service;
pub mod store;
pub mod sync;

#[cfg(test)]
mod tests;

pub use export::{export_file_name, export_to_dir, write_csv, ExportError, EXPORT_HEADERS};
pub use form::{is_known_division, ValidationError, NCR_DIVISIONS};
pub use router::nomination_router;
pub use service::{NominationService, NominationServiceError, SaveOutcome};
pub use store::{
    CandidateStore, InMemoryCandidateStore, JsonFileStore, StoreError, CANDIDATES_KEY,
    LAST_SYNC_KEY,
};
pub use sync::{SheetRow, SheetsSyncGateway, SyncGateway};
