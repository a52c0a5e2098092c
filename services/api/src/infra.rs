use metrics_exporter_prometheus::PrometheusHandle;
use ospa_scorer::config::AppConfig;
use ospa_scorer::error::AppError;
use ospa_scorer::registry::{JsonFileStore, NominationService, SheetsSyncGateway};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

pub(crate) type Registry = NominationService<JsonFileStore, SheetsSyncGateway>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wires the file store and sheet gateway described by `config`.
pub(crate) fn build_registry(config: &AppConfig) -> Result<Registry, AppError> {
    let store = JsonFileStore::new(config.storage.path.clone());
    let gateway = SheetsSyncGateway::new(config.sync.clone())?;
    Ok(NominationService::new(Arc::new(store), Arc::new(gateway)))
}
