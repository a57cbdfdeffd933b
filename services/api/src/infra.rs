use metrics_exporter_prometheus::PrometheusHandle;
use pigment_match::error::AppError;
use pigment_match::workflows::pigments::{CatalogImporter, PigmentCatalog};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the catalog from a CSV export, or the bundled standard catalog when no path is set.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<PigmentCatalog, AppError> {
    match path {
        Some(path) => {
            let catalog = CatalogImporter::from_path(path)?;
            info!(path = %path.display(), entries = catalog.len(), "pigment catalog imported");
            Ok(catalog)
        }
        None => Ok(PigmentCatalog::standard()),
    }
}
