use carbon_footprint::config::EnrichmentConfig;
use carbon_footprint::enrichment::{self, DisabledEnrichmentClient, EnrichmentClient};
use carbon_footprint::error::AppError;
use carbon_footprint::quiz::FootprintService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

pub(crate) type SharedFootprintService = Arc<FootprintService<dyn EnrichmentClient>>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wires the footprint service to the configured enrichment client, or to the
/// disabled client when running offline or without credentials.
pub(crate) fn footprint_service(
    config: &EnrichmentConfig,
    offline: bool,
) -> Result<SharedFootprintService, AppError> {
    let client: Arc<dyn EnrichmentClient> = if offline {
        Arc::new(DisabledEnrichmentClient)
    } else {
        if !config.is_enabled() {
            warn!("OPENAI_API_KEY is not set; results will use static fallback content");
        }
        enrichment::client_from_config(config)?
    };

    Ok(Arc::new(FootprintService::new(client)))
}
