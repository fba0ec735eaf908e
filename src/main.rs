//! StrictlyHeal server entry point.

use std::sync::Arc;

use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strictlyheal::adapters::http::{api_router, ApiHandlers};
use strictlyheal::adapters::memory::{
    CatalogSeed, InMemoryCaseStudyRepository, InMemoryContactSubmissionRepository,
    InMemoryIndustryRepository, InMemoryServiceRepository,
};
use strictlyheal::adapters::records::{
    RecordStoreClient, RecordStoreClientConfig, RecordStoreContactRepository,
};
use strictlyheal::config::{AppConfig, RecordStoreConfig};
use strictlyheal::ports::ContactSubmissionRepository;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    config.validate().context("validating configuration")?;

    init_tracing(&config);

    let seed = CatalogSeed::bundled().context("parsing bundled catalog")?;
    info!(
        services = seed.services.len(),
        industries = seed.industries.len(),
        case_studies = seed.case_studies.len(),
        "Catalog loaded"
    );

    let contacts = contact_repository(config.record_store.as_ref())?;

    let handlers = ApiHandlers::from_repositories(
        Arc::new(InMemoryServiceRepository::with_services(seed.services)),
        Arc::new(InMemoryIndustryRepository::with_industries(seed.industries)),
        Arc::new(InMemoryCaseStudyRepository::with_case_studies(
            seed.case_studies,
        )),
        contacts,
    );
    let app = api_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    info!(%addr, environment = ?config.server.environment, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

fn contact_repository(
    record_store: Option<&RecordStoreConfig>,
) -> Result<Arc<dyn ContactSubmissionRepository>> {
    match record_store {
        Some(store) => {
            let client_config = RecordStoreClientConfig::new(
                store.base_url.clone(),
                store.project_id.clone(),
                store.public_key.expose_secret().as_str(),
            )
            .with_timeout(store.timeout())
            .with_max_retries(store.max_retries);
            let client =
                RecordStoreClient::new(client_config).context("building record store client")?;
            info!(base_url = %store.base_url, "Contact submissions go to the record store");
            Ok(Arc::new(RecordStoreContactRepository::new(client)))
        }
        None => {
            warn!("No record store configured; contact submissions are kept in memory");
            Ok(Arc::new(InMemoryContactSubmissionRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
