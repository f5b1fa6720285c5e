mod catalog;
mod config;
mod errors;
mod filter;
mod job_source;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::JobCatalog;
use crate::config::Config;
use crate::job_source::HttpJobSource;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobboard API v{}", env!("CARGO_PKG_VERSION"));

    let job_source = HttpJobSource::new(
        config.jobs_api_url.clone(),
        Duration::from_secs(config.fetch_timeout_secs),
    )
    .context("Failed to build job listing HTTP client")?;
    info!("Job source: {}", config.jobs_api_url);
    info!(
        "Salary buckets parsed as '{}', page reset on filter: {}",
        config.salary_bucket_units, config.reset_page_on_filter
    );

    let state = AppState {
        catalog: Arc::new(JobCatalog::new()),
        job_source: Arc::new(job_source),
        config: config.clone(),
    };

    // Initial fetch. A failure leaves the catalog empty until the next refresh.
    if let Err(e) = state
        .catalog
        .refresh(state.job_source.as_ref(), &config.initial_keyword)
        .await
    {
        warn!("Initial job fetch failed, starting with an empty catalog: {e}");
    }

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .frontend_url
                .parse::<HeaderValue>()
                .context("FRONTEND_URL must be a valid origin")?,
        )
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION])
        .allow_credentials(true);

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
