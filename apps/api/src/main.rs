use anyhow::Context;
use axum::http::{header, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aurabeats_api::config::Config;
use aurabeats_api::{api_router, AppState, MetadataEnricher, SuggestionGenerator, SuggestionPipeline};
use aurabeats_catalog_client::CatalogClient;
use aurabeats_ollama_client::OllamaClient;

/// Build the CORS layer based on configuration.
///
/// - `CORS_ORIGINS` set: only those origins are allowed
/// - unset in production: cross-origin requests are rejected
/// - unset otherwise: permissive
fn build_cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) => {
            let allowed_origins: Vec<_> = origins
                .iter()
                .filter_map(|origin| {
                    origin.parse().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                        None
                    })
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::error!("No valid CORS origins configured, CORS requests will be rejected");
                CorsLayer::new()
            } else {
                tracing::info!(
                    "CORS configured with {} allowed origin(s): {:?}",
                    allowed_origins.len(),
                    origins
                );
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
                    .max_age(std::time::Duration::from_secs(3600))
            }
        }
        None if config.is_production() => {
            tracing::warn!(
                "CORS_ORIGINS not configured in production mode. \
                 CORS requests will be rejected."
            );
            CorsLayer::new()
        }
        None => {
            tracing::warn!("Using permissive CORS in development mode");
            CorsLayer::permissive()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aurabeats_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        environment = %config.environment(),
        ollama_url = %config.ollama().url,
        model = %config.ollama().model,
        catalog_url = %config.catalog().url,
        "Starting AuraBeats API server"
    );

    let ollama = OllamaClient::new(config.ollama()).context("Failed to build Ollama client")?;
    let catalog = CatalogClient::new(config.catalog()).context("Failed to build catalog client")?;

    // Missing model or unreachable backend is not fatal; /health reports it
    match ollama.has_model().await {
        Ok(true) => tracing::info!("Model '{}' is available", config.ollama().model),
        Ok(false) => tracing::warn!(
            "Model '{}' not found on backend. Try running 'ollama pull {}'",
            config.ollama().model,
            config.ollama().model
        ),
        Err(e) => tracing::warn!(error = %e, "Could not list backend models"),
    }

    let pipeline = SuggestionPipeline::new(
        SuggestionGenerator::new(ollama),
        MetadataEnricher::new(catalog),
    );

    let app = api_router(AppState::new(pipeline))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
