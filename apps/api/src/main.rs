mod analysis;
mod config;
mod datastore;
mod errors;
mod llm_client;
mod models;
mod opportunities;
mod profiles;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::engine::AnalysisEngine;
use crate::analysis::remote::{OpenAiAnalyzer, RemoteAnalyzer};
use crate::config::Config;
use crate::datastore::Datastore;
use crate::llm_client::LlmClient;
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

    info!("Starting Orienta API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the datastore boundary client
    let datastore = Datastore::new(config.datastore_url.clone(), config.datastore_api_key.clone());

    // Initialize the remote analyzer when an LLM key is configured;
    // otherwise the engine runs local-only from day one.
    let remote: Option<Arc<dyn RemoteAnalyzer>> = match &config.openai_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(OpenAiAnalyzer::new(LlmClient::new(key.clone()))))
        }
        None => None,
    };
    let engine = AnalysisEngine::new(remote);

    // Build app state
    let state = AppState { datastore, engine };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
