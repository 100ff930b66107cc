mod config;
mod errors;
mod insights;
mod llm_client;
mod models;
mod quiz;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::insights::gemini::GeminiGateway;
use crate::insights::{InsightsGateway, OfflineGateway};
use crate::llm_client::LlmClient;
use crate::quiz::machine::QuizMachine;
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize insights gateway (offline when no API key is configured)
    let gateway: Arc<dyn InsightsGateway> = match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.insights_timeout)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(GeminiGateway::new(llm))
        }
        None => {
            warn!("GEMINI_API_KEY not set, serving fallback insights only");
            Arc::new(OfflineGateway)
        }
    };

    info!("Quiz flow: {:?}", config.flow);
    let session = Session::new(
        QuizMachine::new(config.flow),
        gateway,
        config.insights_timeout,
    );

    // Build app state
    let state = AppState { session };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
