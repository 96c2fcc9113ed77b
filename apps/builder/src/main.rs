mod assist;
mod config;
mod errors;
mod export;
mod form;
mod models;
mod preview;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assist::gemini::GeminiTransport;
use crate::assist::AssistClient;
use crate::config::Config;
use crate::form::dictation::DictationCapability;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    let assist = match &config.gemini_api_key {
        Some(key) => {
            let transport =
                GeminiTransport::new(&config.gemini_base_url, &config.gemini_model, key.clone())?;
            info!("Assist client initialized (model: {})", config.gemini_model);
            Some(
                AssistClient::new(Arc::new(transport))
                    .with_retry_policy(config.assist_max_attempts, config.assist_base_delay),
            )
        }
        None => {
            warn!("GEMINI_API_KEY not set; summary assist disabled");
            None
        }
    };

    let dictation = DictationCapability {
        available: config.dictation_enabled,
    };
    let state = AppState::new(assist, dictation);

    // Log each recomputed preview's progress as it happens
    let mut previews = state.store()?.subscribe();
    tokio::spawn(async move {
        while previews.changed().await.is_ok() {
            let progress = previews.borrow_and_update().progress;
            debug!("Preview recomputed, progress {progress}%");
        }
    });

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("127.0.0.1:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
