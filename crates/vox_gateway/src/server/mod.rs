//! Vox Gateway HTTP Server
//!
//! Routes the web client's AI and translation requests to the dispatch router.

pub mod handlers;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router as AxumRouter,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use voxllm::{ProviderId, ProviderRegistry};

use crate::config::{GatewayConfig, UnknownProviderPolicy};
use crate::dispatch::Dispatcher;
use crate::languages::LanguageNames;

/// Providers the translation endpoint is wired to
pub const TRANSLATE_PROVIDERS: [ProviderId; 2] = [ProviderId::Gemini, ProviderId::Groq];

/// Application state shared across handlers. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dispatcher for `/api/ai`, every provider wired
    pub ai: Dispatcher,
    /// Dispatcher for `/api/translate`
    pub translate: Dispatcher,
    pub languages: Arc<LanguageNames>,
    pub unknown_provider: UnknownProviderPolicy,
}

impl AppState {
    pub fn from_config(config: &GatewayConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vox_gateway/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(config.upstream_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        let registry = ProviderRegistry::with_defaults(&config.providers);
        let timeout = config.upstream_timeout();

        Ok(Self {
            translate: Dispatcher::new(
                registry.subset(&TRANSLATE_PROVIDERS),
                client.clone(),
                timeout,
            ),
            ai: Dispatcher::new(registry, client, timeout),
            languages: Arc::new(LanguageNames::with_overrides(&config.languages)),
            unknown_provider: config.unknown_provider,
        })
    }
}

/// Build the router with every endpoint:
/// - POST /api/ai - Rewrite text with a free-form instruction
/// - POST /api/translate - Translate text between two languages
/// - GET /api/providers - Providers wired per endpoint
pub fn build_router(state: Arc<AppState>) -> AxumRouter {
    AxumRouter::new()
        .route("/api/ai", post(handlers::ai))
        .route("/api/translate", post(handlers::translate))
        .route("/api/providers", get(handlers::providers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> anyhow::Result<Option<CorsLayer>> {
    if origins.is_empty() {
        return Ok(None);
    }
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("Invalid CORS origin '{origin}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    ))
}

/// Start the Vox Gateway HTTP server and serve until Ctrl-C
///
/// # Errors
/// Returns error if the HTTP client, CORS origins or listener cannot be set up
pub async fn start_server(config: GatewayConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(&config)?);

    let mut app = build_router(Arc::clone(&state));
    if let Some(cors) = cors_layer(&config.cors_allow_origins)? {
        app = app.layer(cors);
    }

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("[INFO] Vox Gateway listening on {}", addr);
    info!("[INFO] Upstream timeout: {:?}", config.upstream_timeout());
    info!("[INFO] Unknown provider policy: {:?}", state.unknown_provider);
    info!("[INFO] Available endpoints:");
    info!("  POST   /api/ai          - providers: {:?}", state.ai.registry().providers());
    info!("  POST   /api/translate   - providers: {:?}", state.translate.registry().providers());
    info!("  GET    /api/providers   - List wired providers");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("[INFO] Vox Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("[WARN] Could not install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("[INFO] Shutdown signal received");
}
