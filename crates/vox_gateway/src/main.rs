// Vox Gateway Server
//
// Forwards rewrite and translation requests from the voice-notes web client
// to the selected LLM vendor.

use std::env;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;
use vox_gateway::{config::CONFIG_PATH_ENV, start_server, GatewayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Config path: first argument, then environment
    let config_path = env::args()
        .nth(1)
        .or_else(|| env::var(CONFIG_PATH_ENV).ok())
        .map(PathBuf::from);

    let config = GatewayConfig::load(config_path.as_deref())?;
    match &config_path {
        Some(path) => info!("[OK] Loaded configuration from {}", path.display()),
        None => info!("[OK] No configuration file given, using defaults"),
    }

    start_server(config).await
}
