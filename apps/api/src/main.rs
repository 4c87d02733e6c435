mod analysis;
mod catalog;
mod config;
mod errors;
mod flow;
mod models;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::recommend::StaticRecommender;
use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::session::store::{MemorySessionStore, RedisSessionStore, SessionStore};
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

    info!("Starting SkillBridge v{}", env!("CARGO_PKG_VERSION"));

    // Probe the catalog once so a missing or malformed file stops startup.
    // Requests still re-read it, picking up later edits.
    let catalog = RoleCatalog::new(&config.catalog_path);
    let roles = catalog
        .load()
        .with_context(|| format!("role catalog at {} is unusable", catalog.path().display()))?;
    info!("Role catalog OK: {} roles", roles.len());

    let sessions: Arc<dyn SessionStore> = match &config.redis_url {
        Some(url) => {
            info!("Session store: redis (ttl {}s)", config.session_ttl_secs);
            Arc::new(RedisSessionStore::new(url, config.session_ttl_secs)?)
        }
        None => {
            info!(
                "Session store: in-memory (REDIS_URL not set, ttl {}s)",
                config.session_ttl_secs
            );
            Arc::new(MemorySessionStore::new(Duration::from_secs(
                config.session_ttl_secs,
            )))
        }
    };

    let state = AppState {
        config: config.clone(),
        catalog,
        sessions,
        recommender: Arc::new(StaticRecommender),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
