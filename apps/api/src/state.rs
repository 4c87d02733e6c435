use std::sync::Arc;

use crate::analysis::recommend::Recommender;
use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Re-read on every request; holds only the catalog path.
    pub catalog: RoleCatalog,
    /// Memory or Redis, chosen at startup from REDIS_URL.
    pub sessions: Arc<dyn SessionStore>,
    /// Pluggable recommender. Default: StaticRecommender.
    pub recommender: Arc<dyn Recommender>,
}
