pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::flow::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_home))
        .route(
            "/profile",
            get(handlers::handle_view_profile).post(handlers::handle_submit_profile),
        )
        .route("/roles", get(handlers::handle_list_roles))
        .route("/select-role", post(handlers::handle_select_role))
        .route("/results", get(handlers::handle_results))
        .route("/reset", get(handlers::handle_reset))
        .with_state(state)
}
