pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::polish::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/polish", post(handlers::handle_polish))
        .with_state(state)
}
