use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::admin_refresh,
    bands::{get_band, get_recommendations},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/bands/:id", get(get_band))
        .route("/api/bands/:id/recommendations", get(get_recommendations))
        .route("/api/admin/refresh", post(admin_refresh))
        .with_state(state)
}
