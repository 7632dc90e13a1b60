use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::RefreshResponse;
use crate::database;
use crate::store::RecordStore;
use super::AppState;

/// Reloads the record store from the database and swaps the snapshot.
/// In-flight queries keep their old Arc until they finish.
pub async fn admin_refresh(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let expected = format!("Bearer {}", state.config.server.admin_token());
    let auth_header = headers.get("Authorization").and_then(|h| h.to_str().ok());
    if auth_header != Some(expected.as_str()) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let mut conn = match database::get_connection(&state.pool) {
        Ok(conn) => conn,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "DB Connection Error").into_response(),
    };

    let store = match RecordStore::load(&mut conn) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::error!("Store refresh failed: {:?}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Refresh failed: {}", e))
                .into_response();
        }
    };

    let response = RefreshResponse {
        bands: store.bands().len(),
        edges: store.edges().len(),
        countries: store.countries().len(),
        loaded_at: store.loaded_at().to_rfc3339(),
    };

    if !state.replace_store(store) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Store lock poisoned").into_response();
    }

    log::info!("Record store refreshed: {} bands", response.bands);
    Json(response).into_response()
}
