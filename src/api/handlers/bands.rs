use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{BandDetail, RecommendationItem, RecommendationResponse};
use crate::recommend::{self, Weights};
use super::{AppState, WeightParams};

pub async fn get_band(
    State(state): State<Arc<AppState>>,
    Path(band_id): Path<i64>,
) -> impl IntoResponse {
    let Some(store) = state.snapshot() else {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Store unavailable").into_response();
    };

    match store.band(band_id) {
        Some(band) => {
            let mut genre_tags: Vec<String> = band.genre_tags.iter().cloned().collect();
            genre_tags.sort();

            Json(BandDetail {
                band_id: band.id,
                name: band.name.clone(),
                country: band.country.clone(),
                genre_label: band.genre_label.clone(),
                genre_tags,
                themes: store.theme_text(band.id).map(str::to_string),
            })
            .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Path(band_id): Path<i64>,
    Query(params): Query<WeightParams>,
) -> impl IntoResponse {
    let Some(store) = state.snapshot() else {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Store unavailable").into_response();
    };

    let Some(band) = store.band(band_id) else {
        return (StatusCode::NOT_FOUND, format!("Band {} not found", band_id)).into_response();
    };
    let band_name = band.name.clone();

    let settings = &state.config.recommendation;
    let defaults = settings.default_weights();
    let weights = Weights {
        genre: params.genre_weight.unwrap_or(defaults.genre),
        lyrical: params.lyrical_weight.unwrap_or(defaults.lyrical),
        similar: params.similar_weight.unwrap_or(defaults.similar),
        country: params.country_weight.unwrap_or(defaults.country),
    };
    if weights.validate().is_err() {
        return (StatusCode::BAD_REQUEST, "Weights must be non-negative").into_response();
    }

    let report = match recommend::recommend(&store, band_id, &weights, settings) {
        Ok(report) => report,
        Err(e) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, format!("Scoring error: {}", e))
                .into_response()
        }
    };

    let items: Vec<RecommendationItem> = report
        .entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| RecommendationItem {
            rank: idx + 1,
            band_id: entry.band_id,
            name: entry.name.clone(),
            country: entry.country.clone(),
            total_score: entry.total_score,
        })
        .collect();

    Json(RecommendationResponse {
        band_id,
        band_name,
        items,
        diagnostic: report.diagnostic.map(|d| d.as_str().to_string()),
        store_loaded_at: store.loaded_at().to_rfc3339(),
    })
    .into_response()
}
