use anyhow::Result;
use log::{debug, info, warn};

use crate::config::settings::RecommendationSettings;
use crate::domain::{Band, BandId, RankedBand};
use crate::store::RecordStore;

use super::combine::combine;
use super::crowd;
use super::genre_filter::filter_by_genre;
use super::geo;
use super::text::TextSimilarityEngine;
use super::types::{CandidateRow, Diagnostic, RecommendationReport, Weights};

/// Runs the full scoring pipeline for one target band: genre-overlap
/// filtering, the two text-similarity signals, crowd aggregation, geographic
/// proximity, then normalization, weighting and top-K selection.
///
/// Pure with respect to the store snapshot: identical inputs produce
/// identical ordered output. Unknown targets and empty candidate sets come
/// back as empty reports with a diagnostic, never as errors.
pub fn recommend(
    store: &RecordStore,
    target_id: BandId,
    weights: &Weights,
    settings: &RecommendationSettings,
) -> Result<RecommendationReport> {
    weights.validate()?;

    if store.band(target_id).is_none() {
        warn!("Band {} not present in the record store", target_id);
        return Ok(RecommendationReport::empty(target_id, Diagnostic::UnknownBand));
    }

    let candidates = filter_by_genre(store.bands(), target_id);
    if candidates.is_empty() {
        warn!("No bands share a genre with band {}", target_id);
        return Ok(RecommendationReport::empty(
            target_id,
            Diagnostic::NoGenreOverlap,
        ));
    }
    debug!(
        "Band {}: {} genre-overlap candidates",
        target_id,
        candidates.len()
    );

    let engine = TextSimilarityEngine::new(settings.max_svd_components)?;

    let genre_documents = text_documents(&candidates, |band| band.genre_label.clone());
    let genre_similarity = engine.similarity(&genre_documents, target_id)?;

    let theme_documents = text_documents(&candidates, |band| {
        store.theme_text(band.id).unwrap_or_default().to_string()
    });
    let theme_similarity = engine.similarity(&theme_documents, target_id)?;

    let crowd_scores = crowd::aggregate(store.edges(), target_id);

    // candidates is non-empty and always contains the target
    let target_band = candidates
        .iter()
        .find(|band| band.id == target_id)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Target band {} lost during filtering", target_id))?;
    let geo_scores = geo::similarity(store.countries(), target_band, &candidates);

    let rows: Vec<CandidateRow> = candidates
        .iter()
        .map(|band| CandidateRow {
            band_id: band.id,
            genre_similarity: genre_similarity.get(&band.id).copied().unwrap_or(0.0),
            theme_similarity: theme_similarity.get(&band.id).copied().unwrap_or(0.0),
            crowd_score: crowd_scores.get(&band.id).copied().unwrap_or(0.0),
            geo_score: geo_scores.get(&band.id).copied().unwrap_or(0.0),
        })
        .collect();

    let ranked = combine(&rows, target_id, weights, settings.top_k);

    let entries: Vec<RankedBand> = ranked
        .into_iter()
        .filter_map(|(band_id, total_score)| {
            store.band(band_id).map(|band| RankedBand {
                band_id,
                name: band.name.clone(),
                country: band.country.clone(),
                total_score,
            })
        })
        .collect();

    info!(
        "Band {}: {} recommendations from {} candidates",
        target_id,
        entries.len(),
        candidates.len()
    );

    Ok(RecommendationReport {
        target_id,
        entries,
        diagnostic: None,
    })
}

fn text_documents<F>(candidates: &[&Band], text: F) -> Vec<(BandId, String)>
where
    F: Fn(&Band) -> String,
{
    candidates
        .iter()
        .map(|&band| (band.id, text(band)))
        .collect()
}
