use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type BandId = i64;

/// Band master data with processed genre tags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Band {
    pub id: BandId,
    pub name: String,
    pub country: String,
    /// Raw genre label as it appears in the source data, e.g.
    /// "Progressive Death Metal (early), Doom Metal (later)"
    pub genre_label: String,
    /// Normalized lowercase tags parsed from the label; never empty for a
    /// band that made it into the store
    pub genre_tags: HashSet<String>,
}

impl Band {
    pub fn shares_genre_with(&self, other: &Band) -> bool {
        !self.genre_tags.is_disjoint(&other.genre_tags)
    }
}

/// Cleaned lyrical themes for a band; at most one profile per band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricalProfile {
    pub band_id: BandId,
    /// Comma-joined, lowercased, trimmed theme tokens
    pub themes: String,
}

/// Directed crowd-sourced similarity record between two bands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityEdge {
    pub band_id: BandId,
    pub similar_band_id: BandId,
    pub score: f64,
}

/// Country with resolved coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// One row of the ranked recommendation output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedBand {
    pub band_id: BandId,
    pub name: String,
    pub country: String,
    pub total_score: f64,
}
