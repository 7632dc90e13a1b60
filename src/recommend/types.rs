use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{BandId, RankedBand};

/// Caller-supplied signal weights. Non-negative reals; deliberately NOT
/// required to sum to 1 and never renormalized, so callers may under- or
/// over-weight the total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Weights {
    pub genre: f64,
    pub lyrical: f64,
    pub similar: f64,
    pub country: f64,
}

impl Weights {
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("genre", self.genre),
            ("lyrical", self.lyrical),
            ("similar", self.similar),
            ("country", self.country),
        ];

        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                bail!("Invalid {} weight: {}", name, value);
            }
        }

        Ok(())
    }
}

/// Raw per-candidate signal values, before normalization
#[derive(Debug, Clone)]
pub struct CandidateRow {
    pub band_id: BandId,
    pub genre_similarity: f64,
    pub theme_similarity: f64,
    pub crowd_score: f64,
    pub geo_score: f64,
}

/// Why a report came back empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    UnknownBand,
    NoGenreOverlap,
}

impl Diagnostic {
    pub fn as_str(&self) -> &str {
        match self {
            Diagnostic::UnknownBand => "band not present in the record store",
            Diagnostic::NoGenreOverlap => "no bands share a genre with the target",
        }
    }
}

/// Result of one recommendation query. An empty `entries` with a set
/// `diagnostic` is a valid outcome, not an error.
#[derive(Debug, Clone)]
pub struct RecommendationReport {
    pub target_id: BandId,
    pub entries: Vec<RankedBand>,
    pub diagnostic: Option<Diagnostic>,
}

impl RecommendationReport {
    pub fn empty(target_id: BandId, diagnostic: Diagnostic) -> Self {
        Self {
            target_id,
            entries: Vec::new(),
            diagnostic: Some(diagnostic),
        }
    }
}
