use std::collections::HashMap;

use crate::domain::{BandId, SimilarityEdge};

/// Collapses directed crowd-similarity edges incident to the target into an
/// undirected per-counterpart score, keeping the maximum when both
/// directions (or duplicates) exist.
///
/// Candidates with no edge to the target simply have no entry; the combiner
/// joins them with a fallback of zero.
pub fn aggregate(edges: &[SimilarityEdge], target_id: BandId) -> HashMap<BandId, f64> {
    let mut scores = HashMap::new();

    for edge in edges {
        let counterpart = if edge.band_id == target_id {
            edge.similar_band_id
        } else if edge.similar_band_id == target_id {
            edge.band_id
        } else {
            continue;
        };

        scores
            .entry(counterpart)
            .and_modify(|score: &mut f64| *score = score.max(edge.score))
            .or_insert(edge.score);
    }

    scores
}
