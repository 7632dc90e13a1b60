use std::cmp::Ordering;

use crate::domain::BandId;

use super::types::{CandidateRow, Weights};

/// Normalizes each signal to [0, 1] across the candidate set, combines them
/// into one weighted total, drops the target row, and selects the `top_k`
/// largest totals. Ties keep the original candidate order (stable sort).
///
/// The target's own row participates in normalization; it is excluded only
/// at selection, matching the reference behavior.
pub fn combine(
    rows: &[CandidateRow],
    target_id: BandId,
    weights: &Weights,
    top_k: usize,
) -> Vec<(BandId, f64)> {
    if rows.is_empty() {
        return Vec::new();
    }

    let genre = normalized_signal(rows, |row| row.genre_similarity);
    let theme = normalized_signal(rows, |row| row.theme_similarity);
    let crowd = normalized_signal(rows, |row| row.crowd_score);
    let geo = normalized_signal(rows, |row| row.geo_score);

    let mut ranked: Vec<(BandId, f64)> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let total = weights.lyrical * theme[idx]
                + weights.similar * crowd[idx]
                + weights.genre * genre[idx]
                + weights.country * geo[idx];
            (row.band_id, total)
        })
        .filter(|(band_id, _)| *band_id != target_id)
        .collect();

    // Vec::sort_by is stable, so equal totals preserve candidate order
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(top_k);

    ranked
}

fn normalized_signal<F>(rows: &[CandidateRow], signal: F) -> Vec<f64>
where
    F: Fn(&CandidateRow) -> f64,
{
    let mut values: Vec<f64> = rows.iter().map(signal).collect();
    min_max_normalize(&mut values);
    values
}

/// Linear rescale to [0, 1]. A zero-variance signal (including the
/// single-candidate case) becomes a constant 0 for the whole set; this is
/// required behavior, never a NaN.
pub fn min_max_normalize(values: &mut [f64]) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range > 0.0 {
        for value in values.iter_mut() {
            *value = (*value - min) / range;
        }
    } else {
        values.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(band_id: i64, genre: f64, theme: f64, crowd: f64, geo: f64) -> CandidateRow {
        CandidateRow {
            band_id,
            genre_similarity: genre,
            theme_similarity: theme,
            crowd_score: crowd,
            geo_score: geo,
        }
    }

    fn equal_weights() -> Weights {
        Weights {
            genre: 1.0,
            lyrical: 1.0,
            similar: 1.0,
            country: 1.0,
        }
    }

    #[test]
    fn normalization_attains_zero_and_one() {
        let mut values = vec![2.0, 5.0, 8.0];

        min_max_normalize(&mut values);

        assert_eq!(values[0], 0.0);
        assert_eq!(values[2], 1.0);
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn normalization_absorbs_negative_cosines() {
        let mut values = vec![-0.5, 0.0, 1.0];

        min_max_normalize(&mut values);

        assert_eq!(values[0], 0.0);
        assert_eq!(values[2], 1.0);
    }

    #[test]
    fn zero_variance_becomes_constant_zero() {
        let mut values = vec![0.7, 0.7, 0.7];

        min_max_normalize(&mut values);

        assert!(values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn single_value_does_not_divide_by_zero() {
        let mut values = vec![1.0];

        min_max_normalize(&mut values);

        assert_eq!(values, vec![0.0]);
    }

    #[test]
    fn target_is_excluded_from_the_ranking() {
        let rows = vec![
            row(1, 1.0, 1.0, 1.0, 1.0),
            row(2, 0.5, 0.5, 0.5, 0.5),
            row(3, 0.1, 0.1, 0.1, 0.1),
        ];

        let ranked = combine(&rows, 1, &equal_weights(), 10);

        assert!(ranked.iter().all(|(id, _)| *id != 1));
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn output_is_capped_at_top_k() {
        let rows: Vec<CandidateRow> = (1..=15)
            .map(|id| row(id, id as f64, 0.0, 0.0, 0.0))
            .collect();

        let ranked = combine(&rows, 1, &equal_weights(), 10);

        assert_eq!(ranked.len(), 10);
        // Highest raw genre signal ranks first
        assert_eq!(ranked[0].0, 15);
    }

    #[test]
    fn single_candidate_set_yields_empty_output_without_faulting() {
        let rows = vec![row(1, 1.0, 1.0, 0.0, 1.0)];

        let ranked = combine(&rows, 1, &equal_weights(), 10);

        assert!(ranked.is_empty());
    }

    #[test]
    fn ties_preserve_candidate_order() {
        let rows = vec![
            row(1, 1.0, 0.0, 0.0, 0.0),
            row(7, 0.5, 0.5, 0.5, 0.5),
            row(4, 0.5, 0.5, 0.5, 0.5),
        ];

        let ranked = combine(&rows, 1, &equal_weights(), 10);

        assert_eq!(ranked[0].0, 7);
        assert_eq!(ranked[1].0, 4);
    }

    #[test]
    fn higher_crowd_weight_never_demotes_the_crowd_favorite() {
        let rows = vec![
            row(1, 1.0, 1.0, 0.0, 1.0),
            row(2, 0.5, 0.5, 0.9, 0.5),
            row(3, 0.5, 0.5, 0.1, 0.5),
        ];

        for similar_weight in [0.0, 0.5, 1.0, 5.0] {
            let weights = Weights {
                genre: 1.0,
                lyrical: 1.0,
                similar: similar_weight,
                country: 1.0,
            };

            let ranked = combine(&rows, 1, &weights, 10);
            let pos_2 = ranked.iter().position(|(id, _)| *id == 2).unwrap();
            let pos_3 = ranked.iter().position(|(id, _)| *id == 3).unwrap();

            assert!(pos_2 <= pos_3, "weight {similar_weight} demoted band 2");
        }
    }

    #[test]
    fn weights_are_not_renormalized() {
        let rows = vec![
            row(1, 1.0, 0.0, 0.0, 0.0),
            row(2, 0.0, 1.0, 1.0, 1.0),
            row(3, 0.5, 0.0, 0.0, 0.0),
        ];
        let heavy = Weights {
            genre: 0.0,
            lyrical: 10.0,
            similar: 10.0,
            country: 10.0,
        };

        let ranked = combine(&rows, 1, &heavy, 10);

        assert_eq!(ranked[0].0, 2);
        assert!(ranked[0].1 > 1.0);
    }
}
