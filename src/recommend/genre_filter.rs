use crate::domain::{Band, BandId};

/// Selects the bands sharing at least one processed genre tag with the
/// target. The target itself is part of the result; the combiner removes it
/// at final selection. An unknown target yields an empty result, not an
/// error — callers check for emptiness before scoring.
///
/// Candidate order is the stable input order of `bands`.
pub fn filter_by_genre(bands: &[Band], target_id: BandId) -> Vec<&Band> {
    let Some(target) = bands.iter().find(|band| band.id == target_id) else {
        return Vec::new();
    };

    bands
        .iter()
        .filter(|band| band.shares_genre_with(target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn band(id: i64, tags: &[&str]) -> Band {
        Band {
            id,
            name: format!("Band {id}"),
            country: "Norway".to_string(),
            genre_label: tags.join(", "),
            genre_tags: tags.iter().map(|t| t.to_string()).collect::<HashSet<_>>(),
        }
    }

    #[test]
    fn keeps_overlapping_bands_and_drops_the_rest() {
        let bands = vec![
            band(1, &["death metal"]),
            band(2, &["death metal", "doom"]),
            band(3, &["pop"]),
        ];

        let candidates = filter_by_genre(&bands, 1);

        let ids: Vec<i64> = candidates.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn includes_the_target_itself() {
        let bands = vec![band(1, &["doom"])];

        let candidates = filter_by_genre(&bands, 1);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, 1);
    }

    #[test]
    fn unknown_target_yields_empty_result() {
        let bands = vec![band(1, &["doom"])];

        assert!(filter_by_genre(&bands, 99).is_empty());
    }

    #[test]
    fn preserves_input_order() {
        let bands = vec![
            band(5, &["black metal"]),
            band(3, &["black metal"]),
            band(8, &["black metal"]),
        ];

        let ids: Vec<i64> = filter_by_genre(&bands, 3).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![5, 3, 8]);
    }
}
