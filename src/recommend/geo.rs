use std::collections::HashMap;

use crate::cleaning::standardize_country_name;
use crate::domain::{Band, BandId, Country};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Inverse great-circle proximity between the target band's country and each
/// candidate's country: `1 / (1 + distance_km)`, so bands from the same
/// country score 1 and the score decays with distance.
///
/// Bands whose country fails to resolve get no entry; the combiner treats
/// absence as zero, never as a failure.
pub fn similarity(
    countries: &HashMap<String, Country>,
    target: &Band,
    candidates: &[&Band],
) -> HashMap<BandId, f64> {
    let mut scores = HashMap::new();

    let Some(target_country) = resolve(countries, &target.country) else {
        return scores;
    };

    for band in candidates {
        if let Some(country) = resolve(countries, &band.country) {
            let distance_km = haversine_km(target_country, country);
            scores.insert(band.id, 1.0 / (1.0 + distance_km));
        }
    }

    scores
}

fn resolve<'a>(countries: &'a HashMap<String, Country>, raw: &str) -> Option<&'a Country> {
    countries.get(&standardize_country_name(raw))
}

pub fn haversine_km(a: &Country, b: &Country) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * half_chord.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn country(name: &str, latitude: f64, longitude: f64) -> Country {
        Country {
            name: name.to_string(),
            latitude,
            longitude,
        }
    }

    fn band(id: i64, country: &str) -> Band {
        Band {
            id,
            name: format!("Band {id}"),
            country: country.to_string(),
            genre_label: "black metal".to_string(),
            genre_tags: HashSet::from(["black metal".to_string()]),
        }
    }

    fn country_table() -> HashMap<String, Country> {
        [
            country("norway", 59.91, 10.75),
            country("sweden", 59.33, 18.07),
            country("australia", -33.87, 151.21),
        ]
        .into_iter()
        .map(|c| (c.name.clone(), c))
        .collect()
    }

    #[test]
    fn same_country_scores_one() {
        let countries = country_table();
        let target = band(1, "Norway");
        let other = band(2, "Norway");

        let scores = similarity(&countries, &target, &[&other]);

        assert!((scores[&2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn closer_countries_score_higher() {
        let countries = country_table();
        let target = band(1, "Norway");
        let near = band(2, "Sweden");
        let far = band(3, "Australia");

        let scores = similarity(&countries, &target, &[&near, &far]);

        assert!(scores[&2] > scores[&3]);
    }

    #[test]
    fn unresolved_candidate_gets_no_entry() {
        let countries = country_table();
        let target = band(1, "Norway");
        let unknown = band(2, "Atlantis");

        let scores = similarity(&countries, &target, &[&unknown]);

        assert!(scores.is_empty());
    }

    #[test]
    fn unresolved_target_yields_empty_map() {
        let countries = country_table();
        let target = band(1, "Atlantis");
        let other = band(2, "Norway");

        assert!(similarity(&countries, &target, &[&other]).is_empty());
    }

    #[test]
    fn haversine_matches_known_distance() {
        // Oslo to Stockholm is roughly 420 km
        let oslo = country("norway", 59.91, 10.75);
        let stockholm = country("sweden", 59.33, 18.07);

        let distance = haversine_km(&oslo, &stockholm);

        assert!(distance > 350.0 && distance < 500.0, "got {distance}");
    }
}
