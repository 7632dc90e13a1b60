use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use log::info;
use std::collections::HashMap;

use crate::cleaning::{clean_theme_text, standardize_country_name, GenreParser};
use crate::database::{self, BandRow, CountryRow, DbConn, SimilarBandRow, ThemeRow};
use crate::domain::{Band, BandId, Country, LyricalProfile, SimilarityEdge};

/// Immutable snapshot of the base tables, cleaned and keyed for the scoring
/// pipeline. Built once from the database; a refresh constructs a fresh
/// snapshot rather than mutating this one.
///
/// Candidacy invariant: `bands` holds only bands with at least one processed
/// genre tag AND a lyrical profile. Bands failing either check cannot be
/// scored and are dropped here, at the boundary.
pub struct RecordStore {
    bands: Vec<Band>,
    band_index: HashMap<BandId, usize>,
    profiles: HashMap<BandId, LyricalProfile>,
    edges: Vec<SimilarityEdge>,
    countries: HashMap<String, Country>,
    loaded_at: DateTime<Utc>,
}

impl RecordStore {
    pub fn load(conn: &mut DbConn) -> Result<Self> {
        let band_rows = database::bands::list_all(conn)?;
        let theme_rows = database::themes::list_all(conn)?;
        let edge_rows = database::edges::list_all(conn)?;
        let country_rows = database::countries::list_all(conn)?;

        Self::from_rows(band_rows, theme_rows, edge_rows, country_rows)
    }

    /// Cleans and validates raw rows into a snapshot. All malformed-input
    /// failures surface here, never inside the scoring pipeline.
    pub fn from_rows(
        band_rows: Vec<BandRow>,
        theme_rows: Vec<ThemeRow>,
        edge_rows: Vec<SimilarBandRow>,
        country_rows: Vec<CountryRow>,
    ) -> Result<Self> {
        let genre_parser = GenreParser::new()?;

        let profiles = build_profiles(&theme_rows)?;
        let (bands, band_index) = build_bands(&band_rows, &profiles, &genre_parser)?;
        let edges = build_edges(&edge_rows)?;
        let countries = build_countries(&country_rows);

        info!(
            "Record store loaded: {} scorable bands (of {} rows), {} similarity edges, {} countries",
            bands.len(),
            band_rows.len(),
            edges.len(),
            countries.len()
        );

        Ok(Self {
            bands,
            band_index,
            profiles,
            edges,
            countries,
            loaded_at: Utc::now(),
        })
    }

    /// Scorable bands in stable id order
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    pub fn band(&self, id: BandId) -> Option<&Band> {
        self.band_index.get(&id).map(|&idx| &self.bands[idx])
    }

    pub fn theme_text(&self, id: BandId) -> Option<&str> {
        self.profiles.get(&id).map(|p| p.themes.as_str())
    }

    pub fn edges(&self) -> &[SimilarityEdge] {
        &self.edges
    }

    /// Countries keyed by standardized name
    pub fn countries(&self) -> &HashMap<String, Country> {
        &self.countries
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

fn build_profiles(theme_rows: &[ThemeRow]) -> Result<HashMap<BandId, LyricalProfile>> {
    let mut profiles = HashMap::new();
    let mut unusable = 0usize;

    for row in theme_rows {
        let Some(themes) = clean_theme_text(&row.themes) else {
            unusable += 1;
            continue;
        };

        if profiles
            .insert(
                row.band_id,
                LyricalProfile {
                    band_id: row.band_id,
                    themes,
                },
            )
            .is_some()
        {
            bail!("Duplicate lyrical profile for band {}", row.band_id);
        }
    }

    if unusable > 0 {
        info!("Dropped {} theme rows with no usable tokens", unusable);
    }

    Ok(profiles)
}

fn build_bands(
    band_rows: &[BandRow],
    profiles: &HashMap<BandId, LyricalProfile>,
    genre_parser: &GenreParser,
) -> Result<(Vec<Band>, HashMap<BandId, usize>)> {
    let mut bands = Vec::new();
    let mut band_index = HashMap::new();
    let mut without_tags = 0usize;
    let mut without_profile = 0usize;

    for row in band_rows {
        if row.name.trim().is_empty() {
            bail!("Band {} has an empty name", row.id);
        }

        let genre_tags = genre_parser.parse(&row.genre);
        if genre_tags.is_empty() {
            without_tags += 1;
            continue;
        }
        if !profiles.contains_key(&row.id) {
            without_profile += 1;
            continue;
        }

        let band = Band {
            id: row.id,
            name: row.name.clone(),
            country: row.country.clone(),
            genre_label: row.genre.clone(),
            genre_tags,
        };

        if band_index.insert(band.id, bands.len()).is_some() {
            bail!("Duplicate band id {}", band.id);
        }
        bands.push(band);
    }

    if without_tags > 0 {
        info!("Dropped {} bands with unusable genre labels", without_tags);
    }
    if without_profile > 0 {
        info!("Dropped {} bands without a lyrical profile", without_profile);
    }

    Ok((bands, band_index))
}

fn build_edges(edge_rows: &[SimilarBandRow]) -> Result<Vec<SimilarityEdge>> {
    let mut edges = Vec::with_capacity(edge_rows.len());

    for row in edge_rows {
        if row.score < 0.0 {
            bail!(
                "Negative similarity score {} between bands {} and {}",
                row.score,
                row.band_id,
                row.similar_band_id
            );
        }

        edges.push(SimilarityEdge {
            band_id: row.band_id,
            similar_band_id: row.similar_band_id,
            score: row.score,
        });
    }

    Ok(edges)
}

fn build_countries(country_rows: &[CountryRow]) -> HashMap<String, Country> {
    country_rows
        .iter()
        .map(|row| {
            let name = standardize_country_name(&row.name);
            (
                name.clone(),
                Country {
                    name,
                    latitude: row.latitude,
                    longitude: row.longitude,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band_row(id: i64, name: &str, country: &str, genre: &str) -> BandRow {
        BandRow {
            id,
            name: name.to_string(),
            country: country.to_string(),
            genre: genre.to_string(),
        }
    }

    fn theme_row(band_id: i64, themes: &str) -> ThemeRow {
        ThemeRow {
            band_id,
            themes: themes.to_string(),
        }
    }

    #[test]
    fn keeps_only_scorable_bands() {
        let store = RecordStore::from_rows(
            vec![
                band_row(1, "Eld", "Norway", "Black Metal"),
                band_row(2, "No Tags", "Norway", "(early)"),
                band_row(3, "No Themes", "Norway", "Doom Metal"),
            ],
            vec![theme_row(1, "Winter, Darkness"), theme_row(2, "War")],
            vec![],
            vec![],
        )
        .unwrap();

        assert_eq!(store.bands().len(), 1);
        assert_eq!(store.bands()[0].id, 1);
        assert!(store.band(3).is_none());
    }

    #[test]
    fn cleans_theme_text_on_load() {
        let store = RecordStore::from_rows(
            vec![band_row(1, "Eld", "Norway", "Black Metal")],
            vec![theme_row(1, " Winter ,, DARKNESS ")],
            vec![],
            vec![],
        )
        .unwrap();

        assert_eq!(store.theme_text(1), Some("winter, darkness"));
    }

    #[test]
    fn rejects_duplicate_band_ids() {
        let result = RecordStore::from_rows(
            vec![
                band_row(1, "Eld", "Norway", "Black Metal"),
                band_row(1, "Eld Again", "Norway", "Black Metal"),
            ],
            vec![theme_row(1, "Winter")],
            vec![],
            vec![],
        );

        assert!(result.is_err());
    }

    #[test]
    fn rejects_negative_edge_scores() {
        let result = RecordStore::from_rows(
            vec![],
            vec![],
            vec![SimilarBandRow {
                band_id: 1,
                similar_band_id: 2,
                score: -0.5,
            }],
            vec![],
        );

        assert!(result.is_err());
    }

    #[test]
    fn loads_from_sqlite() {
        let pool = database::create_memory_pool().unwrap();
        let mut conn = database::get_connection(&pool).unwrap();
        database::setup::reset_database(&mut conn).unwrap();

        database::bands::insert_band(&mut conn, 1, "Eld", "Norway", "Black Metal").unwrap();
        database::bands::insert_band(&mut conn, 2, "Frostveil", "Sweden", "Doom Metal").unwrap();
        database::themes::insert_themes(&mut conn, 1, "Winter, Darkness").unwrap();
        database::themes::insert_themes(&mut conn, 2, "Sorrow").unwrap();
        database::edges::insert_edge(&mut conn, 1, 2, 0.8).unwrap();
        database::countries::insert_country(&mut conn, "norway", 59.91, 10.75).unwrap();

        let store = RecordStore::load(&mut conn).unwrap();

        assert_eq!(store.bands().len(), 2);
        assert_eq!(store.edges().len(), 1);
        assert_eq!(store.theme_text(1), Some("winter, darkness"));
        assert!(store.countries().contains_key("norway"));
    }

    #[test]
    fn standardizes_country_keys() {
        let store = RecordStore::from_rows(
            vec![],
            vec![],
            vec![],
            vec![CountryRow {
                name: " USA ".to_string(),
                latitude: 38.0,
                longitude: -97.0,
            }],
        )
        .unwrap();

        assert!(store.countries().contains_key("united states"));
    }
}
