/// Raw table rows as stored; cleaning happens at store construction

#[derive(Debug, Clone)]
pub struct BandRow {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub genre: String,
}

#[derive(Debug, Clone)]
pub struct ThemeRow {
    pub band_id: i64,
    pub themes: String,
}

#[derive(Debug, Clone)]
pub struct SimilarBandRow {
    pub band_id: i64,
    pub similar_band_id: i64,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct CountryRow {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
