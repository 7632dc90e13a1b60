use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationItem {
    pub rank: usize,
    pub band_id: i64,
    pub name: String,
    pub country: String,
    pub total_score: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub band_id: i64,
    pub band_name: String,
    pub items: Vec<RecommendationItem>,
    pub diagnostic: Option<String>,
    pub store_loaded_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandDetail {
    pub band_id: i64,
    pub name: String,
    pub country: String,
    pub genre_label: String,
    pub genre_tags: Vec<String>,
    pub themes: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub bands: usize,
    pub edges: usize,
    pub countries: usize,
    pub loaded_at: String,
}
