use crate::recommend::Weights;

#[derive(Debug, Clone)]
pub struct RecommendationSettings {
    pub genre_weight: f64,
    pub lyrical_weight: f64,
    pub similar_weight: f64,
    pub country_weight: f64,
    pub top_k: usize,
    pub max_svd_components: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            genre_weight: 0.333,
            lyrical_weight: 0.333,
            similar_weight: 0.333,
            country_weight: 0.1,
            top_k: 10,
            max_svd_components: 20,
        }
    }
}

impl RecommendationSettings {
    pub fn default_weights(&self) -> Weights {
        Weights {
            genre: self.genre_weight,
            lyrical: self.lyrical_weight,
            similar: self.similar_weight,
            country: self.country_weight,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub database_path_env: &'static str,
    pub default_database_path: &'static str,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path_env: "DATABASE_PATH",
            default_database_path: "band_recommender.db",
        }
    }
}

impl StoreSettings {
    pub fn database_path(&self) -> String {
        std::env::var(self.database_path_env)
            .unwrap_or_else(|_| self.default_database_path.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub admin_token_env: &'static str,
    pub default_admin_token: &'static str,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            admin_token_env: "ADMIN_TOKEN",
            default_admin_token: "secret",
        }
    }
}

impl ServerSettings {
    pub fn admin_token(&self) -> String {
        std::env::var(self.admin_token_env)
            .unwrap_or_else(|_| self.default_admin_token.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub recommendation: RecommendationSettings,
    pub store: StoreSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            recommendation: RecommendationSettings::default(),
            store: StoreSettings::default(),
            server: ServerSettings::default(),
        }
    }
}
