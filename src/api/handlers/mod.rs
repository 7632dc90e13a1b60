use serde::Deserialize;
use std::sync::{Arc, RwLock};

use crate::config::settings::AppConfig;
use crate::database::DbPool;
use crate::store::RecordStore;

pub mod admin;
pub mod bands;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
    /// Current store snapshot; admin refresh swaps in a new Arc
    pub store: RwLock<Arc<RecordStore>>,
}

impl AppState {
    pub fn snapshot(&self) -> Option<Arc<RecordStore>> {
        self.store.read().ok().map(|guard| Arc::clone(&guard))
    }

    pub fn replace_store(&self, store: Arc<RecordStore>) -> bool {
        match self.store.write() {
            Ok(mut guard) => {
                *guard = store;
                true
            }
            Err(_) => false,
        }
    }
}

#[derive(Deserialize)]
pub struct WeightParams {
    pub genre_weight: Option<f64>,
    pub lyrical_weight: Option<f64>,
    pub similar_weight: Option<f64>,
    pub country_weight: Option<f64>,
}
