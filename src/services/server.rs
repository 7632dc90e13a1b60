use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::database;
use crate::store::RecordStore;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let db_path = self.config.store.database_path();
        info!("Loading record store from {}", db_path);

        let pool = database::create_pool(&db_path)?;
        let mut conn = database::get_connection(&pool)?;
        let store = Arc::new(RecordStore::load(&mut conn)?);

        let state = Arc::new(AppState {
            pool,
            config: self.config.clone(),
            store: RwLock::new(store),
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
