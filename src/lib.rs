pub mod api;
pub mod cleaning;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod recommend;
pub mod services;
pub mod store;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::recommend::Weights;
use crate::services::recommendation::RecommendationService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_recommend(
    band_id: i64,
    genre_weight: Option<f64>,
    lyrical_weight: Option<f64>,
    similar_weight: Option<f64>,
    country_weight: Option<f64>,
) -> Result<()> {
    let config = AppConfig::new();
    let defaults = config.recommendation.default_weights();

    let weights = Weights {
        genre: genre_weight.unwrap_or(defaults.genre),
        lyrical: lyrical_weight.unwrap_or(defaults.lyrical),
        similar: similar_weight.unwrap_or(defaults.similar),
        country: country_weight.unwrap_or(defaults.country),
    };

    let service = RecommendationService::new(config);
    service.run(band_id, &weights)
}
