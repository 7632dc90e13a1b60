use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::config::settings::AppConfig;
use crate::database;
use crate::recommend::{self, RecommendationReport, Weights};
use crate::store::RecordStore;

/// One-shot recommendation query against the configured store database,
/// printed as a table on stdout.
pub struct RecommendationService {
    config: AppConfig,
}

impl RecommendationService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, band_id: i64, weights: &Weights) -> Result<()> {
        let db_path = self.config.store.database_path();
        info!("Loading record store from {}", db_path);

        let pool = database::create_pool(&db_path)?;
        let mut conn = database::get_connection(&pool)?;
        let store = RecordStore::load(&mut conn)?;

        let report = recommend::recommend(&store, band_id, weights, &self.config.recommendation)?;
        self.print_report(&store, &report);

        Ok(())
    }

    fn print_report(&self, store: &RecordStore, report: &RecommendationReport) {
        let target_name = store
            .band(report.target_id)
            .map(|band| band.name.as_str())
            .unwrap_or("unknown band");

        println!();
        println!(
            "Similar bands for {} (id {}):",
            target_name.bold(),
            report.target_id
        );

        if let Some(diagnostic) = report.diagnostic {
            println!("  {}", diagnostic.as_str().yellow());
            return;
        }
        if report.entries.is_empty() {
            println!("  {}", "no other candidates".yellow());
            return;
        }

        for (idx, entry) in report.entries.iter().enumerate() {
            println!(
                "  {:>2}. {} {:<20} {}",
                idx + 1,
                format!("{:<30}", entry.name).bold(),
                entry.country,
                format!("{:.4}", entry.total_score).cyan()
            );
        }
    }
}
