use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "similar-bands recommendation backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print the ranked similar bands for one band
    Recommend {
        /// Target band identifier
        #[arg(short, long)]
        band_id: i64,
        /// Weight for genre-text similarity (defaults from settings)
        #[arg(long)]
        genre_weight: Option<f64>,
        /// Weight for lyrical-theme similarity
        #[arg(long)]
        lyrical_weight: Option<f64>,
        /// Weight for crowd-sourced similar-band scores
        #[arg(long)]
        similar_weight: Option<f64>,
        /// Weight for geographic proximity
        #[arg(long)]
        country_weight: Option<f64>,
    },
}
