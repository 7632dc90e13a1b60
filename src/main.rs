use anyhow::Result;

use band_recommender::cli::Command;
use band_recommender::{handle_recommend, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Recommend {
            band_id,
            genre_weight,
            lyrical_weight,
            similar_weight,
            country_weight,
        } => handle_recommend(
            *band_id,
            *genre_weight,
            *lyrical_weight,
            *similar_weight,
            *country_weight,
        ),
    }
}
