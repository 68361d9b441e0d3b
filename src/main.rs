//! place-roulette CLI entry point
//!
//! Random nearby place picker - console app

use place_roulette::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
