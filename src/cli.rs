//! CLI entry point and the search pipeline
//!
//! The pipeline runs strictly in order: configuration, input, IP location,
//! paginated place fetch, rating filter, random pick, map URL. Progress is
//! narrated on stderr; stdout carries the URL alone.

use crate::config::Config;
use crate::constants::search::{DEFAULT_RADIUS_METERS, PAGE_TOKEN_DELAY};
use crate::error::Result;
use crate::format;
use crate::geo::ip_location::IpLocator;
use crate::input;
use crate::pick;
use crate::places::client::{fetch_nearby, PlacesClient};
use crate::places::filter::filter_by_rating;
use crate::places::NearbyQuery;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Random nearby place picker
#[derive(Parser)]
#[command(name = "place-roulette")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Search keyword (prompted for when omitted)
    #[arg(long, short = 'k')]
    pub keyword: Option<String>,

    /// Minimum rating, 0 to 5 (prompted for when omitted)
    #[arg(long, short = 'm', value_parser = parse_min_rating)]
    pub min_rating: Option<f64>,

    /// Search radius in meters
    #[arg(long, short = 'r', default_value_t = DEFAULT_RADIUS_METERS)]
    pub radius: u32,

    /// Seed for deterministic place selection
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout is reserved for the result URL
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run_pipeline(cli).await
}

async fn run_pipeline(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let criteria = {
        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        let mut prompts = std::io::stderr();
        input::read_criteria(&mut reader, &mut prompts, cli.keyword, cli.min_rating)?
    };
    let input::SearchCriteria { keyword, min_rating } = criteria;
    debug!("Searching for '{}' rated above {}", keyword, min_rating);

    let locator = IpLocator::new();
    let origin = locator.locate().await?;
    origin.validate()?;
    eprintln!("Searching near ({:.4}, {:.4})", origin.lat, origin.lng);

    let client = PlacesClient::new(config.api_key);
    let query = NearbyQuery::new(keyword, origin, cli.radius);
    let places = fetch_nearby(&client, &query, PAGE_TOKEN_DELAY).await?;

    let qualified = filter_by_rating(places, min_rating);
    eprintln!("{} open places rated above {}", qualified.len(), min_rating);

    let source = pick::get_source(cli.seed);
    let place = pick::pick_place(&qualified, source.as_ref())?;
    eprintln!("Chosen: {} (rating {})", place.name, place.rating);

    println!("{}", format::map_url(place.coordinates()));
    Ok(())
}

/// clap value parser for `--min-rating`
fn parse_min_rating(value: &str) -> std::result::Result<f64, String> {
    let rating: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if input::rating_in_range(rating) {
        Ok(rating)
    } else {
        Err(format!("{} is outside the accepted range 0 to 5", rating))
    }
}
