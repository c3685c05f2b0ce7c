use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use flight_search::domain::{AirportCode, Price};
use flight_search::loader::load_flights;
use flight_search::planner::{FlightGraph, Planner, SearchConfig, SearchRequest};
use flight_search::report::render_json;

/// Search a flight table for trips between two airports.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Path of the flights CSV file
    file: PathBuf,

    /// IATA 3-letter code of the origin airport
    origin: AirportCode,

    /// IATA 3-letter code of the destination airport
    destination: AirportCode,

    /// Number of bags to carry
    #[arg(short, long, default_value_t = 0)]
    bags: u32,

    /// Search for round trips
    #[arg(short = 'r', long = "return")]
    round_trip: bool,

    /// Minimum layover between flights on the same leg, in hours
    #[arg(long, default_value_t = 1)]
    min_layover: i64,

    /// Maximum layover between flights on the same leg, in hours
    #[arg(long, default_value_t = 6)]
    max_layover: i64,

    /// Maximum total trip price
    #[arg(short = 'p', long)]
    max_price: Option<Price>,

    /// Maximum number of connections per leg
    #[arg(short = 'c', long)]
    max_connections: Option<usize>,

    /// Earliest departure date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    departure_date: Option<NaiveDate>,

    /// Earliest return date (YYYY-MM-DD), round trips only
    #[arg(long, value_parser = parse_date)]
    return_date: Option<NaiveDate>,

    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            bags: self.bags,
            round_trip: self.round_trip,
            min_layover_mins: self.min_layover.saturating_mul(60),
            max_layover_mins: self.max_layover.saturating_mul(60),
            max_price: self.max_price,
            max_connections: self.max_connections,
            departure_date: self.departure_date,
            return_date: self.return_date,
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.search_config();
    debug!(?config, "search configuration");

    let flights = load_flights(&cli.file)
        .with_context(|| format!("failed to load flights from {}", cli.file.display()))?;

    let graph = FlightGraph::build(&flights);
    debug!(
        airports = graph.airport_count(),
        flights = graph.flight_count(),
        "flight graph built"
    );
    let planner = Planner::new(&graph, &config);
    let request = SearchRequest::new(cli.origin, cli.destination);
    let result = planner.search(&request)?;

    println!("{}", render_json(&result.trips)?);

    Ok(())
}
