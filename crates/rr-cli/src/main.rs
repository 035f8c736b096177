//! rail-route: shortest-path queries from the command line.
//!
//! Loads a network (CSV files or the bundled demo), routes between two
//! station codes, prints the path and legs, and optionally records the trip.

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rr_network::{LoadOptions, Network, demo_network, load_network_csv};
use rr_routing::Router;
use rr_trip::{CsvTripRecorder, TripRecord, TripRecorder};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let network = load(&cli)?;
    let router = Router::new(cli.frontier.into());
    debug!(frontier = %router.frontier, "routing {} → {}", cli.from, cli.to);

    let path = network.route(&router, &cli.from, &cli.to)?;
    let trip = TripRecord::from_path(&path, &network.stations, cli.analytic_code)?
        .with_train(cli.train.as_str());
    print_trip(&trip, path.hop_count());

    if let Some(dir) = &cli.record {
        let id = record(dir, &trip)?;
        info!(
            trip_id = id,
            dir = %dir.display(),
            analytic = trip.analytic_code.description(),
            "trip recorded"
        );
    }
    Ok(())
}

// ── Setup ─────────────────────────────────────────────────────────────────────

/// Log to stderr.  `RUST_LOG` wins; otherwise `warn`, or `debug` with `-v`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(cli: &Cli) -> Result<Network> {
    let options = LoadOptions { bidirectional: !cli.one_way };
    match (&cli.stations, &cli.segments) {
        (Some(stations), Some(segments)) => load_network_csv(stations, segments, &options)
            .with_context(|| format!("loading {} and {}", stations.display(), segments.display())),
        _ => {
            debug!("no network files given, using the bundled demo network");
            Ok(demo_network()?)
        }
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_trip(trip: &TripRecord, hops: usize) {
    println!(
        "{} → {}: {:.2} km in {} segments",
        trip.from_code, trip.to_code, trip.distance_km, hops
    );
    println!("{}", trip.path.join(" → "));
    println!();
    println!("{:<4} {:<8} {:<8} {:>10}", "#", "From", "To", "km");
    println!("{}", "-".repeat(33));
    for leg in &trip.legs {
        println!(
            "{:<4} {:<8} {:<8} {:>10.2}",
            leg.sequence_order, leg.from_code, leg.to_code, leg.distance_km
        );
    }
}

fn record(dir: &Path, trip: &TripRecord) -> Result<u64> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut recorder = CsvTripRecorder::new(dir)?;
    let id = recorder.record(trip)?;
    recorder.finish()?;
    Ok(id)
}
