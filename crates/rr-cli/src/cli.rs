//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use rr_routing::FrontierKind;
use rr_trip::AnalyticCode;

#[derive(Parser, Debug)]
#[command(name = "rail-route")]
#[command(about = "Shortest path between two stations of a rail network")]
#[command(long_about = "Shortest path between two stations of a rail network.

Without --stations/--segments the bundled Montreux-Oberland network is used:
  rail-route MX GST                    # Montreux to Gstaad
  rail-route VV LENK --frontier heap   # Vevey to Lenk, heap-based search
  rail-route MX ZW --record ./trips    # also write the trip to ./trips/*.csv")]
pub struct Cli {
    /// Departure station code
    pub from: String,

    /// Arrival station code
    pub to: String,

    /// Stations CSV (id,code,name)
    #[arg(long, requires = "segments")]
    pub stations: Option<PathBuf>,

    /// Segments CSV (from,to,distance_km)
    #[arg(long, requires = "stations")]
    pub segments: Option<PathBuf>,

    /// Treat every segment row as one-way instead of adding its reverse
    #[arg(long)]
    pub one_way: bool,

    /// Node-selection strategy for the search
    #[arg(long, value_enum, default_value_t = FrontierArg::Linear)]
    pub frontier: FrontierArg,

    /// Write the trip to trips.csv / trip_segments.csv in this directory
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Bookkeeping code stored with a recorded trip
    #[arg(long, default_value = "PASSAGER")]
    pub analytic_code: AnalyticCode,

    /// Label of the train stored with a recorded trip
    #[arg(long, default_value = "MOB-001")]
    pub train: String,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FrontierArg {
    Linear,
    Heap,
}

impl From<FrontierArg> for FrontierKind {
    fn from(arg: FrontierArg) -> Self {
        match arg {
            FrontierArg::Linear => FrontierKind::LinearScan,
            FrontierArg::Heap   => FrontierKind::Heap,
        }
    }
}
