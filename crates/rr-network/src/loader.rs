//! CSV network loader.
//!
//! # CSV format
//!
//! Two files.  Stations, one row per station:
//!
//! ```csv
//! id,code,name
//! 46,MX,Montreux
//! 11,CGE,Montreux-Collège
//! ```
//!
//! Segments, one row per connection, endpoints given by station code:
//!
//! ```csv
//! from,to,distance_km
//! MX,CGE,0.65
//! ```
//!
//! With [`LoadOptions::bidirectional`] (the default) every segment row also
//! produces its reverse, immediately after it.  Fields are trimmed.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use rr_core::{Station, StationId};

use crate::{Network, NetworkError, NetworkResult, SegmentTable, StationDirectory};

// ── Options ───────────────────────────────────────────────────────────────────

/// How segment rows are turned into directed segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Add the reverse of every listed segment.
    pub bidirectional: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { bidirectional: true }
    }
}

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct StationRecord {
    id:   u32,
    code: String,
    name: String,
}

#[derive(Deserialize)]
struct SegmentRecord {
    from:        String,
    to:          String,
    distance_km: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a network from a stations CSV and a segments CSV.
pub fn load_network_csv(
    stations_path: &Path,
    segments_path: &Path,
    options:       &LoadOptions,
) -> NetworkResult<Network> {
    let stations = std::fs::File::open(stations_path)?;
    let segments = std::fs::File::open(segments_path)?;
    debug!(stations = %stations_path.display(), segments = %segments_path.display(), "loading network");
    load_network_reader(stations, segments, options)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor` or a byte slice) and for the
/// bundled demo network.
pub fn load_network_reader<S: Read, G: Read>(
    stations: S,
    segments: G,
    options:  &LoadOptions,
) -> NetworkResult<Network> {
    let directory = load_stations(stations)?;
    let table = load_segments(segments, &directory, options)?;
    debug!(
        stations = directory.len(),
        segments = table.len(),
        bidirectional = options.bidirectional,
        "network loaded"
    );
    Ok(Network { stations: directory, segments: table })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader)
}

fn load_stations<R: Read>(reader: R) -> NetworkResult<StationDirectory> {
    let mut directory = StationDirectory::new();
    for result in csv_reader(reader).deserialize::<StationRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        directory.insert(Station::new(StationId(row.id), row.code, row.name)?)?;
    }
    Ok(directory)
}

fn load_segments<R: Read>(
    reader:    R,
    directory: &StationDirectory,
    options:   &LoadOptions,
) -> NetworkResult<SegmentTable> {
    let mut table = SegmentTable::new();
    for result in csv_reader(reader).deserialize::<SegmentRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        let from = resolve(directory, &row.from)?;
        let to = resolve(directory, &row.to)?;
        if options.bidirectional {
            table.add_bidirectional(from, to, row.distance_km)?;
        } else {
            table.add_directed(from, to, row.distance_km)?;
        }
    }
    Ok(table)
}

fn resolve(directory: &StationDirectory, code: &str) -> NetworkResult<StationId> {
    directory
        .by_code(code)
        .map(|s| s.id)
        .ok_or_else(|| NetworkError::UnknownStation(code.to_owned()))
}
