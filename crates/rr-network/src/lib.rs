//! `rr-network`: the station directory and segment source behind routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`directory`] | `StationDirectory` (lookup by code and by id)              |
//! | [`table`]     | `SegmentTable` (ordered directed segments)                 |
//! | [`loader`]    | `LoadOptions`, `load_network_csv`, `load_network_reader`   |
//! | [`demo`]      | `demo_network` (bundled Montreux–Oberland network)         |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                         |
//!
//! `StationDirectory` implements [`rr_routing::StationLookup`] and
//! `SegmentTable` implements [`rr_routing::SegmentSource`], so a loaded
//! [`Network`] plugs straight into [`rr_routing::Router::route`].

pub mod demo;
pub mod directory;
pub mod error;
pub mod loader;
pub mod table;


pub use demo::demo_network;
pub use directory::StationDirectory;
pub use error::{NetworkError, NetworkResult};
pub use loader::{LoadOptions, load_network_csv, load_network_reader};
pub use table::SegmentTable;

use rr_core::PathResult;
use rr_routing::{Router, RoutingResult};

/// A station directory together with the segments between its stations.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub stations: StationDirectory,
    pub segments: SegmentTable,
}

impl Network {
    /// Route between two station codes over this network.
    pub fn route(&self, router: &Router, from_code: &str, to_code: &str) -> RoutingResult<PathResult> {
        router.route(from_code, to_code, &self.stations, &self.segments)
    }
}
