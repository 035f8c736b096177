//! `rr-routing`: shortest-path routing over a rail network.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`graph`]       | `Graph` adjacency map built from a segment list           |
//! | [`frontier`]    | `Frontier` trait, `LinearScanFrontier`, `HeapFrontier`    |
//! | [`finder`]      | `find_path`, `find_path_with`, `SearchTables`             |
//! | [`reconstruct`] | `reconstruct` (predecessor walk + segment lookup)         |
//! | [`router`]      | `Router`, `compute_shortest_path`, collaborator traits    |
//! | [`error`]       | `RoutingError`, `RoutingResult<T>`                        |
//!
//! # Query pipeline
//!
//! ```text
//! codes ──lookup──▶ StationIds ──▶ Graph::build ──▶ find_path ──▶ reconstruct ──▶ PathResult
//! ```
//!
//! Every query rebuilds the graph from a fresh segment snapshot.  Nothing is
//! cached between calls and no state is shared, so a `Router` can be used
//! from any number of threads at once.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `rr-core` types.        |

pub mod error;
pub mod finder;
pub mod frontier;
pub mod graph;
pub mod reconstruct;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{RoutingError, RoutingResult};
pub use finder::{SearchTables, find_path, find_path_with};
pub use frontier::{Frontier, FrontierKind, HeapFrontier, LinearScanFrontier};
pub use graph::Graph;
pub use reconstruct::reconstruct;
pub use router::{Router, SegmentSource, StationLookup, compute_shortest_path};
