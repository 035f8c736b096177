//! `rr-core`: foundational types for the `rail_route` workspace.
//!
//! This crate is a dependency of every other `rr-*` crate.  It has no `rr-*`
//! dependencies and a single mandatory external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `StationId`, `SegmentId`                               |
//! | [`station`]   | `Station` (id + short code + display name)             |
//! | [`segment`]   | `Segment`, the directed weighted edge                  |
//! | [`path`]      | `PathResult`, the output of a routing query            |
//! | [`error`]     | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod path;
pub mod segment;
pub mod station;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{SegmentId, StationId};
pub use path::PathResult;
pub use segment::Segment;
pub use station::Station;
