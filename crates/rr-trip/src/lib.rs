//! `rr-trip`: turning computed paths into persisted trip records.
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`analytic`]     | `AnalyticCode` bookkeeping codes                          |
//! | [`record`]       | `TripRecord`, `TripLeg`, `round_km`                       |
//! | [`recorder`]     | `TripRecorder` trait, `MemoryTripRecorder`                |
//! | [`csv_recorder`] | `CsvTripRecorder` (`trips.csv`, `trip_segments.csv`)      |
//! | [`error`]        | `TripError`, `TripResult<T>`                              |
//!
//! # Usage
//!
//! ```rust,ignore
//! let path = network.route(&Router::default(), "MX", "GST")?;
//! let trip = TripRecord::from_path(&path, &network.stations, AnalyticCode::Tourisme)?;
//! let mut recorder = CsvTripRecorder::new(Path::new("./trips"))?;
//! let trip_id = recorder.record(&trip)?;
//! recorder.finish()?;
//! ```

pub mod analytic;
pub mod csv_recorder;
pub mod error;
pub mod record;
pub mod recorder;


pub use analytic::AnalyticCode;
pub use csv_recorder::CsvTripRecorder;
pub use error::{TripError, TripResult};
pub use record::{TripLeg, TripRecord, round_km};
pub use recorder::{MemoryTripRecorder, TripRecorder};
