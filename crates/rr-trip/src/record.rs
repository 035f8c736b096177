//! Plain data types handed to trip recorders.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};

use rr_core::{PathResult, SegmentId, StationId};
use rr_network::StationDirectory;

use crate::{AnalyticCode, TripError, TripResult};

/// Round a distance to the two decimal places trips are stored with.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// One hop of a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripLeg {
    /// 1-based position within the trip.
    pub sequence_order: u32,
    pub segment_id:     SegmentId,
    pub from_code:      String,
    pub to_code:        String,
    pub distance_km:    f64,
}

/// Everything a recorder persists about one computed trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub from_code:     String,
    pub to_code:       String,
    pub analytic_code: AnalyticCode,
    /// Label of the train that ran the trip, when known.
    pub train:         Option<String>,
    /// Total distance from the search, rounded to 2 decimals.
    pub distance_km:   f64,
    /// Station codes in travel order.
    pub path:          Vec<String>,
    pub legs:          Vec<TripLeg>,
    /// When the trip was computed, whole seconds in UTC.
    pub created_at:    DateTime<Utc>,
}

impl TripRecord {
    /// Build a record from a routing result, resolving station ids to codes
    /// through `directory`.  Stamped with the current time and no train.
    pub fn from_path(
        path:          &PathResult,
        directory:     &StationDirectory,
        analytic_code: AnalyticCode,
    ) -> TripResult<Self> {
        let code = |id: StationId| {
            directory
                .code_of(id)
                .map(str::to_owned)
                .ok_or(TripError::UnknownStation(id))
        };

        let (source, target) = match (path.source(), path.target()) {
            (Some(source), Some(target)) => (source, target),
            _ => return Err(TripError::EmptyPath),
        };
        let codes = path
            .stations
            .iter()
            .map(|&id| code(id))
            .collect::<TripResult<Vec<String>>>()?;

        let legs = path
            .segments
            .iter()
            .enumerate()
            .map(|(i, seg)| {
                Ok(TripLeg {
                    sequence_order: i as u32 + 1,
                    segment_id:     seg.id,
                    from_code:      code(seg.from)?,
                    to_code:        code(seg.to)?,
                    distance_km:    seg.distance_km,
                })
            })
            .collect::<TripResult<Vec<TripLeg>>>()?;

        Ok(Self {
            from_code: code(source)?,
            to_code: code(target)?,
            analytic_code,
            train: None,
            distance_km: round_km(path.total_distance_km),
            path: codes,
            legs,
            created_at: whole_seconds(Utc::now()),
        })
    }

    /// Attach the train that ran the trip.
    pub fn with_train(mut self, train: impl Into<String>) -> Self {
        self.train = Some(train.into());
        self
    }

    /// Override the creation time.  Sub-second precision is dropped.
    pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = whole_seconds(created_at);
        self
    }

    /// Creation time as RFC 3339, e.g. `2026-10-18T09:30:00+00:00`.
    pub fn created_at_rfc3339(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}

fn whole_seconds(at: DateTime<Utc>) -> DateTime<Utc> {
    at.with_nanosecond(0).unwrap_or(at)
}
