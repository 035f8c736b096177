//! In-memory station directory.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use rr_core::{PathResult, Station, StationId};
use rr_routing::StationLookup;

use crate::{NetworkError, NetworkResult};

/// Stations indexed by id (ordered) and by short code.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    by_id:   BTreeMap<StationId, Station>,
    by_code: FxHashMap<String, StationId>,
}

impl StationDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station.  Both its id and its code must be new.
    pub fn insert(&mut self, station: Station) -> NetworkResult<()> {
        if self.by_id.contains_key(&station.id) {
            return Err(NetworkError::DuplicateStation(station.id.to_string()));
        }
        if self.by_code.contains_key(&station.code) {
            return Err(NetworkError::DuplicateStation(station.code));
        }
        self.by_code.insert(station.code.clone(), station.id);
        self.by_id.insert(station.id, station);
        Ok(())
    }

    pub fn by_code(&self, code: &str) -> Option<&Station> {
        self.by_code.get(code).and_then(|id| self.by_id.get(id))
    }

    pub fn by_id(&self, id: StationId) -> Option<&Station> {
        self.by_id.get(&id)
    }

    pub fn code_of(&self, id: StationId) -> Option<&str> {
        self.by_id.get(&id).map(|s| s.code.as_str())
    }

    /// Station codes along `path`, in travel order.
    ///
    /// Ids unknown to this directory are skipped.
    pub fn path_codes(&self, path: &PathResult) -> Vec<&str> {
        path.stations.iter().filter_map(|&id| self.code_of(id)).collect()
    }

    /// Stations in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl StationLookup for StationDirectory {
    fn station_id(&self, code: &str) -> Option<StationId> {
        self.by_code.get(code).copied()
    }
}
