//! Station: a named network node.

use crate::{CoreError, CoreResult, StationId};

/// A station with a stable short code (e.g. `"MX"`) and a display name
/// (e.g. `"Montreux"`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    pub id:   StationId,
    pub code: String,
    pub name: String,
}

impl Station {
    /// Build a station, trimming the code.  Fails on an empty code since the
    /// code is the only handle callers route by.
    pub fn new(id: StationId, code: impl Into<String>, name: impl Into<String>) -> CoreResult<Self> {
        let code = code.into().trim().to_owned();
        if code.is_empty() {
            return Err(CoreError::EmptyCode);
        }
        Ok(Self { id, code, name: name.into() })
    }
}
