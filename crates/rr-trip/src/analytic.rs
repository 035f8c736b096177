//! Bookkeeping codes attached to every recorded trip.

use std::str::FromStr;

use crate::TripError;

/// Why a trip was run.  Parsed case-insensitively, displayed upper-case.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum AnalyticCode {
    #[default]
    Passager,
    Fret,
    Maintenance,
    Test,
    Tourisme,
}

impl AnalyticCode {
    pub const ALL: [AnalyticCode; 5] = [
        AnalyticCode::Passager,
        AnalyticCode::Fret,
        AnalyticCode::Maintenance,
        AnalyticCode::Test,
        AnalyticCode::Tourisme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnalyticCode::Passager    => "PASSAGER",
            AnalyticCode::Fret        => "FRET",
            AnalyticCode::Maintenance => "MAINTENANCE",
            AnalyticCode::Test        => "TEST",
            AnalyticCode::Tourisme    => "TOURISME",
        }
    }

    /// Human-readable label shown next to the code.
    pub fn description(self) -> &'static str {
        match self {
            AnalyticCode::Passager    => "Transport de passagers",
            AnalyticCode::Fret        => "Transport de marchandises",
            AnalyticCode::Maintenance => "Trajet de maintenance",
            AnalyticCode::Test        => "Trajet de test",
            AnalyticCode::Tourisme    => "Train panoramique touristique",
        }
    }
}

impl FromStr for AnalyticCode {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TripError::UnknownAnalyticCode(wanted.to_owned()))
    }
}

impl std::fmt::Display for AnalyticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
