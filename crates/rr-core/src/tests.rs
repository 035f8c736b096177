//! Unit tests for rr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{SegmentId, StationId};

    #[test]
    fn index_roundtrip() {
        let id = StationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(StationId(0) < StationId(1));
        assert!(SegmentId(100) > SegmentId(99));
    }

    #[test]
    fn from_position_rejects_overflow() {
        assert_eq!(SegmentId::try_from(7usize).unwrap(), SegmentId(7));
        assert!(SegmentId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(StationId(7).to_string(), "StationId(7)");
        assert_eq!(SegmentId(3).to_string(), "SegmentId(3)");
    }
}

#[cfg(test)]
mod station {
    use crate::{CoreError, Station, StationId};

    #[test]
    fn code_is_trimmed() {
        let s = Station::new(StationId(46), " MX ", "Montreux").unwrap();
        assert_eq!(s.code, "MX");
        assert_eq!(s.name, "Montreux");
    }

    #[test]
    fn blank_code_rejected() {
        assert_eq!(Station::new(StationId(1), "   ", "Nowhere"), Err(CoreError::EmptyCode));
    }
}

#[cfg(test)]
mod segment {
    use crate::{CoreError, Segment, SegmentId, StationId};

    #[test]
    fn zero_distance_allowed() {
        let s = Segment::new(SegmentId(0), StationId(1), StationId(2), 0.0).unwrap();
        assert_eq!(s.distance_km, 0.0);
    }

    #[test]
    fn negative_distance_rejected() {
        let err = Segment::new(SegmentId(5), StationId(1), StationId(2), -1.5).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDistance { segment: SegmentId(5), .. }));
    }

    #[test]
    fn non_finite_distance_rejected() {
        assert!(Segment::new(SegmentId(0), StationId(1), StationId(2), f64::NAN).is_err());
        assert!(Segment::new(SegmentId(0), StationId(1), StationId(2), f64::INFINITY).is_err());
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let s = Segment::new(SegmentId(0), StationId(1), StationId(2), 2.4).unwrap();
        let r = s.reversed(SegmentId(1));
        assert_eq!(r.id, SegmentId(1));
        assert!(r.connects(StationId(2), StationId(1)));
        assert!(!r.connects(StationId(1), StationId(2)));
        assert_eq!(r.distance_km, 2.4);
    }
}

#[cfg(test)]
mod path {
    use crate::{PathResult, Segment, SegmentId, StationId};

    #[test]
    fn endpoints_and_hops() {
        let seg = Segment::new(SegmentId(0), StationId(1), StationId(2), 5.0).unwrap();
        let p = PathResult {
            stations:          vec![StationId(1), StationId(2)],
            total_distance_km: 5.0,
            segments:          vec![seg],
        };
        assert_eq!(p.source(), Some(StationId(1)));
        assert_eq!(p.target(), Some(StationId(2)));
        assert_eq!(p.hop_count(), 1);
    }
}
