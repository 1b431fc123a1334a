//! Unit tests for td-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BusId, StopId};

    #[test]
    fn index_roundtrip() {
        let id = StopId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(StopId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(StopId(0) < StopId(1));
        assert!(BusId(100) > BusId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(StopId::INVALID.0, u16::MAX);
        assert_eq!(BusId::INVALID.0, u16::MAX);
        assert_eq!(StopId::default(), StopId::INVALID);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(StopId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(BusId(7).to_string(), "BusId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(55.611087, 37.20829);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude() {
        // Along a meridian the formula reduces to R·Δφ: ~111.195 km.
        let a = GeoPoint::new(55.0, 37.0);
        let b = GeoPoint::new(56.0, 37.0);
        let d = a.distance_m(b);
        assert!((d - 111_194.93).abs() < 1.0, "got {d}");
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let a = GeoPoint::new(0.0, 10.0);
        let b = GeoPoint::new(0.0, 11.0);
        let d = a.distance_m(b);
        assert!((d - 111_194.93).abs() < 1.0, "got {d}");
    }

    #[test]
    fn longitude_shrinks_with_latitude() {
        // At 60° N a degree of longitude spans roughly half its equator length.
        let a = GeoPoint::new(60.0, 10.0);
        let b = GeoPoint::new(60.0, 11.0);
        let d = a.distance_m(b);
        assert!((d - 55_597.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(55.574371, 37.6517);
        let b = GeoPoint::new(55.581065, 37.64839);
        assert_eq!(a.distance_m(b), b.distance_m(a));
    }
}

#[cfg(test)]
mod settings {
    use crate::RoutingSettings;

    #[test]
    fn wire_velocity_in_metres_per_minute() {
        let s = RoutingSettings::from_wire(6.0, 30.0);
        assert_eq!(s.wait_time, 6.0);
        assert_eq!(s.velocity, 500.0); // 30 km/h = 500 m/min
    }

    #[test]
    fn non_integral_velocity() {
        let s = RoutingSettings::from_wire(2.0, 40.0);
        assert!((s.velocity - 2000.0 / 3.0).abs() < 1e-9);
    }
}
