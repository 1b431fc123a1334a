//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` latitude/longitude degrees.  Distances between stops
//! feed directly into travel-time accumulation over many legs, so the extra
//! precision over `f32` is worth the doubled storage at directory scale
//! (one `f64` per matrix cell, N ≤ 65,535).

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance in metres.
    ///
    /// Uses the spherical identity
    /// `acos(((cos(φ₁+φ₂) + cos(φ₁−φ₂))·(1 + cos(λ₁−λ₂)))/2 − cos(φ₁+φ₂)) · R`,
    /// which avoids the separate sin terms of the haversine form.  The `acos`
    /// argument is clamped to `[-1, 1]`; rounding can push it a few ulps past
    /// 1 for identical or antipodal points.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlon = (self.lon - other.lon).to_radians();

        let a = (lat1 + lat2).cos();
        let b = (lat1 - lat2).cos();
        let cos_angle = ((a + b) * (1.0 + dlon.cos()) / 2.0 - a).clamp(-1.0, 1.0);
        cos_angle.acos() * EARTH_RADIUS_M
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
