//! Geographic coordinate type, haversine distance, and bounding boxes.
//!
//! `GeoPoint` uses `f64` latitude/longitude: the node table carries at least
//! seven decimal digits of precision, which is right at the edge of what an
//! `f32` can represent at all, let alone survive interpolation arithmetic.

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Earth radius used for all haversine distances, in metres.
pub const EARTH_RADIUS_M: f64 = 6_378_100.0;

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat, self.lon)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// A district's axis-aligned bounding box in degrees.
///
/// Membership is **inclusive** on all four edges, matching the district
/// filter applied when the road graph is built.  Grid cells, by contrast,
/// are half-open; see `rg-grid`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self { min_lat, max_lat, min_lon, max_lon }
    }

    /// `true` if `p` lies inside the box (edges included).
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.min_lat
            && p.lat <= self.max_lat
            && p.lon >= self.min_lon
            && p.lon <= self.max_lon
    }

    /// Expand the minima down and the maxima up to whole multiples of
    /// `cell_size_deg`, so a fixed-size grid tiles the box exactly.
    ///
    /// For the default 0.01° cell this is `floor(100·x)/100` on the minima
    /// and `ceil(100·x)/100` on the maxima.
    pub fn snap_to_grid(self, cell_size_deg: f64) -> BoundingBox {
        let scale = (1.0 / cell_size_deg).round();
        BoundingBox {
            min_lat: (self.min_lat * scale).floor() / scale,
            max_lat: (self.max_lat * scale).ceil() / scale,
            min_lon: (self.min_lon * scale).floor() / scale,
            max_lon: (self.max_lon * scale).ceil() / scale,
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}] x [{:.2}, {:.2}]",
            self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}
