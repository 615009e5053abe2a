//! Grid cells and their enumeration order.
//!
//! A district's (grid-snapped) bounding box is tiled by fixed-size cells.
//! Cells are numbered by increasing longitude band, and by increasing
//! latitude within each band, the numbering every downstream consumer of
//! the indicator table relies on.
//!
//! Enumeration walks the box in integer cell units (`round(deg / size)`)
//! rather than accumulating floats, so no row or column can be skipped or
//! duplicated by drift, and every cell edge lands exactly on a grid line.

use rg_core::{BoundingBox, CellId, GeoPoint};

/// Grid cell edge length in degrees, on both axes.
pub const CELL_SIZE_DEG: f64 = 0.01;

/// Bounds of one grid cell (or of a cell neighborhood): half-open on both
/// axes, `[min_lat, max_lat) x [min_lon, max_lon)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl CellBounds {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self { min_lat, max_lat, min_lon, max_lon }
    }

    /// `true` if `p` lies inside the half-open bounds.
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.min_lat
            && p.lat < self.max_lat
            && p.lon >= self.min_lon
            && p.lon < self.max_lon
    }

    /// South-west corner, the coordinate reported for the cell.
    #[inline]
    pub fn sw_corner(&self) -> GeoPoint {
        GeoPoint::new(self.min_lat, self.min_lon)
    }

    /// Grow the bounds by one `cell_size_deg` step on every side, clipped to
    /// `district`.
    ///
    /// This is the 3x3 neighborhood the walkability estimator routes over;
    /// at district edges and corners the neighborhood simply shrinks.  The
    /// new edges are computed on the same integer-scaled grid as
    /// [`enumerate_cells`], not by float addition, so a hood edge always
    /// coincides bit-exactly with the matching cell edge and a node sitting
    /// on it cannot flip sides.
    pub fn expanded(&self, cell_size_deg: f64, district: BoundingBox) -> CellBounds {
        let scale = (1.0 / cell_size_deg).round();
        let step_down = |x: f64| ((x * scale).round() - 1.0) / scale;
        let step_up = |x: f64| ((x * scale).round() + 1.0) / scale;
        CellBounds {
            min_lat: step_down(self.min_lat).max(district.min_lat),
            max_lat: step_up(self.max_lat).min(district.max_lat),
            min_lon: step_down(self.min_lon).max(district.min_lon),
            max_lon: step_up(self.max_lon).min(district.max_lon),
        }
    }
}

/// Number of cells that would tile `bbox`, without enumerating them.
///
/// Saturates at `u64::MAX`; the driver uses this to reject boxes whose
/// grid would not fit the `CellId` range before any allocation happens.
pub fn cell_count(bbox: BoundingBox, cell_size_deg: f64) -> u64 {
    let scale = (1.0 / cell_size_deg).round();
    let rows = ((bbox.max_lat * scale).round() as i64 - (bbox.min_lat * scale).round() as i64)
        .max(0) as u64;
    let bands = ((bbox.max_lon * scale).round() as i64 - (bbox.min_lon * scale).round() as i64)
        .max(0) as u64;
    bands.saturating_mul(rows)
}

/// Enumerate the cells tiling `bbox` in grid-number order.
///
/// `bbox` must already be snapped to the grid (see
/// [`BoundingBox::snap_to_grid`]) and must tile into at most `u32::MAX`
/// cells (check with [`cell_count`]; the per-district driver rejects
/// anything larger).  Cell edges are recomputed from integer cell indices
/// so adjacent cells share bit-identical boundaries.
pub fn enumerate_cells(bbox: BoundingBox, cell_size_deg: f64) -> Vec<(CellId, CellBounds)> {
    let scale = (1.0 / cell_size_deg).round();
    let lat0 = (bbox.min_lat * scale).round() as i64;
    let lat1 = (bbox.max_lat * scale).round() as i64;
    let lon0 = (bbox.min_lon * scale).round() as i64;
    let lon1 = (bbox.max_lon * scale).round() as i64;

    let bands = (lon1 - lon0).max(0) as usize;
    let rows = (lat1 - lat0).max(0) as usize;
    let mut cells = Vec::with_capacity(bands * rows);

    let mut next = 0u32;
    for lon_i in lon0..lon1 {
        for lat_i in lat0..lat1 {
            cells.push((
                CellId(next),
                CellBounds::new(
                    lat_i as f64 / scale,
                    (lat_i + 1) as f64 / scale,
                    lon_i as f64 / scale,
                    (lon_i + 1) as f64 / scale,
                ),
            ));
            next += 1;
        }
    }
    cells
}
