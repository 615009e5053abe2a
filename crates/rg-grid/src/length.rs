//! Road length per cell, with boundary interpolation for half edges.

use rg_core::{GeoPoint, RgResult};
use rg_graph::CoordinateStore;

use crate::cell::CellBounds;
use crate::partition::CellEdges;

/// Total road length inside `bounds`, in metres.
///
/// Full edges: haversine length summed over both directed records, then
/// halved.  Half edges: length from the inside endpoint to the point where
/// the straight segment crosses the cell boundary.
///
/// Summation iterates nodes in ascending id order so the result is the same
/// however the adjacency was built up.
pub fn road_length_m(
    bounds: &CellBounds,
    store: &CoordinateStore,
    edges: &CellEdges,
) -> RgResult<f64> {
    let mut full_sum = 0.0;
    for node in edges.sorted_nodes() {
        let pos = store.coord(node)?;
        for &neighbor in &edges.full[&node] {
            full_sum += pos.distance_m(store.coord(neighbor)?);
        }
    }
    // Each full edge was recorded under both endpoints.
    let mut total = full_sum / 2.0;

    let mut half_nodes: Vec<_> = edges.half.keys().copied().collect();
    half_nodes.sort_unstable();
    for node in half_nodes {
        let pos = store.coord(node)?;
        for &neighbor in &edges.half[&node] {
            let crossing = boundary_crossing(bounds, pos, store.coord(neighbor)?);
            total += pos.distance_m(crossing);
        }
    }

    Ok(total)
}

/// Point where the segment from inside `src` to outside `dst` crosses the
/// cell boundary, by linear interpolation in degree space.
///
/// The crossing side is chosen by testing, in priority order: below
/// `min_lat`, at/above `max_lat`, below `min_lon`, at/above `max_lon`.
/// A neighbor outside on both axes resolves to the first matching side,
/// with the crossing point taken on that side's extended grid line.  The
/// branch order is a fixed tie-break; downstream calibration depends on it,
/// so do not reorder without re-deriving that calibration.
fn boundary_crossing(bounds: &CellBounds, src: GeoPoint, dst: GeoPoint) -> GeoPoint {
    debug_assert!(bounds.contains(src));
    debug_assert!(!bounds.contains(dst));

    if dst.lat < bounds.min_lat {
        GeoPoint::new(bounds.min_lat, lon_at(src, dst, bounds.min_lat))
    } else if dst.lat >= bounds.max_lat {
        GeoPoint::new(bounds.max_lat, lon_at(src, dst, bounds.max_lat))
    } else if dst.lon < bounds.min_lon {
        GeoPoint::new(lat_at(src, dst, bounds.min_lon), bounds.min_lon)
    } else {
        // Only remaining way to be outside half-open bounds.
        GeoPoint::new(lat_at(src, dst, bounds.max_lon), bounds.max_lon)
    }
}

/// Longitude of the src→dst segment at latitude `lat`.
///
/// `dst.lat != src.lat` is guaranteed by the callers' branch conditions
/// (dst strictly beyond a latitude line that src is within).
fn lon_at(src: GeoPoint, dst: GeoPoint, lat: f64) -> f64 {
    (lat - src.lat) * (dst.lon - src.lon) / (dst.lat - src.lat) + src.lon
}

/// Latitude of the src→dst segment at longitude `lon`.
fn lat_at(src: GeoPoint, dst: GeoPoint, lon: f64) -> f64 {
    (lon - src.lon) * (dst.lat - src.lat) / (dst.lon - src.lon) + src.lat
}
