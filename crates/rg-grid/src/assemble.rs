//! Per-district indicator assembly.
//!
//! Drives the grid loop: snap the district box to the grid, enumerate the
//! cells, and compute one [`IndicatorRow`] per cell by running partition,
//! intersection counting, length accounting, and the walkability estimator
//! in sequence.
//!
//! Cells are fully independent: the coordinate store and district graph are
//! read-only, and every cell seeds its own RNG from the master seed and its
//! grid number.  With the `parallel` feature the loop runs on Rayon's pool
//! and still produces bit-identical rows in the same order.

use rg_core::{BoundingBox, CellId, CellRng, GeoPoint, RgError, RgResult};
use rg_graph::{CoordinateStore, DistrictGraph};

use crate::cell::{cell_count, enumerate_cells, CellBounds};
use crate::config::IndicatorConfig;
use crate::intersect::count_intersections;
use crate::length::road_length_m;
use crate::partition::partition;
use crate::round4;
use crate::router::DijkstraRouter;
use crate::walkability::walkability_ratio;

/// One output row, in grid-number order.  Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRow {
    pub cell: CellId,
    /// South-west corner of the cell.
    pub sw_corner: GeoPoint,
    pub three_ways: u32,
    pub four_ways: u32,
    /// Metres, rounded to 4 decimals.
    pub road_length_m: f64,
    /// Dimensionless, in [0, 1], rounded to 4 decimals; 0.0 when no epoch
    /// produced a sample.
    pub walkability_ratio: f64,
}

/// Compute the indicator table for one district.
///
/// `district` is the raw bounding box from the district table; it is
/// snapped to the grid here so the cells tile it exactly.
pub fn district_indicators(
    store: &CoordinateStore,
    graph: &DistrictGraph,
    district: BoundingBox,
    cfg: &IndicatorConfig,
) -> RgResult<Vec<IndicatorRow>> {
    cfg.validate()?;
    let bbox = district.snap_to_grid(cfg.cell_size_deg);

    let count = cell_count(bbox, cfg.cell_size_deg);
    if count > u64::from(u32::MAX) {
        return Err(RgError::Config(format!(
            "grid of {count} cells exceeds the grid-number range"
        )));
    }
    let cells = enumerate_cells(bbox, cfg.cell_size_deg);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        cells
            .par_iter()
            .map(|&(id, bounds)| cell_row(id, &bounds, bbox, store, graph, cfg))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        cells
            .iter()
            .map(|&(id, bounds)| cell_row(id, &bounds, bbox, store, graph, cfg))
            .collect()
    }
}

fn cell_row(
    id: CellId,
    bounds: &CellBounds,
    district: BoundingBox,
    store: &CoordinateStore,
    graph: &DistrictGraph,
    cfg: &IndicatorConfig,
) -> RgResult<IndicatorRow> {
    let edges = partition(bounds, store, graph)?;
    let (three_ways, four_ways) = count_intersections(&edges);
    let road_length = round4(road_length_m(bounds, store, &edges)?);

    let mut rng = CellRng::new(cfg.seed, id);
    let ratio =
        walkability_ratio(bounds, district, store, graph, &DijkstraRouter, cfg, &mut rng)?;

    Ok(IndicatorRow {
        cell: id,
        sw_corner: bounds.sw_corner(),
        three_ways,
        four_ways,
        road_length_m: road_length,
        walkability_ratio: ratio,
    })
}
