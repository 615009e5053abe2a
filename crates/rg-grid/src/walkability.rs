//! Monte Carlo walkability estimator.
//!
//! For a cell, draw random point pairs inside its exact bounds, snap each
//! point to the nearest graph node of the surrounding 3x3-cell neighborhood,
//! and compare the straight-line distance with the routed distance (network
//! shortest path plus both snap legs).  Averaged over epochs, the ratio
//! estimates how directly a pedestrian can actually travel within the cell:
//! 1.0 means the network is as direct as the crow flies, values near zero
//! mean long detours or no network at all.

use rg_core::{BoundingBox, CellRng, GeoPoint, NodeId, RgResult};
use rg_graph::{CoordinateStore, DistrictGraph};

use crate::cell::CellBounds;
use crate::config::IndicatorConfig;
use crate::partition::partition;
use crate::round4;
use crate::router::Router;

/// Walkability ratio of one cell, rounded to 4 decimals.
///
/// Sampling runs `cfg.epochs` epochs of `cfg.pairs_per_epoch` point pairs.
/// A pair contributes a sample only if both points snap to a node, a route
/// exists between the snap nodes, and the routed distance is nonzero; the
/// ratio is then straight-line / routed, which the triangle inequality
/// keeps in (0, 1].  Epochs with no samples contribute no value, and a cell
/// where no epoch produced a value (typically an empty neighborhood) gets
/// 0.0.
pub fn walkability_ratio<R: Router>(
    cell: &CellBounds,
    district: BoundingBox,
    store: &CoordinateStore,
    graph: &DistrictGraph,
    router: &R,
    cfg: &IndicatorConfig,
    rng: &mut CellRng,
) -> RgResult<f64> {
    // One partition of the expanded bounds serves every sample; only the
    // full-edge map matters since routing never leaves the neighborhood.
    let hood_bounds = cell.expanded(cfg.cell_size_deg, district);
    let hood = partition(&hood_bounds, store, graph)?;
    let nodes = hood.sorted_nodes();

    let mut epoch_values = Vec::with_capacity(cfg.epochs);
    for _ in 0..cfg.epochs {
        let mut sum = 0.0;
        let mut samples = 0usize;

        for _ in 0..cfg.pairs_per_epoch {
            // Draw order is fixed (source lat, source lon, dest lat, dest
            // lon) and part of the reproducibility contract.
            let source = GeoPoint::new(
                rng.gen_range(cell.min_lat..cell.max_lat),
                rng.gen_range(cell.min_lon..cell.max_lon),
            );
            let dest = GeoPoint::new(
                rng.gen_range(cell.min_lat..cell.max_lat),
                rng.gen_range(cell.min_lon..cell.max_lon),
            );
            let beeline_m = source.distance_m(dest);

            let Some((source_node, source_snap_m)) = nearest_node(source, &nodes, store)?
            else {
                continue;
            };
            let Some((dest_node, dest_snap_m)) = nearest_node(dest, &nodes, store)? else {
                continue;
            };
            let Some(path_m) =
                router.shortest_distance_m(&hood.full, store, source_node, dest_node)?
            else {
                // No path within the neighborhood: the pair is excluded from
                // the estimate rather than dragging it toward zero.
                continue;
            };

            let routed_m = path_m + source_snap_m + dest_snap_m;
            if routed_m > 0.0 {
                sum += beeline_m / routed_m;
                samples += 1;
            }
        }

        if samples > 0 {
            epoch_values.push(sum / samples as f64);
        }
    }

    if epoch_values.is_empty() {
        Ok(0.0)
    } else {
        let mean = epoch_values.iter().sum::<f64>() / epoch_values.len() as f64;
        Ok(round4(mean))
    }
}

/// Nearest node to `p` among `nodes`, with its haversine snap distance.
///
/// Linear scan with direct distance comparison.  `nodes` is in ascending id
/// order and the comparison is strict, so ties resolve to the lowest node
/// id; that tie-break is part of the reproducibility contract.
fn nearest_node(
    p: GeoPoint,
    nodes: &[NodeId],
    store: &CoordinateStore,
) -> RgResult<Option<(NodeId, f64)>> {
    let mut best: Option<(NodeId, f64)> = None;
    for &node in nodes {
        let d = p.distance_m(store.coord(node)?);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((node, d));
        }
    }
    Ok(best)
}
