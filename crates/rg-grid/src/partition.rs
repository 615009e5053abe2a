//! Per-cell partitioning of the district graph into full and half edges.

use rustc_hash::FxHashMap;

use rg_core::{NodeId, RgResult};
use rg_graph::{CoordinateStore, DistrictGraph};

use crate::cell::CellBounds;

/// The edge sets of one cell.
///
/// - `full`: keyed by every node inside the cell bounds, value = neighbors
///   also inside.  An edge with both endpoints inside therefore appears
///   under *both* endpoints; road-length accounting halves the full sum to
///   cancel the double count.
/// - `half`: keyed by an inside node, value = neighbors outside the bounds
///   (in another cell, or dangling out of the district).  Each half edge
///   appears exactly once.
///
/// Every `full` key is inside the queried bounds.  Outside nodes never key
/// either map; their positions are fetched from the coordinate store when a
/// half edge is interpolated.
#[derive(Debug, Default)]
pub struct CellEdges {
    pub full: FxHashMap<NodeId, Vec<NodeId>>,
    pub half: FxHashMap<NodeId, Vec<NodeId>>,
}

impl CellEdges {
    /// `true` if no graph node lies inside the cell.
    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.full.len()
    }

    /// Number of half-edge neighbors recorded for `node`.
    pub fn half_degree(&self, node: NodeId) -> usize {
        self.half.get(&node).map_or(0, Vec::len)
    }

    /// In-cell node ids in ascending order.  Sorted iteration keeps float
    /// summation and nearest-node tie-breaks independent of hash-map order.
    pub fn sorted_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.full.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }
}

/// Classify every district-graph edge against `bounds`.
///
/// Nodes whose position falls outside the half-open bounds are invisible to
/// this cell even when in-cell nodes reference them; they surface only as
/// half-edge neighbors.
pub fn partition(
    bounds: &CellBounds,
    store: &CoordinateStore,
    graph: &DistrictGraph,
) -> RgResult<CellEdges> {
    let mut edges = CellEdges::default();

    for node in graph.nodes() {
        if !bounds.contains(store.coord(node)?) {
            continue;
        }
        // In-cell node: its full entry exists even if every neighbor is
        // elsewhere, so isolated nodes still count toward the cell.
        let mut full_neighbors = Vec::new();
        for &neighbor in graph.neighbors(node) {
            if bounds.contains(store.coord(neighbor)?) {
                full_neighbors.push(neighbor);
            } else {
                edges.half.entry(node).or_default().push(neighbor);
            }
        }
        edges.full.insert(node, full_neighbors);
    }

    Ok(edges)
}
