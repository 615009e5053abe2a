//! District road graph and its builder.
//!
//! # Edge rules
//!
//! The graph is an undirected adjacency list over node identifiers, filtered
//! by the district bounding box edge-by-edge:
//!
//! - both endpoints inside → the edge is recorded under both endpoints
//!   (symmetric);
//! - exactly one endpoint inside → the inside endpoint records the outside
//!   neighbor, the outside node gets no entry.  The asymmetry is deliberate:
//!   it models a road dangling out of the district, which still contributes
//!   to the inside node's degree and, after boundary interpolation, to road
//!   length;
//! - both endpoints outside → the pair is dropped entirely.
//!
//! Neighbor lists are deduplicated, so ways that retrace a segment do not
//! create parallel edges.

use rustc_hash::FxHashMap;

use rg_core::{BoundingBox, NodeId, RgResult};

use crate::store::CoordinateStore;

// ── DistrictGraph ─────────────────────────────────────────────────────────────

/// Read-only adjacency over a district's road network.
///
/// Construct with [`DistrictGraphBuilder`].  Shared by `&` reference across
/// concurrent cell workers; all methods take `&self`.
#[derive(Debug, Default, Clone)]
pub struct DistrictGraph {
    adjacency: FxHashMap<NodeId, Vec<NodeId>>,
}

impl DistrictGraph {
    /// Iterator over every node that carries an adjacency entry.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Neighbor list of `node`; empty if the node has no entry.
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}

// ── DistrictGraphBuilder ──────────────────────────────────────────────────────

/// Accumulates way node-sequences into a [`DistrictGraph`].
///
/// Every node id a way references must already be present in the coordinate
/// store; a miss fails fast with `RgError::NodeNotFound` rather than
/// silently skipping the pair, which would corrupt degree counts.
pub struct DistrictGraphBuilder<'a> {
    store: &'a CoordinateStore,
    bbox: BoundingBox,
    adjacency: FxHashMap<NodeId, Vec<NodeId>>,
}

impl<'a> DistrictGraphBuilder<'a> {
    pub fn new(store: &'a CoordinateStore, bbox: BoundingBox) -> Self {
        Self { store, bbox, adjacency: FxHashMap::default() }
    }

    /// Add every consecutive node pair of one way.
    pub fn add_way(&mut self, nodes: &[NodeId]) -> RgResult<()> {
        for pair in nodes.windows(2) {
            self.add_edge(pair[0], pair[1])?;
        }
        Ok(())
    }

    /// Convenience for the ways already grouped by the loader.
    pub fn add_ways(&mut self, ways: &[Vec<NodeId>]) -> RgResult<()> {
        for way in ways {
            self.add_way(way)?;
        }
        Ok(())
    }

    fn add_edge(&mut self, u: NodeId, v: NodeId) -> RgResult<()> {
        let u_inside = self.bbox.contains(self.store.coord(u)?);
        let v_inside = self.bbox.contains(self.store.coord(v)?);

        if u_inside {
            let list = self.adjacency.entry(u).or_default();
            if !list.contains(&v) {
                list.push(v);
            }
        }
        if v_inside {
            let list = self.adjacency.entry(v).or_default();
            if !list.contains(&u) {
                list.push(u);
            }
        }
        Ok(())
    }

    pub fn build(self) -> DistrictGraph {
        DistrictGraph { adjacency: self.adjacency }
    }
}
