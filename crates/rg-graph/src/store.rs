//! Node coordinate store.
//!
//! One store per district, built once from the external node table and then
//! shared read-only across every per-cell computation.  The store keeps
//! *all* nodes it is given, in-box or not: half-edge interpolation needs the
//! positions of neighbors that lie outside the cell (and possibly outside
//! the district).

use rustc_hash::FxHashMap;

use rg_core::{GeoPoint, NodeId, RgError, RgResult};

/// Maps a node identifier to its geographic position.  Immutable once loaded.
#[derive(Debug, Default, Clone)]
pub struct CoordinateStore {
    nodes: FxHashMap<NodeId, GeoPoint>,
}

impl CoordinateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self { nodes: FxHashMap::with_capacity_and_hasher(nodes, Default::default()) }
    }

    /// Record a node position.  The first record for an id wins; the source
    /// data occasionally repeats node elements and the repeats are ignored.
    pub fn insert(&mut self, id: NodeId, pos: GeoPoint) {
        self.nodes.entry(id).or_insert(pos);
    }

    pub fn get(&self, id: NodeId) -> Option<GeoPoint> {
        self.nodes.get(&id).copied()
    }

    /// Position of `id`, or the fatal missing-node error.
    ///
    /// Every adjacency entry is validated against the store when the graph
    /// is built, so a miss here means the caller bypassed the builder or the
    /// upstream data is inconsistent; either way not recoverable.
    pub fn coord(&self, id: NodeId) -> RgResult<GeoPoint> {
        self.get(id).ok_or(RgError::NodeNotFound(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
