//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The walkability estimator calls routing via the [`Router`] trait, so a
//! different engine (A*, contraction hierarchies) can be swapped in without
//! touching the sampler.  The default [`DijkstraRouter`] is sufficient for
//! the 3x3-neighborhood graphs it is asked to search.
//!
//! # Restricted node set
//!
//! The adjacency passed in defines the searchable node set (the cell's
//! neighborhood).  Neighbor ids without an entry of their own are skipped
//! during relaxation rather than treated as an error; the caller already
//! decided they are out of bounds.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use rg_core::{NodeId, RgResult};
use rg_graph::CoordinateStore;

/// Distance-map initializer; large enough that any real route undercuts it.
/// Never escapes this module: an unreached destination is reported as `None`.
const UNREACHED_M: f64 = 1.0e10;

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable single-source single-target routing engine.
///
/// Implementations must be `Send + Sync` so one instance can serve all
/// parallel cell workers.
pub trait Router: Send + Sync {
    /// Shortest routed distance in metres from `from` to `to` over the
    /// restricted adjacency, `Ok(None)` if `to` is unreachable.
    fn shortest_distance_m(
        &self,
        adjacency: &FxHashMap<NodeId, Vec<NodeId>>,
        store: &CoordinateStore,
        from: NodeId,
        to: NodeId,
    ) -> RgResult<Option<f64>>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Classic lazy-deletion Dijkstra.  Edge weight is the haversine distance
/// between the endpoints' coordinates; a node may sit in the heap multiple
/// times under decreasing distances, stale entries being discarded on pop.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_distance_m(
        &self,
        adjacency: &FxHashMap<NodeId, Vec<NodeId>>,
        store: &CoordinateStore,
        from: NodeId,
        to: NodeId,
    ) -> RgResult<Option<f64>> {
        dijkstra(adjacency, store, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry ordered by distance, then node id so that equal-distance pops
/// are deterministic.
#[derive(Copy, Clone, PartialEq)]
struct HeapEntry {
    dist_m: f64,
    node: NodeId,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist_m
            .total_cmp(&other.dist_m)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(
    adjacency: &FxHashMap<NodeId, Vec<NodeId>>,
    store: &CoordinateStore,
    from: NodeId,
    to: NodeId,
) -> RgResult<Option<f64>> {
    if !adjacency.contains_key(&from) || !adjacency.contains_key(&to) {
        return Ok(None);
    }
    if from == to {
        return Ok(Some(0.0));
    }

    let mut dist: FxHashMap<NodeId, f64> =
        adjacency.keys().map(|&n| (n, UNREACHED_M)).collect();
    dist.insert(from, 0.0);

    // Reverse makes BinaryHeap (max) behave as a min-heap.
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry { dist_m: 0.0, node: from }));

    while let Some(Reverse(HeapEntry { dist_m, node })) = heap.pop() {
        if node == to {
            return Ok(Some(dist_m));
        }
        // Skip stale heap entries.
        if dist_m > dist[&node] {
            continue;
        }

        let pos = store.coord(node)?;
        for &neighbor in &adjacency[&node] {
            // Neighbors outside the restricted set are not routable.
            let Some(&best) = dist.get(&neighbor) else { continue };
            let new_dist = dist_m + pos.distance_m(store.coord(neighbor)?);
            if new_dist < best {
                dist.insert(neighbor, new_dist);
                heap.push(Reverse(HeapEntry { dist_m: new_dist, node: neighbor }));
            }
        }
    }

    Ok(None)
}
