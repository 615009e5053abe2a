//! Intersection counting.

use crate::partition::CellEdges;

/// Count the 3-way and 4-way intersections in a cell.
///
/// A node's degree is its full-edge neighbor count plus its half-edge
/// neighbor count, so an intersection sitting near a cell boundary is still
/// counted at its true degree.  Only degrees 3 and 4 are indicators of
/// urban road texture; all other degrees are ignored.
pub fn count_intersections(edges: &CellEdges) -> (u32, u32) {
    let mut three_ways = 0;
    let mut four_ways = 0;

    for (node, full_neighbors) in &edges.full {
        let degree = full_neighbors.len() + edges.half_degree(*node);
        match degree {
            3 => three_ways += 1,
            4 => four_ways += 1,
            _ => {}
        }
    }

    (three_ways, four_ways)
}
