//! Synthetic district: a 0.02 x 0.02 degree box holding a small road
//! network, loosely shaped like a town center with an outlying junction.
//!
//! - South-west cell: a 3x3 street lattice (ids 1..=9).
//! - North-east cell: a crossroads around node 25 (ids 21..=25).
//! - A connector way from the lattice to the crossroads (via id 31).
//! - A road dangling west out of the district (id 41), so one lattice
//!   node gains an extra branch and the boundary-interpolation path is
//!   exercised.

use rg_core::{BoundingBox, GeoPoint, NodeId, RgResult};
use rg_graph::{CoordinateStore, DistrictGraph, DistrictGraphBuilder};

pub const DISTRICT_NAME: &str = "Synthville";

pub fn district_bbox() -> BoundingBox {
    BoundingBox::new(13.00, 13.02, 80.00, 80.02)
}

pub fn build_network() -> RgResult<(CoordinateStore, DistrictGraph)> {
    let mut store = CoordinateStore::new();

    // 3x3 lattice, 0.003 degree street spacing.
    for i in 0..3i64 {
        for j in 0..3i64 {
            store.insert(
                NodeId(3 * i + j + 1),
                GeoPoint::new(13.002 + 0.003 * i as f64, 80.002 + 0.003 * j as f64),
            );
        }
    }

    // Crossroads in the north-east cell.
    store.insert(NodeId(21), GeoPoint::new(13.015, 80.012));
    store.insert(NodeId(22), GeoPoint::new(13.015, 80.018));
    store.insert(NodeId(23), GeoPoint::new(13.012, 80.015));
    store.insert(NodeId(24), GeoPoint::new(13.018, 80.015));
    store.insert(NodeId(25), GeoPoint::new(13.015, 80.015));

    // Connector waypoint and the out-of-district stub.
    store.insert(NodeId(31), GeoPoint::new(13.011, 80.011));
    store.insert(NodeId(41), GeoPoint::new(13.005, 79.996));

    let mut builder = DistrictGraphBuilder::new(&store, district_bbox());

    // Lattice rows and columns.
    for i in 0..3i64 {
        let row: Vec<NodeId> = (0..3).map(|j| NodeId(3 * i + j + 1)).collect();
        builder.add_way(&row)?;
    }
    for j in 0..3i64 {
        let col: Vec<NodeId> = (0..3).map(|i| NodeId(3 * i + j + 1)).collect();
        builder.add_way(&col)?;
    }

    // Crossroads arms.
    builder.add_way(&[NodeId(21), NodeId(25), NodeId(22)])?;
    builder.add_way(&[NodeId(23), NodeId(25), NodeId(24)])?;

    // Lattice corner to crossroads.
    builder.add_way(&[NodeId(9), NodeId(31), NodeId(25)])?;

    // Road leaving the district to the west.
    builder.add_way(&[NodeId(4), NodeId(41)])?;

    // Build first so the builder's borrow of `store` ends before the store
    // is moved into the tuple.
    let graph = builder.build();
    Ok((store, graph))
}
