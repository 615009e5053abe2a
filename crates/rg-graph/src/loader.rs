//! CSV loaders for the external node and way tables.
//!
//! Parsing the raw map exchange format is out of scope here; an upstream
//! extractor flattens it into two tables that these loaders consume:
//!
//! - **node table**: `node_id,lat,lon`, one row per node, coordinates in
//!   degrees with at least seven decimal digits;
//! - **way table**: `way_id,node_id`, pre-filtered to path-like ways, rows
//!   in way order so that consecutive rows sharing a `way_id` form that
//!   way's ordered node sequence.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rg_core::{GeoPoint, NodeId, WayId};

use crate::error::GraphResult;
use crate::store::CoordinateStore;

#[derive(Debug, Deserialize)]
struct NodeRecord {
    node_id: i64,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct WayRecord {
    way_id: i64,
    node_id: i64,
}

/// Load the node table into a [`CoordinateStore`].
pub fn load_nodes<R: Read>(reader: R) -> GraphResult<CoordinateStore> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut store = CoordinateStore::new();
    for record in rdr.deserialize() {
        let r: NodeRecord = record?;
        store.insert(NodeId(r.node_id), GeoPoint::new(r.lat, r.lon));
    }
    Ok(store)
}

pub fn load_nodes_from_path(path: &Path) -> GraphResult<CoordinateStore> {
    load_nodes(std::fs::File::open(path)?)
}

/// Load the way table, grouping consecutive rows by `way_id` into ordered
/// node sequences.
pub fn load_ways<R: Read>(reader: R) -> GraphResult<Vec<Vec<NodeId>>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut ways: Vec<Vec<NodeId>> = Vec::new();
    let mut current_way = WayId::INVALID;
    let mut current: Vec<NodeId> = Vec::new();

    for record in rdr.deserialize() {
        let r: WayRecord = record?;
        let way = WayId(r.way_id);
        if way != current_way {
            if !current.is_empty() {
                ways.push(std::mem::take(&mut current));
            }
            current_way = way;
        }
        // A way may legitimately revisit a node id (closed loops); keep the
        // sequence verbatim and let the graph builder deduplicate edges.
        current.push(NodeId(r.node_id));
    }
    if !current.is_empty() {
        ways.push(current);
    }
    Ok(ways)
}

pub fn load_ways_from_path(path: &Path) -> GraphResult<Vec<Vec<NodeId>>> {
    load_ways(std::fs::File::open(path)?)
}
