//! `rg-graph` — coordinate store, district road graph, and table loaders.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`store`]    | `CoordinateStore` (node id → position)                    |
//! | [`graph`]    | `DistrictGraph`, `DistrictGraphBuilder`                   |
//! | [`district`] | `DistrictTable` (district name → bounding box)            |
//! | [`loader`]   | CSV loaders for the external node and way tables          |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                            |
//!
//! The coordinate store owns every node position for a district, including
//! nodes outside the district bounding box: those are still needed to
//! interpolate half edges that cross a cell boundary.  The graph's adjacency
//! only carries nodes with at least one in-box endpoint.

pub mod district;
pub mod error;
pub mod graph;
pub mod loader;
pub mod store;


pub use district::DistrictTable;
pub use error::{GraphError, GraphResult};
pub use graph::{DistrictGraph, DistrictGraphBuilder};
pub use loader::{load_nodes, load_nodes_from_path, load_ways, load_ways_from_path};
pub use store::CoordinateStore;
