//! `rg-grid` — the per-cell road-network indicator engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`cell`]        | `CellBounds`, grid enumeration                         |
//! | [`config`]      | `IndicatorConfig` (cell size, sample counts, seed)     |
//! | [`partition`]   | `CellEdges`, full/half edge partitioning               |
//! | [`length`]      | road length with boundary interpolation                |
//! | [`intersect`]   | 3-way / 4-way intersection tallies                     |
//! | [`router`]      | `Router` trait, `DijkstraRouter`                       |
//! | [`walkability`] | Monte Carlo walkability estimator                      |
//! | [`assemble`]    | `IndicatorRow`, per-district driver                    |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Per-cell loop runs on Rayon.  Same output either way.     |

pub mod assemble;
pub mod cell;
pub mod config;
pub mod intersect;
pub mod length;
pub mod partition;
pub mod router;
pub mod walkability;


pub use assemble::{district_indicators, IndicatorRow};
pub use cell::{cell_count, enumerate_cells, CellBounds, CELL_SIZE_DEG};
pub use config::IndicatorConfig;
pub use intersect::count_intersections;
pub use length::road_length_m;
pub use partition::{partition, CellEdges};
pub use router::{DijkstraRouter, Router};
pub use walkability::walkability_ratio;

/// Round to 4 decimal places, the precision of every reported indicator.
pub(crate) fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
