//! `rg-core` — foundational types for the `roadgrid` indicator engine.
//!
//! This crate is a dependency of every other `rg-*` crate.  It intentionally
//! has no `rg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`ids`]   | `NodeId`, `WayId`, `CellId`                         |
//! | [`geo`]   | `GeoPoint`, haversine distance, `BoundingBox`       |
//! | [`rng`]   | `CellRng` (per-cell deterministic RNG)              |
//! | [`error`] | `RgError`, `RgResult`                               |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RgError, RgResult};
pub use geo::{BoundingBox, GeoPoint};
pub use ids::{CellId, NodeId, WayId};
pub use rng::CellRng;
