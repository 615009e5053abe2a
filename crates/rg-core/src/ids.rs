//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Node and way identifiers come from
//! the external map source and are opaque: they are hash-map keys, never
//! dense vector indices, so no `index()` helpers are provided.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Stable identifier of a road-network node, as assigned by the external
    /// map source.
    pub struct NodeId(i64);
}

typed_id! {
    /// Identifier of a path-like way in the external map source.  Used only
    /// to group the way table's rows back into ordered node sequences.
    pub struct WayId(i64);
}

typed_id! {
    /// Grid number of a cell: cells are enumerated by increasing longitude
    /// band, and by increasing latitude within each band, starting at 0.
    pub struct CellId(u32);
}
