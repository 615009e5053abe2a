//! District bounding-box table.
//!
//! The upstream pipeline maintains one CSV mapping each district name to the
//! lat/lon extent of its satellite imagery:
//!
//! ```csv
//! District_Name,MinLat,MaxLat,MinLong,MaxLong
//! Chennai,12.8342,13.2614,80.1239,80.3461
//! ```
//!
//! The boxes here are raw; callers snap them to the grid resolution with
//! [`BoundingBox::snap_to_grid`] before enumerating cells.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use rg_core::{BoundingBox, RgError};

use crate::error::GraphResult;

#[derive(Debug, Deserialize)]
struct DistrictRecord {
    #[serde(rename = "District_Name")]
    name: String,
    #[serde(rename = "MinLat")]
    min_lat: f64,
    #[serde(rename = "MaxLat")]
    max_lat: f64,
    #[serde(rename = "MinLong")]
    min_lon: f64,
    #[serde(rename = "MaxLong")]
    max_lon: f64,
}

/// District name → bounding box, loaded once per run.
#[derive(Debug, Default, Clone)]
pub struct DistrictTable {
    districts: FxHashMap<String, BoundingBox>,
}

impl DistrictTable {
    pub fn from_path(path: &Path) -> GraphResult<Self> {
        Self::from_csv(csv::Reader::from_path(path)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> GraphResult<Self> {
        Self::from_csv(csv::Reader::from_reader(reader))
    }

    fn from_csv<R: Read>(mut rdr: csv::Reader<R>) -> GraphResult<Self> {
        let mut districts = FxHashMap::default();
        for record in rdr.deserialize() {
            let r: DistrictRecord = record?;
            districts.insert(
                r.name,
                BoundingBox::new(r.min_lat, r.max_lat, r.min_lon, r.max_lon),
            );
        }
        Ok(Self { districts })
    }

    /// Bounding box of `district`, or `DistrictNotFound`.
    pub fn bounding_box(&self, district: &str) -> GraphResult<BoundingBox> {
        self.districts
            .get(district)
            .copied()
            .ok_or_else(|| RgError::DistrictNotFound(district.to_owned()).into())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.districts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }
}
