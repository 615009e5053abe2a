//! CSV output backend.
//!
//! Creates one file per district in the configured output directory,
//! named `<district>_road_indicators.csv`.

use std::path::{Path, PathBuf};

use csv::Writer;

use rg_grid::IndicatorRow;

use crate::writer::IndicatorWriter;
use crate::OutputResult;

/// Column order of every indicator file, CSV and Parquet alike.
pub(crate) const COLUMNS: [&str; 7] = [
    "grid_number",
    "grid_lat",
    "grid_lon",
    "three_ways",
    "four_ways",
    "road_length_m",
    "walkability_ratio",
];

/// Writes one indicator CSV file per district.
pub struct CsvWriter {
    dir: PathBuf,
}

impl CsvWriter {
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf() }
    }

    /// Path of the file a district's table lands in.
    pub fn district_path(&self, district: &str) -> PathBuf {
        self.dir.join(format!("{district}_road_indicators.csv"))
    }
}

impl IndicatorWriter for CsvWriter {
    fn write_district(&mut self, district: &str, rows: &[IndicatorRow]) -> OutputResult<()> {
        let mut w = Writer::from_path(self.district_path(district))?;
        w.write_record(COLUMNS)?;
        for row in rows {
            w.write_record(&[
                row.cell.0.to_string(),
                format!("{:.4}", row.sw_corner.lat),
                format!("{:.4}", row.sw_corner.lon),
                row.three_ways.to_string(),
                row.four_ways.to_string(),
                format!("{:.4}", row.road_length_m),
                format!("{:.4}", row.walkability_ratio),
            ])?;
        }
        w.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        // Each district file is flushed and closed as it is written.
        Ok(())
    }
}
