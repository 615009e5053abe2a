//! Parquet output backend (feature `parquet`).
//!
//! Creates one file per district in the configured output directory,
//! named `<district>_road_indicators.parquet`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{Float64Builder, UInt32Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use rg_grid::IndicatorRow;

use crate::writer::IndicatorWriter;
use crate::OutputResult;

fn indicator_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("grid_number",       DataType::UInt32,  false),
        Field::new("grid_lat",          DataType::Float64, false),
        Field::new("grid_lon",          DataType::Float64, false),
        Field::new("three_ways",        DataType::UInt32,  false),
        Field::new("four_ways",         DataType::UInt32,  false),
        Field::new("road_length_m",     DataType::Float64, false),
        Field::new("walkability_ratio", DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes one indicator Parquet file per district.
///
/// Each file is written as a single record batch and closed (footer
/// included) before `write_district` returns, so the files are readable
/// even if `finish` is never called.
pub struct ParquetWriter {
    dir:    PathBuf,
    schema: Arc<Schema>,
}

impl ParquetWriter {
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf(), schema: indicator_schema() }
    }

    /// Path of the file a district's table lands in.
    pub fn district_path(&self, district: &str) -> PathBuf {
        self.dir.join(format!("{district}_road_indicators.parquet"))
    }
}

impl IndicatorWriter for ParquetWriter {
    fn write_district(&mut self, district: &str, rows: &[IndicatorRow]) -> OutputResult<()> {
        let file = File::create(self.district_path(district))?;
        let mut writer =
            ArrowWriter::try_new(file, Arc::clone(&self.schema), Some(snappy_props()))?;

        let mut grid_numbers = UInt32Builder::new();
        let mut grid_lats    = Float64Builder::new();
        let mut grid_lons    = Float64Builder::new();
        let mut three_ways   = UInt32Builder::new();
        let mut four_ways    = UInt32Builder::new();
        let mut lengths      = Float64Builder::new();
        let mut ratios       = Float64Builder::new();

        for row in rows {
            grid_numbers.append_value(row.cell.0);
            grid_lats.append_value(row.sw_corner.lat);
            grid_lons.append_value(row.sw_corner.lon);
            three_ways.append_value(row.three_ways);
            four_ways.append_value(row.four_ways);
            lengths.append_value(row.road_length_m);
            ratios.append_value(row.walkability_ratio);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.schema),
            vec![
                Arc::new(grid_numbers.finish()),
                Arc::new(grid_lats.finish()),
                Arc::new(grid_lons.finish()),
                Arc::new(three_ways.finish()),
                Arc::new(four_ways.finish()),
                Arc::new(lengths.finish()),
                Arc::new(ratios.finish()),
            ],
        )?;
        writer.write(&batch)?;
        writer.close()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
