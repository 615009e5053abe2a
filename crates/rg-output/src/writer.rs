//! The `IndicatorWriter` trait implemented by all backend writers.

use rg_grid::IndicatorRow;

use crate::OutputResult;

/// Trait implemented by the CSV and Parquet writers.
///
/// One call per district: `rows` is the complete indicator table for that
/// district, already in grid-number order.
pub trait IndicatorWriter {
    /// Write the full indicator table of one district.
    fn write_district(&mut self, district: &str, rows: &[IndicatorRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
