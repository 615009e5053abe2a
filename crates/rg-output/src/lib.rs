//! `rg-output` — indicator table writers.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                            |
//! |-----------|---------|------------------------------------------|
//! | *(none)*  | CSV     | `<district>_road_indicators.csv`         |
//! | `parquet` | Parquet | `<district>_road_indicators.parquet`     |
//!
//! Both implement [`IndicatorWriter`] and take the rows produced by
//! `rg_grid::district_indicators`, one file per district.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rg_output::{CsvWriter, IndicatorWriter};
//!
//! let mut w = CsvWriter::new(Path::new("./output"));
//! w.write_district("Thiruvallur", &rows)?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod writer;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use writer::IndicatorWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
