//! from_csv — compute a district's indicator table from CSV inputs.
//!
//! Usage:
//!   from_csv <nodes.csv> <ways.csv> <districts.csv> <district> <out-dir> [seed]
//!
//! Input formats:
//!   nodes.csv     node_id,lat,lon
//!   ways.csv      way_id,node_id          (one row per node, ways grouped)
//!   districts.csv District_Name,MinLat,MaxLat,MinLong,MaxLong

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};

use rg_graph::{load_nodes_from_path, load_ways_from_path, DistrictGraphBuilder, DistrictTable};
use rg_grid::{district_indicators, IndicatorConfig};
use rg_output::{CsvWriter, IndicatorWriter};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 6 || args.len() > 7 {
        bail!(
            "usage: {} <nodes.csv> <ways.csv> <districts.csv> <district> <out-dir> [seed]",
            args[0]
        );
    }
    let (nodes_path, ways_path, districts_path, district, out_dir) =
        (&args[1], &args[2], &args[3], &args[4], &args[5]);
    let seed: u64 = match args.get(6) {
        Some(s) => s.parse().context("seed must be an unsigned integer")?,
        None => 0,
    };

    // 1. Load the input tables.
    let t0 = Instant::now();
    let store = load_nodes_from_path(Path::new(nodes_path))
        .with_context(|| format!("loading {nodes_path}"))?;
    let ways = load_ways_from_path(Path::new(ways_path))
        .with_context(|| format!("loading {ways_path}"))?;
    let districts = DistrictTable::from_path(Path::new(districts_path))
        .with_context(|| format!("loading {districts_path}"))?;
    let bbox = districts.bounding_box(district)?;
    println!(
        "Loaded {} nodes, {} ways, {} districts in {:.3} s",
        store.len(),
        ways.len(),
        districts.len(),
        t0.elapsed().as_secs_f64()
    );

    // 2. Build the district graph.
    let mut builder = DistrictGraphBuilder::new(&store, bbox);
    builder.add_ways(&ways)?;
    let graph = builder.build();
    println!("District graph: {} nodes inside {district}", graph.node_count());

    // 3. Compute the indicators.
    let cfg = IndicatorConfig::with_seed(seed);
    let t1 = Instant::now();
    let rows = district_indicators(&store, &graph, bbox, &cfg)?;
    println!("Computed {} cells in {:.3} s", rows.len(), t1.elapsed().as_secs_f64());

    // 4. Write the table.
    std::fs::create_dir_all(out_dir)?;
    let mut writer = CsvWriter::new(Path::new(out_dir));
    writer.write_district(district, &rows)?;
    writer.finish()?;
    println!("Wrote {}", writer.district_path(district).display());

    Ok(())
}
