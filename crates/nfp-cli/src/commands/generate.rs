//! LP generation command

use anyhow::{Context, Result};
use nfp_core::NodeCounts;
use nfp_model::build_document;
use nfp_model::demand::{DemandVolume, LinearDemand, TableDemand};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Demand table input format (JSON)
#[derive(Debug, Clone, Copy, Deserialize)]
struct DemandEntry {
    source: u32,
    destination: u32,
    volume: i64,
}

pub fn handle(
    sources: i64,
    transits: i64,
    destinations: i64,
    demands: Option<&Path>,
    out_dir: &Path,
    print: bool,
) -> Result<()> {
    // Counts are validated in input order; the first invalid value aborts
    // the run before any generation.
    let counts = NodeCounts::new(sources, transits, destinations)?;

    let demand: Box<dyn DemandVolume> = match demands {
        Some(path) => Box::new(load_demand_table(path, &counts)?),
        None => Box::new(LinearDemand::default()),
    };

    let document = build_document(&counts, demand.as_ref());
    let path = out_dir.join(document.file_name());
    fs::write(&path, document.render())
        .with_context(|| format!("writing LP file to {}", path.display()))?;

    if print {
        print!("{document}");
    }

    info!("LP document rendered ({} constraint rows)", document.row_count());

    println!("LP document written to {}", path.display());
    println!("  Sections:");
    for section in document.sections() {
        println!("    {:<26} {} row(s)", section.name(), section.rows().len());
    }
    println!("  Bounds: {} line(s)", document.bounds().len());
    println!("  Binary: {} line(s)", document.binaries().len());

    Ok(())
}

/// Load per-pair demand volumes from a JSON side input, warning about pairs
/// the table does not cover (those default to volume 0).
fn load_demand_table(path: &Path, counts: &NodeCounts) -> Result<TableDemand> {
    let file =
        File::open(path).with_context(|| format!("opening demand file: {}", path.display()))?;
    let reader = BufReader::new(file);
    let entries: Vec<DemandEntry> =
        serde_json::from_reader(reader).context("parsing demand JSON")?;

    println!("Loaded {} demand entries", entries.len());

    let table =
        TableDemand::from_pairs(entries.iter().map(|e| ((e.source, e.destination), e.volume)));

    for i in counts.source_ids() {
        for j in counts.destination_ids() {
            if !table.covers(i, j) {
                println!("  Warning: no demand volume for pair ({i}, {j}); defaulting to 0");
            }
        }
    }

    Ok(table)
}
