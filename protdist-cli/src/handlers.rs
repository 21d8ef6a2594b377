use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use protdist_core::models::{AbundanceStore, RecordStore};
use protdist_dist::{AbundanceDistributions, DistConfig};
use protdist_io::{ReportPaths, ReportWrite};

use crate::cli::{ABUNDANCES_ARG, PROTEIN_DATA_ARG};

pub fn run_protdist(matches: &ArgMatches) -> Result<()> {
    let protein_data_path = matches
        .get_one::<String>(PROTEIN_DATA_ARG)
        .context("protein data file is required")?;
    let abundances_path = matches
        .get_one::<String>(ABUNDANCES_ARG)
        .context("abundance file is required")?;

    let config = DistConfig::default();

    let records = RecordStore::try_from(protein_data_path.as_str())
        .context("Failed to load protein data")?;
    let abundances = AbundanceStore::from_path(abundances_path, config.transform)
        .context("Failed to load abundances")?;

    log::info!(
        "Loaded {} protein records and {} abundance entries (total abundance {:.6e})",
        records.len(),
        abundances.len(),
        abundances.total()
    );

    let report = abundances
        .distributions(&records, &config)
        .context("Failed to compute distributions")?;

    // all three reports are rendered before the first file is created
    let paths = ReportPaths::from_abundance_path(Path::new(abundances_path));
    report
        .write_reports(&config, &paths)
        .context("Failed to write reports")?;

    log::info!("Binned {} proteins", report.processed);

    Ok(())
}
