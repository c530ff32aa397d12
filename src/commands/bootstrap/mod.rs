mod reader;
mod relocate;
mod resample;
mod writer;

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::cli::Cli;

pub use reader::read_vcf;
pub use relocate::relocate;
pub use resample::resample;
pub use writer::write_replicates;

/// Replicates are staged in the working directory before being moved.
const STAGING_DIR: &str = ".";

pub fn run(args: &Cli) -> Result<()> {
    args.output.validate()?;
    let infile = Path::new(args.input.path());
    let nreps = args.bootstrap.nreps;

    let (header, data) = read_vcf(infile).context("Failed to read input VCF")?;

    let mut rng = StdRng::from_os_rng();
    let replicates = resample(&data, nreps, &mut rng)
        .with_context(|| format!("Failed to resample {}", infile.display()))?;

    let staged = write_replicates(
        Path::new(STAGING_DIR),
        &args.output.prefix,
        &header,
        &data,
        &replicates,
    )
    .context("Failed to write replicates")?;

    let moved = relocate(&staged, args.output.outdir()).context("Failed to relocate replicates")?;

    info!(
        "Wrote {} replicate(s) of {} records to {}",
        moved.len(),
        data.len(),
        args.output.outdir().display()
    );
    Ok(())
}
