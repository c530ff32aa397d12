use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Result;
use log::debug;

use crate::{
    commands::match_output,
    error::BootstrapError,
    types::{Line, Replicate},
};

pub const VCF_EXTENSION: &str = "vcf";

pub fn replicate_filename(prefix: &str, index: usize) -> String {
    format!("{prefix}-{index}.{VCF_EXTENSION}")
}

fn write_replicate<W: Write>(
    wtr: &mut W,
    header: &[Line],
    data: &[Line],
    replicate: &Replicate,
) -> std::io::Result<()> {
    for line in header {
        wtr.write_all(line)?;
    }
    for line in replicate.lines(data) {
        wtr.write_all(line)?;
    }
    wtr.flush()
}

/// Writes one file per replicate into `dir` and returns the created paths
/// in replicate order. Existing files of the same name are overwritten.
pub fn write_replicates(
    dir: &Path,
    prefix: &str,
    header: &[Line],
    data: &[Line],
    replicates: &[Replicate],
) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(replicates.len());
    for replicate in replicates {
        let path = dir.join(replicate_filename(prefix, replicate.index()));
        let mut handle = match_output(&path)?;
        write_replicate(&mut handle, header, data, replicate)
            .map_err(|e| BootstrapError::file_access("write", &path, e))?;
        debug!(
            "Wrote replicate {} ({} records) to {}",
            replicate.index(),
            replicate.len(),
            path.display()
        );
        paths.push(path);
    }
    Ok(paths)
}
