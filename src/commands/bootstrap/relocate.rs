use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Result;
use log::{debug, warn};

use crate::error::BootstrapError;

fn crosses_devices(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::EXDEV)
}

/// Renames `src` to `dst`, falling back to copy and remove across devices.
fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::rename(src, dst) {
        Err(e) if crosses_devices(&e) => {
            warn!(
                "Cannot rename {} across devices, copying instead",
                src.display()
            );
            fs::copy(src, dst)?;
            fs::remove_file(src)
        }
        res => res,
    }
}

/// Moves each of `paths` into `outdir`, creating it first if needed.
///
/// Files of the same name already in `outdir` are replaced. The first failed
/// move aborts; files moved before it stay where they were moved to.
pub fn relocate(paths: &[PathBuf], outdir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(outdir)
        .map_err(|e| BootstrapError::file_access("create directory", outdir, e))?;

    let mut moved = Vec::with_capacity(paths.len());
    for src in paths {
        let name = src.file_name().ok_or_else(|| {
            BootstrapError::file_access(
                "move",
                src,
                io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })?;
        let dst = outdir.join(name);
        move_file(src, &dst).map_err(|e| BootstrapError::file_access("move", src, e))?;
        debug!("Moved {} to {}", src.display(), dst.display());
        moved.push(dst);
    }
    Ok(moved)
}
