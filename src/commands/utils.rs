use std::{
    fs::File,
    io::{BufReader, BufWriter, Read},
    path::Path,
};

use anyhow::Result;

use crate::error::BootstrapError;

/// Extensions that are routed through the decompressing reader.
const COMPRESSED_EXTENSIONS: &[&str] = &["gz", "bgz", "bz2", "xz", "zst"];

fn is_compressed(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| COMPRESSED_EXTENSIONS.contains(&ext))
}

/// Opens an input file for buffered reading, decompressing it when the
/// extension names a compression format.
pub fn match_input(path: &Path) -> Result<Box<dyn Read>> {
    let handle = File::open(path).map_err(|e| BootstrapError::file_access("read", path, e))?;
    let buffer: Box<dyn Read> = Box::new(BufReader::new(handle));
    if is_compressed(path) {
        let (reader, _comp) = niffler::get_reader(buffer)?;
        Ok(reader)
    } else {
        Ok(buffer)
    }
}

/// Creates (or truncates) an output file for buffered writing.
pub fn match_output(path: &Path) -> Result<BufWriter<File>> {
    let handle = File::create(path).map_err(|e| BootstrapError::file_access("write", path, e))?;
    Ok(BufWriter::new(handle))
}
