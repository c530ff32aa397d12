use std::{
    io::{BufRead, BufReader, Read},
    path::Path,
};

use anyhow::Result;
use log::debug;

use crate::{
    commands::match_input,
    error::BootstrapError,
    types::{DataLines, Header},
};

const HEADER_PREFIX: u8 = b'#';

/// Reads a VCF file and splits it into header and data lines.
pub fn read_vcf(path: &Path) -> Result<(Header, DataLines)> {
    let handle = match_input(path)?;
    let (header, data) =
        split_lines(handle).map_err(|e| BootstrapError::file_access("read", path, e))?;
    debug!(
        "Read {} header lines and {} data lines from {}",
        header.len(),
        data.len(),
        path.display()
    );
    Ok((header, data))
}

/// Splits a stream into `#` prefixed header lines and everything else.
///
/// Lines keep their terminators. A final line without one gets `\n` so it
/// stays a separate record wherever it is resampled to.
pub fn split_lines<R: Read>(handle: R) -> std::io::Result<(Header, DataLines)> {
    let mut reader = BufReader::new(handle);
    let mut header = Header::new();
    let mut data = DataLines::new();
    loop {
        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() != Some(&b'\n') {
            line.push(b'\n');
        }
        if line.first() == Some(&HEADER_PREFIX) {
            header.push(line);
        } else {
            data.push(line);
        }
    }
    Ok((header, data))
}
