#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::Result;
use bon::builder;
use niffler::Level;
use rand::Rng;
use tempfile::TempDir;

pub const COMMAND_PATH: &str = env!("CARGO_BIN_EXE_vcfboot");
pub const DEFAULT_NUM_RECORDS: usize = 50;
pub const HEADER: &str = "##fileformat=VCFv4.2\n\
##contig=<ID=chr1,length=248956422>\n\
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2\n";

#[derive(Default, Clone, Copy, Debug)]
pub enum CompressionStatus {
    #[default]
    Uncompressed,
    Gzip,
    Zstd,
}
impl CompressionStatus {
    pub fn enum_iter() -> impl Iterator<Item = Self> + Clone {
        let vals = [Self::Uncompressed, Self::Gzip, Self::Zstd];
        vals.into_iter()
    }

    pub fn suffix(&self) -> &str {
        match self {
            Self::Uncompressed => "",
            Self::Gzip => ".gz",
            Self::Zstd => ".zst",
        }
    }

    fn format(self) -> niffler::Format {
        match self {
            Self::Uncompressed => niffler::Format::No,
            Self::Gzip => niffler::Format::Gzip,
            Self::Zstd => niffler::Format::Zstd,
        }
    }
}

/// A scratch layout: `<root>/work` is the working directory, so the default
/// `../replicates` destination resolves to `<root>/replicates`.
pub struct Workspace {
    root: TempDir,
}
impl Workspace {
    pub fn new() -> Result<Self> {
        let root = tempfile::tempdir()?;
        fs::create_dir(root.path().join("work"))?;
        Ok(Self { root })
    }

    pub fn workdir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    pub fn default_outdir(&self) -> PathBuf {
        self.root.path().join("replicates")
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

pub fn random_record<R: Rng>(rng: &mut R, idx: usize) -> String {
    let bases = ['A', 'C', 'G', 'T'];
    let r = bases[rng.random_range(0..4)];
    let a = bases[rng.random_range(0..4)];
    format!(
        "chr1\t{}\trs{idx}\t{r}\t{a}\t{}\tPASS\t.\tGT\t0|1\t1|1\n",
        1000 + idx * 17,
        rng.random_range(10..60)
    )
}

/// Writes a VCF with a fixed header and `nrec` unique records into `dir`.
#[builder]
pub fn write_vcf(
    dir: &Path,
    #[builder(default)] comp: CompressionStatus,
    #[builder(default = DEFAULT_NUM_RECORDS)] nrec: usize,
    #[builder(default = "input")] name: &str,
) -> Result<(PathBuf, Vec<String>)> {
    let path = dir.join(format!("{name}.vcf{}", comp.suffix()));
    let mut handle = niffler::to_path(&path, comp.format(), Level::Three)?;
    let mut rng = rand::rng();
    let records: Vec<String> = (0..nrec).map(|idx| random_record(&mut rng, idx)).collect();
    handle.write_all(HEADER.as_bytes())?;
    for record in &records {
        handle.write_all(record.as_bytes())?;
    }
    handle.flush()?;
    Ok((path, records))
}

pub fn run_vcfboot(workdir: &Path, args: &[&str]) -> Result<Output> {
    eprintln!("Args: {args:#?}");
    let output = Command::new(COMMAND_PATH)
        .current_dir(workdir)
        .args(args)
        .output()?;
    Ok(output)
}

pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| Ok(entry?.file_name().to_string_lossy().into_owned()))
        .collect::<Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}

/// Splits a replicate into its header and data sections.
pub fn split_replicate(path: &Path) -> Result<(String, Vec<String>)> {
    let contents = fs::read_to_string(path)?;
    let mut header = String::new();
    let mut data = Vec::new();
    for line in contents.split_inclusive('\n') {
        if line.starts_with('#') {
            header.push_str(line);
        } else {
            data.push(line.to_string());
        }
    }
    Ok((header, data))
}
