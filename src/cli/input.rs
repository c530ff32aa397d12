use clap::Parser;

#[derive(Parser, Debug)]
pub struct InputVcf {
    /// Path to the VCF file (optionally gzip, bzip2 or zstd compressed)
    #[clap(short = 'i', long = "infile", value_name = "PATH")]
    pub infile: String,
}
impl InputVcf {
    pub fn path(&self) -> &str {
        &self.infile
    }
}
