use std::path::Path;

use anyhow::Result;
use clap::Parser;

use crate::error::BootstrapError;

#[derive(Parser, Debug)]
#[clap(next_help_heading = "OUTPUT OPTIONS")]
pub struct OutputReplicates {
    /// Directory the replicates are moved into
    #[clap(short = 'o', long, default_value = "../replicates", value_name = "DIR")]
    pub outdir: String,

    /// File name prefix of each replicate (`<prefix>-<index>.vcf`)
    #[clap(short = 'p', long, default_value = "replicate")]
    pub prefix: String,
}
impl OutputReplicates {
    pub fn validate(&self) -> Result<()> {
        let bare = Path::new(&self.prefix)
            .file_name()
            .is_some_and(|name| name == self.prefix.as_str());
        if self.prefix.is_empty() || !bare {
            return Err(BootstrapError::InvalidPrefix(self.prefix.clone()).into());
        }
        Ok(())
    }

    pub fn outdir(&self) -> &Path {
        Path::new(&self.outdir)
    }
}
