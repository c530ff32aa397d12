use clap::Parser;

#[derive(Parser, Debug)]
#[clap(next_help_heading = "BOOTSTRAP OPTIONS")]
pub struct BootstrapArgs {
    /// Number of bootstrap replicates (typically 100)
    #[clap(short = 'n', long = "Nreps", visible_alias = "nreps", value_name = "INT")]
    pub nreps: usize,
}
