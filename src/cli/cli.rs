use clap::{
    builder::{
        styling::{AnsiColor, Effects},
        Styles,
    },
    Parser,
};

use super::{BootstrapArgs, InputVcf, OutputReplicates};

// Configures Clap v3-style help menu colors
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Generate bootstrap replicates of a VCF file.
///
/// Data lines are resampled with replacement; header lines are copied
/// verbatim into every replicate.
#[derive(Parser, Debug)]
#[command(styles = STYLES)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(flatten)]
    pub input: InputVcf,

    #[clap(flatten)]
    pub bootstrap: BootstrapArgs,

    #[clap(flatten)]
    pub output: OutputReplicates,
}
