#![allow(clippy::module_inception)]

mod cli;
mod commands;
mod error;
mod types;

use cli::Cli;

use anyhow::Result;
use clap::Parser;
use log::trace;

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {
    // no-op
}

fn main() -> Result<()> {
    reset_sigpipe();

    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_env("VCFBOOT_LOG")
        .init();

    let args = Cli::parse();

    trace!("init");
    commands::bootstrap::run(&args)?;
    trace!("done");
    Ok(())
}
