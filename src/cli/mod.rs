mod bootstrap;
mod cli;
mod input;
mod output;

pub use bootstrap::BootstrapArgs;
pub use cli::Cli;
pub use input::InputVcf;
pub use output::OutputReplicates;
