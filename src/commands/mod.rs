pub mod bootstrap;
mod utils;

pub use utils::{match_input, match_output};
