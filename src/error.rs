use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Unable to {stage} {}", .path.display())]
    FileAccess {
        stage: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot draw {replicates} replicate(s) from an input without data lines")]
    EmptyPopulation { replicates: usize },

    #[error("Invalid replicate prefix: {0:?} (must be a bare file name)")]
    InvalidPrefix(String),
}

impl BootstrapError {
    pub fn file_access(stage: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            stage,
            path: path.into(),
            source,
        }
    }
}
