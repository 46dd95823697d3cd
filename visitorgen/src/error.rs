//! Error type shared by the generator pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use visitorgen_config::LoadError;

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Failures that abort a generator run.
///
/// An empty node list is not represented here: it is a successful, skipped run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The node list is missing or is not valid UTF-8
    #[error("cannot read node list {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write header {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] LoadError),
}
