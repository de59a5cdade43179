//! Error type shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no device found")]
    NoDevice,

    /// A vendor SDK call returned a failure status.
    #[error("{call} failed with status {status}")]
    Sdk { call: &'static str, status: i32 },

    #[error("device disconnected")]
    Disconnected,

    /// A caller buffer does not match the frame geometry.
    #[error("buffer holds {actual} elements but the frame needs {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("cannot read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
