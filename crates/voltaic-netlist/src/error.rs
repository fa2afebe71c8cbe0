//! Error types for voltaic-netlist.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open '{path}': {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Circuit(#[from] voltaic_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
