//! Error types for makepub operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or packaging a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing metadata: {0}")]
    MissingMetadata(&'static str),

    #[error("Missing or invalid cover: {0}")]
    InvalidCover(String),

    #[error("Duplicate section filename: {0}")]
    DuplicateFilename(String),

    #[error("Failed to load asset {}: {source}", .path.display())]
    AssetLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid file set: {0}")]
    InvalidFileSet(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, Error>;
