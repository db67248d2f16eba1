//! Crate-level error type and `Result` alias.
//! Fatal variants (`CreateDestination`, `Walk`) end a run; the per-file
//! variants (`Open`, `Decode`, `Create`, `Write`, `Encode`) are reported and skipped by the
//! directory driver.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot create destination directory {path:?}: {source}")]
    CreateDestination {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error walking source directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot decode PNG {path:?}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Cannot create file {path:?}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write file {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot encode PNG {path:?}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl Error {
    /// True for errors that abort the whole run rather than one file.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::CreateDestination { .. } | Error::Walk(_))
    }
}
