use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManagerError {
    /// Profile, executable, save directory or artifact absent.
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Disk read/write failure.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive creation or extraction failure.
    #[error("Archive error on {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// External process spawn or status-query failure.
    #[error("Process error: {message} {location}")]
    Process {
        message: String,
        location: ErrorLocation,
    },
}

impl ManagerError {
    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ManagerError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn process<S: Into<String>>(message: S) -> Self {
        ManagerError::Process {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManagerError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn archive(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        ManagerError::Archive {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ManagerError>;
