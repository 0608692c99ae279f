//! Error types for fontcopy-core (made by FontLab https://www.fontlab.com/)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a copy run stopped.
#[derive(Debug, Error)]
pub enum CopierError {
    #[error("source directory {} does not exist or is not a directory", .0.display())]
    SourceMissing(PathBuf),
    #[error("destination directory {} does not exist or is not a directory", .0.display())]
    DestinationMissing(PathBuf),
    #[error("failed to list {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CopierError {
    /// True for the two directory checks that run before anything is touched.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CopierError::SourceMissing(_) | CopierError::DestinationMissing(_)
        )
    }
}

pub type Result<T, E = CopierError> = std::result::Result<T, E>;
