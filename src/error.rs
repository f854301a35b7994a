use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ColligoError {
    #[error("Failed to resolve root path {path}: {source}")]
    RootResolution {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
    #[error("Failed to create output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Path {path} is not under root {root}")]
    RelativePath { path: PathBuf, root: PathBuf },
    #[error("Failed to resolve symbolic link {path}: {source}")]
    SymlinkResolution {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
    #[error("Failed to flush output: {0}")]
    Flush(#[source] std::io::Error),
}
impl ColligoError {
    pub(crate) fn root(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ColligoError::RootResolution {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn symlink(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ColligoError::SymlinkResolution {
            path: path.into(),
            source,
        }
    }
}

/// Failure while writing a single file block. Never fatal to a run.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("Failed writing block for {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to copy content of {path}: {source}")]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },
}
impl SerializeError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SerializeError::Write {
            path: path.into(),
            source,
        }
    }
}
