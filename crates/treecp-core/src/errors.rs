//! Error taxonomy for tree copies.
//!
//! Every failure is tagged with the pass it happened in:
//! - Scan: the size pre-scan failed; nothing has been written yet
//! - Copy: the copy pass failed; the destination may be partially populated
//!
//! There is no retry or recovery. The first error aborts the whole run.

use std::io;
use std::path::{Path, PathBuf};

/// Pass in which an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    /// Size pre-scan. The destination is untouched.
    Scan,
    /// Recursive copy. The destination is left partially copied.
    Copy,
}

impl std::fmt::Display for ErrorPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPhase::Scan => f.write_str("scan"),
            ErrorPhase::Copy => f.write_str("copy"),
        }
    }
}

/// A failed tree copy.
#[derive(Debug)]
pub enum TreeCopyError {
    /// The source root exists but is not a directory.
    NotADirectory { path: PathBuf },
    /// A destination directory could not be created because the path is taken.
    DestinationExists { path: PathBuf },
    /// Any other filesystem failure.
    Io {
        phase: ErrorPhase,
        /// Short name of the failing operation (`read_dir`, `copy`, ...).
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

impl TreeCopyError {
    /// I/O failure during the size pre-scan.
    pub fn scan_io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            phase: ErrorPhase::Scan,
            op,
            path: path.into(),
            source,
        }
    }

    /// I/O failure during the copy pass.
    pub fn copy_io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            phase: ErrorPhase::Copy,
            op,
            path: path.into(),
            source,
        }
    }

    /// Map a directory-creation failure, singling out path collisions.
    pub(crate) fn create_dir(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::AlreadyExists {
            Self::DestinationExists {
                path: path.to_path_buf(),
            }
        } else {
            Self::copy_io("create_dir", path, source)
        }
    }

    /// Pass the error was raised in.
    pub fn phase(&self) -> ErrorPhase {
        match self {
            TreeCopyError::NotADirectory { .. } => ErrorPhase::Scan,
            TreeCopyError::DestinationExists { .. } => ErrorPhase::Copy,
            TreeCopyError::Io { phase, .. } => *phase,
        }
    }

    /// Path the failure is attributed to.
    pub fn path(&self) -> &Path {
        match self {
            TreeCopyError::NotADirectory { path }
            | TreeCopyError::DestinationExists { path }
            | TreeCopyError::Io { path, .. } => path,
        }
    }
}

impl std::fmt::Display for TreeCopyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeCopyError::NotADirectory { path } => {
                write!(f, "not a directory: {}", path.display())
            }
            TreeCopyError::DestinationExists { path } => {
                write!(f, "destination already exists: {}", path.display())
            }
            TreeCopyError::Io {
                phase,
                op,
                path,
                source,
            } => write!(f, "{phase}: {op} {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for TreeCopyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeCopyError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for scan and copy operations.
pub type TreeCopyResult<T> = std::result::Result<T, TreeCopyError>;
