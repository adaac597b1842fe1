//! Error types for bundling operations.

use std::path::PathBuf;

/// Errors that can occur while producing a platform bundle.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// I/O error reading or writing tree entries.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised while walking the source tree.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// An `<EXCLUSIVE>` directive was opened but never closed.
    #[error("unclosed EXCLUSIVE directive in {} (opened at line {line})", path.display())]
    UnclosedDirective {
        /// File containing the dangling directive.
        path: PathBuf,
        /// 1-based line of the opening delimiter.
        line: usize,
    },

    /// The configured source directory does not exist.
    #[error("source directory not found: {}", path.display())]
    SourceDirMissing {
        /// The missing directory.
        path: PathBuf,
    },

    /// The descriptor module holds no `PLATFORM` block to stamp.
    #[error("no PLATFORM block found in {}", path.display())]
    DescriptorNotFound {
        /// The file that was searched.
        path: PathBuf,
    },
}

/// Result type for bundling operations.
pub type Result<T> = std::result::Result<T, BundleError>;
