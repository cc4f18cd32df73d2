//! Error types for loading property-list documents.
//!
//! Traversal itself never fails: unknown node kinds become inline error
//! lines in the dump, not `Err` values. Only the load path returns errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating and deserializing a plist file.
#[derive(Error, Debug)]
pub enum DumpError {
    /// The resolved file does not exist.
    /// Carries the base name so callers can phrase the not-found message.
    #[error("no {name}.plist file found")]
    NotFound { name: String, path: PathBuf },

    /// The file exists but could not be read or parsed as a property list.
    #[error("plist error: {0}")]
    Plist(#[from] plist::Error),

    /// The document parsed, but its root object is not a string-keyed mapping.
    #[error("root object of {} is not a mapping", path.display())]
    RootNotMapping { path: PathBuf },
}

/// Convenience alias used throughout pldump-core.
pub type Result<T> = std::result::Result<T, DumpError>;
