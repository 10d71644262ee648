//! Error kinds for archdot operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on the kind to decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested feature or format is not supported
    Unsupported,

    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// No configuration source was supplied
    ConfigMissing,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,

    // =========================================================================
    // Serialization errors
    // =========================================================================
    /// Deserialization failed
    DeserializationFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}
