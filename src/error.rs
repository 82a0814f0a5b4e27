//! Error types
//!
//! Restore and write have asymmetric failure handling: anything wrong with
//! already-stored data is logged and downgraded to "no stored value", while
//! write-path failures carry a real error back to whoever triggered the
//! change.

use thiserror::Error;

use crate::storage::StorageError;

/// Failure to parse a relative-duration spec (e.g. `"30m"`).
///
/// A malformed spec is a configuration error the caller must fix, so this is
/// never swallowed internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse relative time spec {spec:?}")]
pub struct ParseTimeError {
    /// The spec that failed to parse.
    pub spec: String,
}

/// Errors surfaced from the write path.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The configured expiry spec is malformed.
    #[error(transparent)]
    Parse(#[from] ParseTimeError),
    /// The new value could not be serialized to JSON.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The backing store rejected the write (e.g. quota exceeded).
    #[error(transparent)]
    Storage(#[from] StorageError),
}
