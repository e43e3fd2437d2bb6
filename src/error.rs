//! Error types for document mutation
//!
//! Almost everything in this crate fails soft: malformed per-field data is
//! dropped and the prior state survives. The only hard error is a caller
//! bug that cannot be resolved to any target at all.

use thiserror::Error;

/// Errors surfaced by [`Document`](crate::Document) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// A mutation was attempted with an empty path. An empty path has no
    /// target and indicates a bug in the calling router, not bad data.
    #[error("cannot resolve an empty path")]
    EmptyPath,
}
