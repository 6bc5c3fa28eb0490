//! Core type definitions for slugsync.
//!
//! This crate defines the vocabulary shared by the encoder, the extraction
//! layer and the synchronization controller:
//! - Field names (opaque keys into host-managed state)
//! - Slug options (separator and case policy)
//! - Generation and auto-update modes
//! - The host-supplied widget configuration
//!
//! Nothing here performs I/O or holds state.

mod config;
mod field;
mod options;

pub use config::SlugConfig;
pub use field::FieldName;
pub use options::{AutoUpdateMode, GenerationMode, Separator, SlugOptions};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid separator: {0:?}")]
    InvalidSeparator(String),

    #[error("invalid auto update mode: {0:?}")]
    InvalidMode(String),
}
