//! Field synchronization controller for slugsync.
//!
//! Keeps a derived target field (a slug or a random identifier) in step
//! with a source field the user edits.
//!
//! # Architecture
//!
//! - **Encoder** (`slugsync-encoder`): pure text → slug
//! - **Extraction** (`slugsync-extract`): host field → source text, with
//!   date-like values reformatted
//! - **Controller** (this crate): decides when to recompute and writes back
//!
//! ## Update policy
//!
//! 1. Reject if an update is already running on this controller
//! 2. Keep a non-blank target when `preserve_existing` is set
//! 3. Skip when the source is unchanged since the last write
//! 4. Otherwise compute the new value, write it, notify the host
//!
//! # Example
//!
//! ```
//! use slugsync_extract::{MemoryElement, MemoryHost};
//! use slugsync_sync::{AutoUpdateConfig, AutoUpdater};
//! use slugsync_types::FieldName;
//! use std::sync::Arc;
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let host = Arc::new(MemoryHost::new());
//! host.insert(MemoryElement::input("title", "Hello World"));
//! host.insert(MemoryElement::input("slug", ""));
//!
//! let updater = AutoUpdater::new(AutoUpdateConfig::new("title", "slug"), host.clone());
//! let result = updater.update().await;
//!
//! assert!(result.success());
//! assert_eq!(host.value(&FieldName::from("slug")).as_deref(), Some("hello-world"));
//! # });
//! ```

mod controller;
mod error;
mod ident;
mod trigger;

pub use controller::{
    AutoUpdateConfig, AutoUpdater, UpdateResult, UpdateStatus, auto_update_field,
    create_auto_updater,
};
pub use error::UpdateError;
pub use ident::{IdGenerator, RandomUuid, generate_uuid_v4, uuid_from_rng};
pub use trigger::{SourceEvent, TriggerSet, schedule_update};
