//! Debounced triggers.
//!
//! Each observed source event schedules its own single-shot deferred update.
//! Nothing is coalesced here: overlapping schedules are absorbed by the
//! controller's in-progress flag and its unchanged-source check.

use crate::controller::{AutoUpdater, UpdateResult};
use slugsync_types::AutoUpdateMode;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Events the host reports on the source field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceEvent {
    /// Keystroke-level edit.
    Input,
    /// Committed change.
    Change,
    Blur,
    Focus,
}

/// Which source events are attached to the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TriggerSet {
    /// Input and change events.
    pub change: bool,
    pub blur: bool,
    pub focus: bool,
}

impl TriggerSet {
    pub const NONE: Self = Self {
        change: false,
        blur: false,
        focus: false,
    };

    #[must_use]
    pub const fn from_mode(mode: AutoUpdateMode) -> Self {
        Self {
            change: mode.on_change(),
            blur: mode.on_blur(),
            focus: mode.on_focus(),
        }
    }

    #[must_use]
    pub const fn fires_on(self, event: SourceEvent) -> bool {
        match event {
            SourceEvent::Input | SourceEvent::Change => self.change,
            SourceEvent::Blur => self.blur,
            SourceEvent::Focus => self.focus,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        !(self.change || self.blur || self.focus)
    }
}

/// Runs `perform_update` once after `delay`. Skipped (yielding `None`) if
/// the controller was detached while the delay was pending.
pub fn schedule_update(
    updater: Arc<AutoUpdater>,
    delay: Duration,
) -> JoinHandle<Option<UpdateResult>> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if !updater.is_attached() {
            debug!(target_field = %updater.config().target_field, "deferred update skipped: detached");
            return None;
        }
        Some(updater.perform_update().await)
    })
}
