//! Synchronization controller.
//!
//! One `AutoUpdater` per source→target pairing. It decides on every trigger
//! whether the target needs a new value, computes it, and writes it back
//! through the host at most once per effective source change.
//!
//! States are `Idle` and `Updating`; the transition is held by a scoped
//! guard so every exit path, including unwinding, returns to `Idle`. A
//! second `perform_update` while `Updating` is rejected, not queued.

use crate::error::UpdateError;
use crate::ident::{IdGenerator, RandomUuid};
use crate::trigger::{SourceEvent, TriggerSet, schedule_update};
use slugsync_encoder::encode;
use slugsync_extract::{Clock, FieldHost, SystemClock, get_processed_field_value};
use slugsync_types::{FieldName, GenerationMode, Separator, SlugConfig, SlugOptions};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Configuration for one source→target pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoUpdateConfig {
    pub source_field: FieldName,
    pub target_field: FieldName,
    pub separator: Separator,
    pub lowercase: bool,
    /// Attach triggers on `initialize`.
    pub auto_update: bool,
    /// Never overwrite a non-blank target.
    pub preserve_existing: bool,
    pub update_on_change: bool,
    pub update_on_blur: bool,
    pub update_on_focus: bool,
    pub generation_mode: GenerationMode,
    /// Debounce delay between a source event and the update.
    pub update_delay: Duration,
}

impl AutoUpdateConfig {
    /// Pairing with the controller defaults: hyphen, lowercase, update on
    /// change only, slug mode, 100 ms delay.
    pub fn new(source_field: impl Into<FieldName>, target_field: impl Into<FieldName>) -> Self {
        Self {
            source_field: source_field.into(),
            target_field: target_field.into(),
            separator: Separator::Hyphen,
            lowercase: true,
            auto_update: true,
            preserve_existing: false,
            update_on_change: true,
            update_on_blur: false,
            update_on_focus: false,
            generation_mode: GenerationMode::Slug,
            update_delay: Duration::from_millis(100),
        }
    }

    /// Pairing configured from the widget options.
    pub fn from_slug_config(
        source_field: impl Into<FieldName>,
        target_field: impl Into<FieldName>,
        config: &SlugConfig,
    ) -> Self {
        let triggers = TriggerSet::from_mode(config.auto_update_mode);
        Self {
            separator: config.separator,
            lowercase: config.lowercase,
            auto_update: config.auto_update_enabled(),
            preserve_existing: config.preserve_existing,
            update_on_change: triggers.change,
            update_on_blur: triggers.blur,
            update_on_focus: triggers.focus,
            update_delay: config.update_delay(),
            ..Self::new(source_field, target_field)
        }
    }

    #[must_use]
    pub fn with_generation_mode(mut self, mode: GenerationMode) -> Self {
        self.generation_mode = mode;
        self
    }

    #[must_use]
    pub fn slug_options(&self) -> SlugOptions {
        SlugOptions::new(self.separator, self.lowercase)
    }

    #[must_use]
    pub fn triggers(&self) -> TriggerSet {
        TriggerSet {
            change: self.update_on_change,
            blur: self.update_on_blur,
            focus: self.update_on_focus,
        }
    }
}

/// How an update concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// A new value was written and the host notified.
    Written,
    /// The target already had a value and preservation is on.
    PreservedExisting,
    /// The source has not changed since the last write.
    SourceUnchanged,
    Failed(UpdateError),
}

/// Outcome of one `perform_update` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub source_value: Option<String>,
    pub status: UpdateStatus,
}

impl UpdateResult {
    fn failed(source_value: Option<String>, error: UpdateError) -> Self {
        Self {
            old_value: None,
            new_value: None,
            source_value,
            status: UpdateStatus::Failed(error),
        }
    }

    fn kept(old_value: Option<String>, source_value: Option<String>, status: UpdateStatus) -> Self {
        Self {
            new_value: old_value.clone(),
            old_value,
            source_value,
            status,
        }
    }

    pub fn success(&self) -> bool {
        !matches!(self.status, UpdateStatus::Failed(_))
    }

    /// Whether this update wrote to the target.
    pub fn wrote(&self) -> bool {
        self.status == UpdateStatus::Written
    }

    pub fn error(&self) -> Option<&UpdateError> {
        match &self.status {
            UpdateStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Failure text, or the informational marker of a short-circuit.
    pub fn message(&self) -> Option<String> {
        match &self.status {
            UpdateStatus::Written => None,
            UpdateStatus::PreservedExisting => Some("preserving existing value".to_string()),
            UpdateStatus::SourceUnchanged => Some("source value unchanged".to_string()),
            UpdateStatus::Failed(err) => Some(err.to_string()),
        }
    }
}

/// Source value recorded at the last write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum SourceMemo {
    /// Nothing written yet.
    #[default]
    Unset,
    Source(String),
    /// The source was absent and `""` was written.
    Cleared,
    /// The target holds a generated identifier; no source text matches.
    Generated,
}

impl SourceMemo {
    fn matches(&self, source: Option<&str>) -> bool {
        match (self, source) {
            (Self::Unset | Self::Cleared, None) => true,
            (Self::Source(last), Some(current)) => last == current,
            _ => false,
        }
    }
}

/// Holds the `Updating` state; dropping it returns to `Idle`.
struct UpdateGuard<'a>(&'a AtomicBool);

impl<'a> UpdateGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for UpdateGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Keeps one target field in sync with one source field.
pub struct AutoUpdater {
    config: AutoUpdateConfig,
    host: Arc<dyn FieldHost>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    updating: AtomicBool,
    last_source: Mutex<SourceMemo>,
    attached: Mutex<TriggerSet>,
}

impl AutoUpdater {
    pub fn new(config: AutoUpdateConfig, host: Arc<dyn FieldHost>) -> Self {
        Self {
            config,
            host,
            clock: Arc::new(SystemClock),
            ids: Arc::new(RandomUuid),
            updating: AtomicBool::new(false),
            last_source: Mutex::new(SourceMemo::Unset),
            attached: Mutex::new(TriggerSet::NONE),
        }
    }

    /// Replaces the clock used for date-like source values.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the identifier source used in UUID mode.
    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn config(&self) -> &AutoUpdateConfig {
        &self.config
    }

    pub fn is_updating(&self) -> bool {
        self.updating.load(Ordering::Acquire)
    }

    /// Triggers currently attached.
    pub fn attached(&self) -> TriggerSet {
        *self.attached.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_attached(&self) -> bool {
        !self.attached().is_empty()
    }

    /// Attaches the configured triggers and runs one initial update.
    ///
    /// Stays detached and returns `None` when auto-update is off or the
    /// source field cannot be resolved.
    pub async fn initialize(&self) -> Option<UpdateResult> {
        if !self.config.auto_update {
            debug!(source_field = %self.config.source_field, "auto update disabled");
            return None;
        }
        if self.host.resolve_field(&self.config.source_field).await.is_none() {
            warn!(source_field = %self.config.source_field, "source field not found; not attaching");
            return None;
        }

        let triggers = self.config.triggers();
        *self.attached.lock().unwrap_or_else(PoisonError::into_inner) = triggers;
        info!(
            source_field = %self.config.source_field,
            target_field = %self.config.target_field,
            ?triggers,
            "auto updater attached"
        );
        Some(self.perform_update().await)
    }

    /// Schedules a deferred update if `event` is attached.
    pub fn handle_event(
        self: &Arc<Self>,
        event: SourceEvent,
    ) -> Option<JoinHandle<Option<UpdateResult>>> {
        if !self.attached().fires_on(event) {
            return None;
        }
        Some(schedule_update(Arc::clone(self), self.config.update_delay))
    }

    /// Manual, immediate update.
    pub async fn update(&self) -> UpdateResult {
        self.perform_update().await
    }

    /// Detaches all triggers and forgets the last source value. Deferred
    /// updates still pending are skipped when they fire.
    pub fn destroy(&self) {
        *self.attached.lock().unwrap_or_else(PoisonError::into_inner) = TriggerSet::NONE;
        *self.last_source.lock().unwrap_or_else(PoisonError::into_inner) = SourceMemo::Unset;
        debug!(target_field = %self.config.target_field, "auto updater destroyed");
    }

    /// Recomputes the target from the source, writing at most once.
    pub async fn perform_update(&self) -> UpdateResult {
        let Some(_guard) = UpdateGuard::acquire(&self.updating) else {
            debug!(target_field = %self.config.target_field, "update rejected: already in progress");
            return UpdateResult::failed(None, UpdateError::ConcurrentUpdateRejected);
        };

        let result = match self.try_update().await {
            Ok(result) => result,
            Err(err) => UpdateResult::failed(None, err),
        };

        match &result.status {
            UpdateStatus::Failed(err) => {
                warn!(target_field = %self.config.target_field, error = %err, "update failed");
            }
            status => {
                debug!(
                    target_field = %self.config.target_field,
                    ?status,
                    new_value = result.new_value.as_deref().unwrap_or_default(),
                    "update finished"
                );
            }
        }
        result
    }

    async fn try_update(&self) -> Result<UpdateResult, UpdateError> {
        let source_value = get_processed_field_value(
            self.host.as_ref(),
            &self.config.source_field,
            self.clock.as_ref(),
        )
        .await?;

        let Some(target) = self.host.resolve_field(&self.config.target_field).await else {
            return Ok(UpdateResult::failed(
                source_value,
                UpdateError::FieldNotFound {
                    field: self.config.target_field.clone(),
                },
            ));
        };
        let old_value = self.host.read_value(&target).await?;

        if self.config.preserve_existing
            && old_value.as_deref().is_some_and(|v| !v.trim().is_empty())
        {
            return Ok(UpdateResult::kept(
                old_value,
                source_value,
                UpdateStatus::PreservedExisting,
            ));
        }

        let has_old_value = old_value.as_deref().is_some_and(|v| !v.is_empty());
        let (unchanged, cleared) = {
            let memo = self.last_source.lock().unwrap_or_else(PoisonError::into_inner);
            (memo.matches(source_value.as_deref()), *memo == SourceMemo::Cleared)
        };
        // After a clear the target is legitimately empty.
        if unchanged && (has_old_value || cleared) {
            return Ok(UpdateResult::kept(
                old_value,
                source_value,
                UpdateStatus::SourceUnchanged,
            ));
        }

        let (new_value, memo) = match self.config.generation_mode {
            GenerationMode::Uuid => (self.ids.generate(), SourceMemo::Generated),
            GenerationMode::Slug => match &source_value {
                Some(source) => (
                    encode(source, self.config.slug_options()),
                    SourceMemo::Source(source.clone()),
                ),
                None => (String::new(), SourceMemo::Cleared),
            },
        };

        self.host.write_value(&target, &new_value).await?;
        *self.last_source.lock().unwrap_or_else(PoisonError::into_inner) = memo;

        Ok(UpdateResult {
            old_value,
            new_value: Some(new_value),
            source_value,
            status: UpdateStatus::Written,
        })
    }
}

/// Creates a shared controller for one pairing.
pub fn create_auto_updater(config: AutoUpdateConfig, host: Arc<dyn FieldHost>) -> Arc<AutoUpdater> {
    Arc::new(AutoUpdater::new(config, host))
}

/// One-shot update of `target` from `source` with otherwise default
/// settings taken from `config`.
pub async fn auto_update_field(
    host: Arc<dyn FieldHost>,
    source: impl Into<FieldName>,
    target: impl Into<FieldName>,
    config: &SlugConfig,
) -> UpdateResult {
    AutoUpdater::new(AutoUpdateConfig::from_slug_config(source, target, config), host)
        .update()
        .await
}
