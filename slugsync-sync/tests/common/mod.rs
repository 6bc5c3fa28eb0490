//! Shared test helpers for controller tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use slugsync_extract::{
    FieldHandle, FieldHost, FixedClock, HostResult, MemoryElement, MemoryHost,
};
use slugsync_sync::IdGenerator;
use slugsync_types::FieldName;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{Notify, Semaphore};
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn title() -> FieldName {
    FieldName::from("title")
}

pub fn slug() -> FieldName {
    FieldName::from("slug")
}

/// A host with a `title` source and a `slug` target.
pub fn host_with(title: &str, slug: &str) -> Arc<MemoryHost> {
    let host = Arc::new(MemoryHost::new());
    host.insert(MemoryElement::input("title", title));
    host.insert(MemoryElement::input("slug", slug));
    host
}

/// 2026-10-18 09:30:00.
pub fn fixed_clock() -> Arc<FixedClock> {
    let at = NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap();
    Arc::new(FixedClock(at))
}

/// Deterministic identifiers: `id-1`, `id-2`, ...
#[derive(Default)]
pub struct CountingIds(AtomicUsize);

impl IdGenerator for CountingIds {
    fn generate(&self) -> String {
        format!("id-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// Wraps a `MemoryHost`; while closed, reads park until `open` is called.
pub struct GatedHost {
    pub inner: MemoryHost,
    closed: AtomicBool,
    entered: Notify,
    gate: Semaphore,
}

impl GatedHost {
    pub fn new(inner: MemoryHost) -> Self {
        Self {
            inner,
            closed: AtomicBool::new(false),
            entered: Notify::new(),
            gate: Semaphore::new(0),
        }
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Waits until a read has parked at the gate.
    pub async fn wait_entered(&self) {
        self.entered.notified().await;
    }

    pub fn open(&self) {
        self.closed.store(false, Ordering::SeqCst);
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl FieldHost for GatedHost {
    async fn resolve_field(&self, field: &FieldName) -> Option<FieldHandle> {
        self.inner.resolve_field(field).await
    }

    async fn read_value(&self, handle: &FieldHandle) -> HostResult<Option<String>> {
        if self.closed.load(Ordering::SeqCst) {
            self.entered.notify_one();
            self.gate.acquire().await.unwrap().forget();
        }
        self.inner.read_value(handle).await
    }

    async fn write_value(&self, handle: &FieldHandle, value: &str) -> HostResult<()> {
        self.inner.write_value(handle, value).await
    }
}
