//! In-memory host.
//!
//! Keeps fields in a process-local table, resolves them through a
//! [`RankedLookup`] (exact field name first, then aliases), and records every
//! write-back notification. Useful for embedding the core without a UI and
//! as the host double in tests.

use crate::host::{ElementId, ElementKind, FieldHandle, FieldHost, HostError, HostResult};
use crate::lookup::RankedLookup;
use async_trait::async_trait;
use slugsync_types::FieldName;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

/// One element stored in a [`MemoryHost`].
#[derive(Debug, Clone)]
pub struct MemoryElement {
    pub handle: FieldHandle,
    pub value: Option<String>,
    /// Alternate names the element answers to (e.g. `name`/`id` attributes).
    pub aliases: Vec<String>,
}

impl MemoryElement {
    /// A text input for `field` holding `value`.
    pub fn input(field: impl Into<FieldName>, value: impl Into<String>) -> Self {
        Self::of_kind(field, ElementKind::Input, Some(value.into()))
    }

    /// An element of any kind; `id` is assigned on insert.
    pub fn of_kind(field: impl Into<FieldName>, kind: ElementKind, value: Option<String>) -> Self {
        Self {
            handle: FieldHandle::new(ElementId(0), field, kind),
            value,
            aliases: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_input_type(mut self, input_type: &str) -> Self {
        self.handle = self.handle.with_input_type(input_type);
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.handle = self.handle.with_class(class);
        self
    }

    #[must_use]
    pub fn within(mut self, context: &str) -> Self {
        self.handle = self.handle.within(context);
        self
    }

    #[must_use]
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }
}

/// A change notification fired by a write-back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeNotification {
    pub field: FieldName,
    pub value: String,
}

type Document = HashMap<ElementId, MemoryElement>;

/// Field host backed by process memory.
pub struct MemoryHost {
    elements: RwLock<Document>,
    lookup: RankedLookup<Document>,
    next_id: AtomicU64,
    writes: AtomicUsize,
    notifications: Mutex<Vec<ChangeNotification>>,
    statuses: RwLock<HashMap<FieldName, String>>,
    fail_writes: AtomicBool,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        let lookup = RankedLookup::new()
            .then_fn("field", |doc: &Document, field: &FieldName| {
                first_match(doc, |el| el.handle.field == *field)
            })
            .then_fn("alias", |doc: &Document, field: &FieldName| {
                first_match(doc, |el| el.aliases.iter().any(|a| a == field.as_str()))
            });
        Self {
            elements: RwLock::new(HashMap::new()),
            lookup,
            next_id: AtomicU64::new(1),
            writes: AtomicUsize::new(0),
            notifications: Mutex::new(Vec::new()),
            statuses: RwLock::new(HashMap::new()),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Adds an element and returns its assigned id.
    pub fn insert(&self, mut element: MemoryElement) -> ElementId {
        let id = ElementId(self.next_id.fetch_add(1, Ordering::Relaxed));
        element.handle.id = id;
        self.elements
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, element);
        id
    }

    /// Removes every element for `field`.
    pub fn remove(&self, field: &FieldName) {
        self.elements
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|_, el| el.handle.field != *field);
    }

    /// Simulates a user edit: changes the value without a write-back
    /// notification.
    pub fn set_value(&self, field: &FieldName, value: Option<&str>) -> bool {
        let mut elements = self.elements.write().unwrap_or_else(PoisonError::into_inner);
        match elements.values_mut().find(|el| el.handle.field == *field) {
            Some(el) => {
                el.value = value.map(str::to_string);
                true
            }
            None => false,
        }
    }

    /// Current stored value for `field`.
    pub fn value(&self, field: &FieldName) -> Option<String> {
        let elements = self.elements.read().unwrap_or_else(PoisonError::into_inner);
        first_match(&elements, |el| el.handle.field == *field)
            .and_then(|h| elements.get(&h.id).and_then(|el| el.value.clone()))
    }

    pub fn set_status(&self, status_field: &FieldName, value: &str) {
        self.statuses
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(status_field.clone(), value.to_string());
    }

    /// Makes subsequent writes fail with [`HostError::WriteRejected`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful write-backs.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Every change notification fired so far, oldest first.
    pub fn notifications(&self) -> Vec<ChangeNotification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowest-id element satisfying `pred`, so resolution is deterministic.
fn first_match(doc: &Document, pred: impl Fn(&MemoryElement) -> bool) -> Option<FieldHandle> {
    doc.values()
        .filter(|el| pred(el))
        .min_by_key(|el| el.handle.id)
        .map(|el| el.handle.clone())
}

#[async_trait]
impl FieldHost for MemoryHost {
    async fn resolve_field(&self, field: &FieldName) -> Option<FieldHandle> {
        let elements = self.elements.read().unwrap_or_else(PoisonError::into_inner);
        self.lookup.resolve(&elements, field)
    }

    async fn read_value(&self, handle: &FieldHandle) -> HostResult<Option<String>> {
        let elements = self.elements.read().unwrap_or_else(PoisonError::into_inner);
        elements
            .get(&handle.id)
            .map(|el| el.value.clone())
            .ok_or(HostError::Detached(handle.id))
    }

    async fn write_value(&self, handle: &FieldHandle, value: &str) -> HostResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(HostError::WriteRejected(format!(
                "field {} is read-only",
                handle.field
            )));
        }
        {
            let mut elements = self.elements.write().unwrap_or_else(PoisonError::into_inner);
            let element = elements
                .get_mut(&handle.id)
                .ok_or(HostError::Detached(handle.id))?;
            element.value = Some(value.to_string());
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ChangeNotification {
                field: handle.field.clone(),
                value: value.to_string(),
            });
        Ok(())
    }

    async fn current_status_value(&self, status_field: &FieldName) -> Option<String> {
        self.statuses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(status_field)
            .cloned()
    }
}
