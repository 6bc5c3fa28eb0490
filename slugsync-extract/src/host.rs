//! The host collaborator boundary.
//!
//! The core never touches the host's UI directly. It asks the host to resolve
//! a field name to an element handle, to read the element's text, and to
//! write a new value back. Every write must be observable by the host's own
//! validation and persistence.

use async_trait::async_trait;
use slugsync_types::FieldName;
use std::fmt;
use thiserror::Error;

/// Errors a host can report while reading or writing a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The element behind a handle no longer exists.
    #[error("element detached: {0}")]
    Detached(ElementId),

    /// The host refused or failed the write.
    #[error("write rejected: {0}")]
    WriteRejected(String),

    /// Any other host-side failure.
    #[error("host error: {0}")]
    Other(String),
}

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Host-assigned identifier of a live element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What kind of element carries the field's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
    #[default]
    Input,
    TextArea,
    ContentEditable,
    Select,
    /// A container whose text content is the value.
    Container,
}

/// A resolved field element, with the markers the date heuristic inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldHandle {
    pub id: ElementId,
    pub field: FieldName,
    pub kind: ElementKind,
    /// The element's `type` marker, e.g. `date` or `datetime-local`.
    pub input_type: Option<String>,
    pub classes: Vec<String>,
    /// Field-context markers of enclosing elements, innermost first.
    pub context: Vec<String>,
}

impl FieldHandle {
    #[must_use]
    pub fn new(id: ElementId, field: impl Into<FieldName>, kind: ElementKind) -> Self {
        Self {
            id,
            field: field.into(),
            kind,
            input_type: None,
            classes: Vec::new(),
            context: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Nests the element under an enclosing field context.
    #[must_use]
    pub fn within(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn is_within(&self, context: &str) -> bool {
        self.context.iter().any(|c| c == context)
    }
}

/// Capabilities the core requires from the host environment.
///
/// Calls may suspend; the controller relies on this to be the only point
/// where two updates can interleave.
#[async_trait]
pub trait FieldHost: Send + Sync {
    /// Resolves a field name to its live element, trying the host's lookup
    /// strategies from most to least specific.
    async fn resolve_field(&self, field: &FieldName) -> Option<FieldHandle>;

    /// Reads the element's current text, `None` when it has none.
    async fn read_value(&self, handle: &FieldHandle) -> HostResult<Option<String>>;

    /// Writes a value and fires exactly one host-visible change notification.
    async fn write_value(&self, handle: &FieldHandle, value: &str) -> HostResult<()>;

    /// Current value of the item's status field, for host-side validation.
    async fn current_status_value(&self, status_field: &FieldName) -> Option<String> {
        let _ = status_field;
        None
    }
}
