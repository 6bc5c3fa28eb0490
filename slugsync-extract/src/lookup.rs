//! Ranked field lookup.
//!
//! A host usually has several ways to find a field's element, some more
//! specific than others. `RankedLookup` tries them in order over a host
//! document `D` and returns the first hit; results are never merged.

use crate::host::FieldHandle;
use slugsync_types::FieldName;
use tracing::debug;

/// One way of locating a field's element in a host document.
pub trait LookupStrategy<D: ?Sized>: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn locate(&self, document: &D, field: &FieldName) -> Option<FieldHandle>;
}

/// A named closure strategy.
pub struct FnStrategy<F> {
    name: String,
    locate: F,
}

impl<F> FnStrategy<F> {
    pub fn new(name: impl Into<String>, locate: F) -> Self {
        Self {
            name: name.into(),
            locate,
        }
    }
}

impl<D, F> LookupStrategy<D> for FnStrategy<F>
where
    D: ?Sized,
    F: Fn(&D, &FieldName) -> Option<FieldHandle> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn locate(&self, document: &D, field: &FieldName) -> Option<FieldHandle> {
        (self.locate)(document, field)
    }
}

/// Ordered list of strategies, most specific first.
pub struct RankedLookup<D: ?Sized> {
    strategies: Vec<Box<dyn LookupStrategy<D>>>,
}

impl<D: ?Sized> RankedLookup<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Appends a strategy at the lowest rank.
    #[must_use]
    pub fn then(mut self, strategy: impl LookupStrategy<D> + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Appends a closure strategy at the lowest rank.
    #[must_use]
    pub fn then_fn<F>(self, name: &str, locate: F) -> Self
    where
        F: Fn(&D, &FieldName) -> Option<FieldHandle> + Send + Sync + 'static,
    {
        self.then(FnStrategy::new(name, locate))
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Returns the first handle any strategy produces.
    pub fn resolve(&self, document: &D, field: &FieldName) -> Option<FieldHandle> {
        for strategy in &self.strategies {
            if let Some(handle) = strategy.locate(document, field) {
                debug!(field = %field, strategy = strategy.name(), element = %handle.id, "field resolved");
                return Some(handle);
            }
        }
        debug!(field = %field, "no strategy resolved field");
        None
    }
}

impl<D: ?Sized> Default for RankedLookup<D> {
    fn default() -> Self {
        Self::new()
    }
}
