//! Reading a field's value from the host and classifying it.

use crate::date::{Clock, is_date_field, parse_date_value};
use crate::host::{FieldHandle, FieldHost, HostResult};
use slugsync_types::FieldName;
use tracing::debug;

/// A value read from one field during one synchronization cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedValue {
    /// Trimmed text; `None` when the field is missing or blank.
    pub raw: Option<String>,
    pub classified_as_date: bool,
}

impl ExtractedValue {
    /// The value that should reach the encoder: date-like text is rewritten
    /// into its canonical form when a pattern matches, otherwise `raw` is
    /// returned unchanged.
    pub fn processed(&self, clock: &dyn Clock) -> Option<String> {
        let raw = self.raw.as_deref()?;
        if self.classified_as_date {
            if let Some(parsed) = parse_date_value(raw, clock) {
                debug!(format = ?parsed.format, value = %parsed.value, "date value reformatted");
                return Some(parsed.value);
            }
        }
        Some(raw.to_string())
    }
}

/// Trims host text; blank text counts as no value.
#[must_use]
pub fn normalize_text(text: Option<String>) -> Option<String> {
    let text = text?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_string())
    }
}

/// Reads and classifies an already-resolved element.
pub async fn extract_from(host: &dyn FieldHost, handle: &FieldHandle) -> HostResult<ExtractedValue> {
    let raw = normalize_text(host.read_value(handle).await?);
    let classified_as_date = is_date_field(&handle.field, handle);
    debug!(
        field = %handle.field,
        element = %handle.id,
        kind = ?handle.kind,
        has_value = raw.is_some(),
        classified_as_date,
        "field extracted"
    );
    Ok(ExtractedValue {
        raw,
        classified_as_date,
    })
}

/// Resolves `field` and reads it. An unresolvable field yields an empty
/// extraction rather than an error.
pub async fn extract_field(host: &dyn FieldHost, field: &FieldName) -> HostResult<ExtractedValue> {
    match host.resolve_field(field).await {
        Some(handle) => {
            let mut extracted = extract_from(host, &handle).await?;
            // The logical name is authoritative for the name heuristic.
            extracted.classified_as_date |= is_date_field(field, &handle);
            Ok(extracted)
        }
        None => {
            debug!(field = %field, "field not found");
            Ok(ExtractedValue {
                raw: None,
                classified_as_date: false,
            })
        }
    }
}

/// Current value of `field`, date-reformatted when the field is date-like.
/// `None` when no value could be resolved at all.
pub async fn get_processed_field_value(
    host: &dyn FieldHost,
    field: &FieldName,
    clock: &dyn Clock,
) -> HostResult<Option<String>> {
    Ok(extract_field(host, field).await?.processed(clock))
}
