//! Value extraction and classification for slugsync.
//!
//! The middle layer between the host and the encoder:
//! - [`FieldHost`]: the collaborator trait a host implements
//! - [`RankedLookup`]: ordered lookup strategies a host can resolve with
//! - [`get_processed_field_value`]: read a field, reformatting date-like text
//! - [`MemoryHost`]: an in-process host
//!
//! Date reformatting is a heuristic: see [`is_date_field`] and
//! [`parse_date_value`].

mod date;
mod extract;
mod host;
mod lookup;
mod memory;

pub use date::{
    Clock, DateFormat, FixedClock, ParsedDate, SystemClock, is_date_field, parse_date_value,
};
pub use extract::{
    ExtractedValue, extract_field, extract_from, get_processed_field_value, normalize_text,
};
pub use host::{ElementId, ElementKind, FieldHandle, FieldHost, HostError, HostResult};
pub use lookup::{FnStrategy, LookupStrategy, RankedLookup};
pub use memory::{ChangeNotification, MemoryElement, MemoryHost};
