//! Slug encoder for slugsync.
//!
//! The leaf layer: pure functions that turn arbitrary text into a URL-safe
//! slug. No state, no I/O.
//!
//! # Example
//!
//! ```
//! use slugsync_encoder::encode;
//! use slugsync_types::SlugOptions;
//!
//! assert_eq!(encode("Café déjà vu", SlugOptions::default()), "cafe-deja-vu");
//! assert_eq!(encode("Привет Мир", SlugOptions::default()), "privet-mir");
//! ```

mod slug;
mod table;
mod validate;

pub use slug::{encode, encode_optional, is_url};
pub use table::{lookup, transliterate};
pub use validate::{
    DEFAULT_DUPLICATE_MESSAGE, DEFAULT_EMPTY_MESSAGE, DEFAULT_FORMAT_MESSAGE, SlugRules,
    SlugViolation, default_format_message,
};
