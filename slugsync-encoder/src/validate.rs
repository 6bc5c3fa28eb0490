//! Validation of a slug value against the widget's rules.

use crate::slug::is_url;
use slugsync_types::{Separator, SlugConfig};
use std::collections::HashSet;
use thiserror::Error;

/// Message shown when a required slug is blank and no custom one is set.
pub const DEFAULT_EMPTY_MESSAGE: &str = "Slug cannot be empty. Please enter a valid slug.";

/// Format message for the default rules (hyphen separator, lowercase).
pub const DEFAULT_FORMAT_MESSAGE: &str =
    "Slug must contain only lowercase letters, numbers, hyphens, and forward slashes.";

/// Format message describing the characters `validate` actually accepts
/// under `separator` and `lowercase`.
#[must_use]
pub fn default_format_message(separator: Separator, lowercase: bool) -> String {
    let letters = if lowercase { "lowercase letters" } else { "letters" };
    let separators = match separator {
        Separator::Hyphen => "hyphens",
        Separator::Underscore => "underscores",
    };
    format!("Slug must contain only {letters}, numbers, {separators}, and forward slashes.")
}

/// Message shown when a slug is already taken.
pub const DEFAULT_DUPLICATE_MESSAGE: &str = "Slug is already in use.";

/// A rule the slug value broke. `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugViolation {
    #[error("{message}")]
    Empty { message: String },

    #[error("{message}")]
    Format { message: String, offending: char },

    #[error("{message}")]
    Duplicate { message: String },
}

/// Rules derived from a [`SlugConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugRules {
    pub required: bool,
    pub separator: Separator,
    pub lowercase: bool,
    pub allow_duplicates: bool,
    empty_message: String,
    format_message: String,
}

impl SlugRules {
    #[must_use]
    pub fn from_config(config: &SlugConfig) -> Self {
        Self {
            required: config.required,
            separator: config.separator,
            lowercase: config.lowercase,
            allow_duplicates: config.allow_duplicates,
            empty_message: non_blank(config.custom_empty_message.as_deref())
                .unwrap_or(DEFAULT_EMPTY_MESSAGE)
                .to_string(),
            format_message: non_blank(config.custom_format_message.as_deref())
                .map_or_else(
                    || default_format_message(config.separator, config.lowercase),
                    str::to_string,
                ),
        }
    }

    pub fn empty_message(&self) -> &str {
        &self.empty_message
    }

    pub fn format_message(&self) -> &str {
        &self.format_message
    }

    /// Checks required-ness and format. URL-shaped values skip the format
    /// rule since the encoder keeps `.` and `:` for them.
    pub fn validate(&self, value: &str) -> Result<(), SlugViolation> {
        if value.trim().is_empty() {
            if self.required {
                return Err(SlugViolation::Empty {
                    message: self.empty_message.clone(),
                });
            }
            return Ok(());
        }

        if is_url(value) {
            return Ok(());
        }

        let sep = self.separator.as_char();
        let offending = value.chars().find(|&c| {
            let letter_ok = if self.lowercase {
                c.is_ascii_lowercase()
            } else {
                c.is_ascii_alphabetic()
            };
            !(letter_ok || c.is_ascii_digit() || c == '/' || c == sep)
        });

        match offending {
            Some(offending) => Err(SlugViolation::Format {
                message: self.format_message.clone(),
                offending,
            }),
            None => Ok(()),
        }
    }

    /// [`validate`](Self::validate) plus a duplicate check against slugs the
    /// caller already knows about. Skipped when duplicates are allowed.
    pub fn validate_unique(
        &self,
        value: &str,
        known: &HashSet<String>,
    ) -> Result<(), SlugViolation> {
        self.validate(value)?;
        if !self.allow_duplicates && !value.trim().is_empty() && known.contains(value) {
            return Err(SlugViolation::Duplicate {
                message: DEFAULT_DUPLICATE_MESSAGE.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SlugRules {
    fn default() -> Self {
        Self::from_config(&SlugConfig::default())
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
