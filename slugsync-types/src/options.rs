//! Slug encoding options and controller modes.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single character placed between words of a slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separator {
    #[default]
    #[serde(rename = "-")]
    Hyphen,
    #[serde(rename = "_")]
    Underscore,
}

impl Separator {
    /// Returns the separator character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Hyphen => '-',
            Self::Underscore => '_',
        }
    }

    /// Returns the separator as a one-character string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hyphen => "-",
            Self::Underscore => "_",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Separator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Self::Hyphen),
            "_" => Ok(Self::Underscore),
            other => Err(Error::InvalidSeparator(other.to_string())),
        }
    }
}

/// Separator and case policy for one encoding call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlugOptions {
    pub separator: Separator,
    pub lowercase: bool,
}

impl SlugOptions {
    #[must_use]
    pub const fn new(separator: Separator, lowercase: bool) -> Self {
        Self {
            separator,
            lowercase,
        }
    }

    /// Same options with a different separator.
    #[must_use]
    pub const fn with_separator(self, separator: Separator) -> Self {
        Self { separator, ..self }
    }

    /// Same options with a different case policy.
    #[must_use]
    pub const fn with_lowercase(self, lowercase: bool) -> Self {
        Self { lowercase, ..self }
    }
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self::new(Separator::Hyphen, true)
    }
}

/// What the controller writes into the target field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Encode the source value into a slug.
    #[default]
    Slug,
    /// Write a fresh random v4 identifier, ignoring the source text.
    Uuid,
}

/// When the host should re-run synchronization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoUpdateMode {
    Disabled,
    #[default]
    Change,
    Blur,
    Focus,
    Realtime,
}

impl AutoUpdateMode {
    /// Whether any trigger is attached at all.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Whether source change/input events trigger an update.
    #[must_use]
    pub const fn on_change(self) -> bool {
        matches!(self, Self::Change | Self::Realtime)
    }

    /// Whether leaving the source field triggers an update.
    #[must_use]
    pub const fn on_blur(self) -> bool {
        matches!(self, Self::Blur | Self::Realtime)
    }

    /// Whether entering the source field triggers an update.
    #[must_use]
    pub const fn on_focus(self) -> bool {
        matches!(self, Self::Focus | Self::Realtime)
    }
}

impl FromStr for AutoUpdateMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disabled" => Ok(Self::Disabled),
            "change" => Ok(Self::Change),
            "blur" => Ok(Self::Blur),
            "focus" => Ok(Self::Focus),
            "realtime" => Ok(Self::Realtime),
            other => Err(Error::InvalidMode(other.to_string())),
        }
    }
}
