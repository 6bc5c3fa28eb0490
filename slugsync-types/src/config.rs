//! Widget configuration as supplied by the host's option panel.

use crate::{AutoUpdateMode, Result, Separator, SlugOptions};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default debounce delay between a source event and the recomputation.
pub const DEFAULT_UPDATE_DELAY_MS: u64 = 100;

/// Options the host stores for one slug field.
///
/// Keys match the host's option JSON; every key is optional and falls back
/// to the widget defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Collection the source field lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_collection: Option<String>,
    /// Field holding the item's publication status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_field: Option<String>,
    /// Generate the slug automatically from the source.
    pub auto: bool,
    pub required: bool,
    pub separator: Separator,
    pub lowercase: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_empty_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_format_message: Option<String>,
    pub allow_duplicates: bool,
    pub auto_update_mode: AutoUpdateMode,
    /// Never overwrite a target that already holds a value.
    pub preserve_existing: bool,
    /// Debounce delay in milliseconds.
    pub update_delay: u64,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            select_collection: None,
            status_field: None,
            auto: true,
            required: true,
            separator: Separator::Hyphen,
            lowercase: true,
            placeholder: None,
            custom_empty_message: None,
            custom_format_message: None,
            allow_duplicates: false,
            auto_update_mode: AutoUpdateMode::Change,
            preserve_existing: false,
            update_delay: DEFAULT_UPDATE_DELAY_MS,
        }
    }
}

impl SlugConfig {
    /// Parses the host's option JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes back to the host's option JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encoder options implied by this configuration.
    #[must_use]
    pub fn slug_options(&self) -> SlugOptions {
        SlugOptions::new(self.separator, self.lowercase)
    }

    /// Debounce delay as a `Duration`.
    #[must_use]
    pub fn update_delay(&self) -> Duration {
        Duration::from_millis(self.update_delay)
    }

    /// Whether the controller should attach any trigger.
    #[must_use]
    pub fn auto_update_enabled(&self) -> bool {
        self.auto && self.auto_update_mode.is_enabled()
    }
}
