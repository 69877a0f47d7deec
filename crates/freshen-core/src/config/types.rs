//! Configuration type definitions.
//!
//! These types are deserialized from TOML config files. Every field is
//! optional so that a partial project config only overrides what it names;
//! the accessors in [`super::defaults`] fill in the rest.

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FreshenConfig {
    /// Background version polling
    #[serde(default)]
    pub poll: PollConfig,

    /// Transient status indicator shown while an update is pending
    #[serde(default)]
    pub indicator: IndicatorConfig,
}

/// Poll timer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PollConfig {
    /// Whether to run the periodic check at all.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Interval between checks in milliseconds.
    /// Default: 3600000 (one hour).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,

    /// Skip a tick when the host reports no connectivity.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_when_offline: Option<bool>,
}

/// Status indicator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct IndicatorConfig {
    /// Text shown while the new version is being activated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
