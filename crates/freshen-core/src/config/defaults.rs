//! Default values for configuration types.

use std::time::Duration;

use crate::config::types::{IndicatorConfig, PollConfig};
use crate::poll::POLL_INTERVAL;

/// Default indicator text.
pub const DEFAULT_INDICATOR_MESSAGE: &str = "Updating to the latest version…";

impl PollConfig {
    /// Returns whether polling is enabled, defaulting to true.
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Returns the poll interval, defaulting to [`POLL_INTERVAL`].
    pub fn interval(&self) -> Duration {
        self.interval_ms
            .map(Duration::from_millis)
            .unwrap_or(POLL_INTERVAL)
    }

    /// Returns whether offline ticks are skipped, defaulting to true.
    pub fn skip_when_offline(&self) -> bool {
        self.skip_when_offline.unwrap_or(true)
    }
}

impl IndicatorConfig {
    /// Returns the indicator text, defaulting to [`DEFAULT_INDICATOR_MESSAGE`].
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(DEFAULT_INDICATOR_MESSAGE)
    }
}
