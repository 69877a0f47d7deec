//! Configuration validation.

use crate::config::types::FreshenConfig;
use crate::errors::ConfigError;

/// Validate a merged configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfiguration`] when the poll interval is
/// zero or the indicator message is blank.
pub fn validate_config(config: &FreshenConfig) -> Result<(), ConfigError> {
    if config.poll.interval_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "poll.interval_ms must be greater than zero".to_string(),
        });
    }

    if let Some(message) = &config.indicator.message
        && message.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "indicator.message must not be blank".to_string(),
        });
    }

    Ok(())
}
