//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.freshen/config.toml`
//! 3. **Project config** - `./.freshen/config.toml`

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::{FreshenConfig, IndicatorConfig, PollConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use crate::poll::interval_millis;

const CONFIG_DIR: &str = ".freshen";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the user and project config files.
///
/// # Errors
///
/// Returns an error if a present file cannot be read or parsed, or if the
/// merged configuration fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<FreshenConfig, ConfigError> {
    let user_path = dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE));
    let project_path = std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    load_hierarchy_from(user_path.as_deref(), Some(&project_path))
}

/// Load and merge configuration from explicit user and project paths.
pub fn load_hierarchy_from(
    user_path: Option<&Path>,
    project_path: Option<&Path>,
) -> Result<FreshenConfig, ConfigError> {
    let mut config = FreshenConfig::default();

    for path in [user_path, project_path].into_iter().flatten() {
        if let Some(layer) = load_config_file(path)? {
            config = merge_configs(config, layer);
        }
    }

    validate_config(&config)?;

    info!(
        event = "core.config.load_completed",
        poll_enabled = config.poll.enabled(),
        interval_ms = interval_millis(config.poll.interval())
    );

    Ok(config)
}

/// Load a single configuration file. Returns `Ok(None)` when it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<FreshenConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_skipped",
                path = %path.display(),
                reason = "not found"
            );
            return Ok(None);
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(config))
}

/// Merge two configurations, with `override_config` taking precedence for
/// every field it sets.
pub fn merge_configs(base: FreshenConfig, override_config: FreshenConfig) -> FreshenConfig {
    FreshenConfig {
        poll: PollConfig {
            enabled: override_config.poll.enabled.or(base.poll.enabled),
            interval_ms: override_config.poll.interval_ms.or(base.poll.interval_ms),
            skip_when_offline: override_config
                .poll
                .skip_when_offline
                .or(base.poll.skip_when_offline),
        },
        indicator: IndicatorConfig {
            message: override_config.indicator.message.or(base.indicator.message),
        },
    }
}

/// Path of the project config for a given directory.
pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR).join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = project_config_path(dir.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_files_yield_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let config = load_hierarchy_from(Some(&missing), Some(&missing)).unwrap();
        assert_eq!(config, FreshenConfig::default());
    }

    #[test]
    fn test_project_overrides_user() {
        let user_dir = TempDir::new().unwrap();
        let project_dir = TempDir::new().unwrap();
        let user = write_config(
            &user_dir,
            "[poll]\ninterval_ms = 60000\nskip_when_offline = false\n\n[indicator]\nmessage = \"User\"\n",
        );
        let project = write_config(&project_dir, "[poll]\ninterval_ms = 120000\n");

        let config = load_hierarchy_from(Some(&user), Some(&project)).unwrap();
        assert_eq!(config.poll.interval(), Duration::from_secs(120));
        assert!(!config.poll.skip_when_offline());
        assert_eq!(config.indicator.message(), "User");
    }

    #[test]
    fn test_parse_error_is_reported_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[poll\ninterval_ms = ");

        let err = load_hierarchy_from(None, Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_merged_config_is_validated() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "[poll]\ninterval_ms = 0\n");

        let err = load_hierarchy_from(None, Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_merge_keeps_base_when_override_is_empty() {
        let base = FreshenConfig {
            poll: PollConfig {
                enabled: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        let merged = merge_configs(base, FreshenConfig::default());
        assert_eq!(merged.poll.enabled, Some(false));
    }
}
