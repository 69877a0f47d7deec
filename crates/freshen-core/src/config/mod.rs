//! # Configuration System
//!
//! Hierarchical TOML configuration for the update prompt.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.freshen/config.toml` (global user preferences)
//! 3. **Project config** - `./.freshen/config.toml` (project-specific overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ./.freshen/config.toml
//! [poll]
//! enabled = true
//! interval_ms = 3600000
//! skip_when_offline = true
//!
//! [indicator]
//! message = "Updating to the latest version…"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use freshen_core::config::FreshenConfig;
//!
//! fn example() -> Result<(), freshen_core::errors::ConfigError> {
//!     let config = FreshenConfig::load_hierarchy()?;
//!     let _interval = config.poll.interval();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{FreshenConfig, IndicatorConfig, PollConfig};
pub use validation::validate_config;

impl FreshenConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
