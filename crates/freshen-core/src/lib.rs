//! freshen-core: keeps a running application on its latest deployed version
//!
//! Watches the host's update agent, activates a newly downloaded version as
//! soon as it is reported, and asks the agent to re-check on a fixed interval
//! while the application is open.
//!
//! # Main Entry Points
//!
//! - [`supervisor`] - The update prompt component and its state machine
//! - [`poll`] - Periodic version checks
//! - [`agent`] - The update agent trait the host implements
//! - [`config`] - Configuration management

pub mod agent;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod poll;
pub mod supervisor;

// Re-export commonly used types at crate root for convenience
pub use agent::{AgentError, AgentState, UpdateAgent};
pub use config::FreshenConfig;
pub use errors::{ConfigError, FreshenError};
pub use poll::{POLL_INTERVAL, PollTimer};
pub use supervisor::{
    Event, LogView, Phase, StatusIndicator, StatusView, UpdatePrompt, UpdateSupervisor,
};

// Re-export logging initialization
pub use logging::init_logging;
