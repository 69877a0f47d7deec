//! Update agent seam.
//!
//! The update agent is the host's background component that tracks which
//! version of the application is cached, detects newer deployments, and swaps
//! them in. It is process-wide and owned by the host; this crate only observes
//! its state and asks it to re-check.
//!
//! # Architecture
//!
//! - [`UpdateAgent`] - Trait the host implements (registration, activation, checks)
//! - [`AgentState`] - Snapshot published through the registration subscription
//! - [`AgentError`] - Registration error types

pub mod errors;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod test_helpers;

// Re-export public API
pub use errors::AgentError;
pub use traits::UpdateAgent;
pub use types::AgentState;
