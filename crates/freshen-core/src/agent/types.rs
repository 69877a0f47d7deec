use serde::{Deserialize, Serialize};

/// Snapshot of the update agent's state.
///
/// Published through the `watch` channel returned by
/// [`UpdateAgent::register`](super::UpdateAgent::register). Both flags only
/// ever go from `false` to `true` during one registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentState {
    /// A newer version has been downloaded and is waiting to be activated.
    pub need_refresh: bool,
    /// The running version is fully cached and works without a network.
    pub offline_ready: bool,
}

impl AgentState {
    pub fn refresh_needed() -> Self {
        Self {
            need_refresh: true,
            ..Self::default()
        }
    }
}
