use std::sync::Arc;

use tracing::{debug, info};

use super::events::Event;
use super::types::{Phase, StatusIndicator};
use crate::agent::{AgentState, UpdateAgent};

/// The update detection and activation state machine.
///
/// Reacts to edges of the agent's state, not to renders. A render cycle is
/// `observe` → `render` → `commit`; running that cycle again with the same
/// state is a no-op, so activation is issued at most once per mount.
pub struct UpdateSupervisor<A: UpdateAgent> {
    agent: Arc<A>,
    phase: Phase,
    last_seen: AgentState,
    indicator: StatusIndicator,
}

impl<A: UpdateAgent> UpdateSupervisor<A> {
    pub fn new(agent: Arc<A>, indicator: StatusIndicator) -> Self {
        Self {
            agent,
            phase: Phase::Idle,
            last_seen: AgentState::default(),
            indicator,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_seen(&self) -> AgentState {
        self.last_seen
    }

    /// Fold a fresh agent snapshot into the machine.
    ///
    /// Returns the events for the edges crossed by this snapshot. Flags never
    /// go back to false within a mount, so a `true → false → true` sequence
    /// does not restart the lifecycle.
    pub fn observe(&mut self, state: AgentState) -> Vec<Event> {
        let mut events = Vec::new();

        if state.offline_ready && !self.last_seen.offline_ready {
            info!(event = "core.supervisor.offline_ready");
            events.push(Event::OfflineReady);
        }

        if state.need_refresh && !self.last_seen.need_refresh && self.phase == Phase::Idle {
            info!(event = "core.supervisor.update_detected");
            self.phase = Phase::UpdateAvailable;
            events.push(Event::UpdateDetected);
        }

        self.last_seen = state;
        events
    }

    /// The indicator to show for the current snapshot, if any.
    pub fn render(&self) -> Option<&StatusIndicator> {
        self.last_seen.need_refresh.then_some(&self.indicator)
    }

    /// Post-render effect: issue activation if an update is waiting.
    ///
    /// Forces replacement of every cached asset. Returns the activation event
    /// the one time it fires and `None` on every other call.
    pub fn commit(&mut self) -> Option<Event> {
        if self.phase != Phase::UpdateAvailable {
            return None;
        }

        self.phase = Phase::Activating;
        info!(
            event = "core.supervisor.activation_started",
            force_replace_all = true
        );
        self.agent.activate(true);
        debug!(event = "core.supervisor.activation_issued");

        Some(Event::ActivationIssued {
            force_replace_all: true,
        })
    }
}
