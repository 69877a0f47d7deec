//! The update prompt component.
//!
//! Mounting registers with the agent, starts the poll timer and runs a first
//! render cycle. After that the host drives the prompt with
//! [`UpdatePrompt::next_update`] (or [`UpdatePrompt::run`]) and tears it down
//! with [`UpdatePrompt::unmount`].

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::events::Event;
use super::machine::UpdateSupervisor;
use super::types::{Phase, StatusIndicator};
use super::view::StatusView;
use crate::agent::{AgentError, AgentState, UpdateAgent};
use crate::config::FreshenConfig;
use crate::errors::FreshenError;
use crate::events;
use crate::poll::{PollTimer, interval_millis};

/// Supervises the application's self-update for the lifetime of one mount.
///
/// Must be mounted from inside a tokio runtime; the poll timer is a spawned
/// task.
pub struct UpdatePrompt<A: UpdateAgent, V: StatusView> {
    supervisor: Option<UpdateSupervisor<A>>,
    subscription: Option<watch::Receiver<AgentState>>,
    poll: Option<PollTimer>,
    view: V,
    events: Vec<Event>,
}

impl<A: UpdateAgent, V: StatusView> UpdatePrompt<A, V> {
    /// Mount the prompt.
    ///
    /// `agent` is `None` when the host has no update agent at all; the prompt
    /// then renders nothing and never polls. A registration failure is logged
    /// and leaves the prompt in the same inert state.
    pub fn mount(agent: Option<Arc<A>>, config: &FreshenConfig, view: V) -> Self {
        let mut prompt = Self {
            supervisor: None,
            subscription: None,
            poll: None,
            view,
            events: Vec::new(),
        };

        let Some(agent) = agent else {
            info!(event = "core.prompt.capability_absent");
            prompt.events.push(Event::CapabilityAbsent);
            prompt.view.show(None);
            events::log_prompt_mounted(false);
            return prompt;
        };

        match agent.register() {
            Ok(subscription) => {
                info!(event = "core.agent.register_completed");
                prompt.events.push(Event::AgentRegistered);

                if config.poll.enabled() {
                    let interval = config.poll.interval();
                    match PollTimer::start(
                        agent.clone(),
                        interval,
                        config.poll.skip_when_offline(),
                    ) {
                        Ok(timer) => {
                            prompt.poll = Some(timer);
                            prompt.events.push(Event::PollStarted {
                                interval_ms: interval_millis(interval),
                            });
                        }
                        Err(e) => {
                            warn!(
                                event = "core.poll.start_failed",
                                error = %e,
                                error_code = e.error_code()
                            );
                            events::log_prompt_error(&e);
                        }
                    }
                } else {
                    debug!(event = "core.poll.disabled");
                }

                prompt.supervisor = Some(UpdateSupervisor::new(
                    agent,
                    StatusIndicator::new(config.indicator.message()),
                ));
                prompt.subscription = Some(subscription);
                prompt.sync_from_subscription();
            }
            Err(AgentError::Unsupported) => {
                info!(event = "core.prompt.capability_absent", reason = "unsupported");
                prompt.events.push(Event::CapabilityAbsent);
                prompt.view.show(None);
                events::log_prompt_mounted(false);
                return prompt;
            }
            Err(e) => {
                warn!(
                    event = "core.agent.register_failed",
                    error = %e,
                    error_code = e.error_code()
                );
                events::log_prompt_error(&e);
                prompt.events.push(Event::RegistrationFailed {
                    message: e.to_string(),
                });
                prompt.view.show(None);
            }
        }

        events::log_prompt_mounted(true);
        prompt
    }

    /// Wait for the agent's next state change and run one render cycle.
    ///
    /// Returns the phase after the cycle, or `None` when there is nothing to
    /// wait for: no subscription, or the agent closed it.
    pub async fn next_update(&mut self) -> Option<Phase> {
        let subscription = self.subscription.as_mut()?;

        if subscription.changed().await.is_err() {
            let error = AgentError::SubscriptionClosed;
            warn!(
                event = "core.prompt.subscription_closed",
                error_code = error.error_code()
            );
            self.subscription = None;
            self.events.push(Event::SubscriptionClosed);
            return None;
        }

        self.sync_from_subscription();
        self.supervisor.as_ref().map(UpdateSupervisor::phase)
    }

    /// Drive the prompt until the subscription ends.
    pub async fn run(&mut self) {
        while let Some(phase) = self.next_update().await {
            debug!(event = "core.prompt.cycle_completed", phase = %phase);
        }
    }

    /// Re-render with the last seen agent state. Never issues a second
    /// activation.
    pub fn rerender(&mut self) {
        let Some(state) = self.supervisor.as_ref().map(UpdateSupervisor::last_seen) else {
            self.view.show(None);
            return;
        };
        self.render_cycle(state);
    }

    /// Tear the prompt down, handing back the view and the mount's events.
    ///
    /// Cancels the poll timer. An activation already issued cannot be taken
    /// back, and the agent registration outlives the prompt.
    pub fn unmount(mut self) -> (V, Vec<Event>) {
        let was_polling = self.is_polling();
        if let Some(timer) = self.poll.take() {
            timer.cancel();
            self.events.push(Event::PollStopped);
        }
        events::log_prompt_unmounted(was_polling);
        (self.view, self.events)
    }

    pub fn phase(&self) -> Phase {
        self.supervisor
            .as_ref()
            .map_or(Phase::Idle, UpdateSupervisor::phase)
    }

    pub fn is_polling(&self) -> bool {
        self.poll.as_ref().is_some_and(PollTimer::is_active)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn sync_from_subscription(&mut self) {
        let Some(subscription) = self.subscription.as_mut() else {
            return;
        };
        let state = *subscription.borrow_and_update();
        self.render_cycle(state);
    }

    fn render_cycle(&mut self, state: AgentState) {
        let Some(supervisor) = self.supervisor.as_mut() else {
            return;
        };

        let mut cycle_events = supervisor.observe(state);
        self.view.show(supervisor.render());
        cycle_events.extend(supervisor.commit());
        self.events.extend(cycle_events);
    }
}
