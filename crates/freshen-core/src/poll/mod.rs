//! Background version polling.
//!
//! Keeps the "is there a new version?" check warm even when the agent's own
//! push notifications are late or missing. Each tick waits for the agent to
//! be ready and then asks it to re-check; the outcome only ever comes back
//! through the agent's state subscription.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::agent::UpdateAgent;
use crate::errors::ConfigError;

/// Default interval between version checks (one hour).
pub const POLL_INTERVAL: Duration = Duration::from_millis(3_600_000);

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub fn interval_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Handle to the repeating check task.
///
/// The task is aborted when the handle is cancelled or dropped, so no tick can
/// fire after the owner goes away.
pub struct PollTimer {
    handle: JoinHandle<()>,
    interval: Duration,
}

impl PollTimer {
    /// Spawn the check loop on the current tokio runtime.
    ///
    /// The first tick fires one full `interval` after start.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] for a zero interval;
    /// nothing is spawned in that case.
    pub fn start<A: UpdateAgent>(
        agent: Arc<A>,
        interval: Duration,
        skip_when_offline: bool,
    ) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::InvalidConfiguration {
                message: "poll interval must be greater than zero".to_string(),
            });
        }

        info!(
            event = "core.poll.started",
            interval_ms = interval_millis(interval),
            skip_when_offline = skip_when_offline
        );

        // Deadline is fixed here, not when the task is first polled.
        let first_tick = Instant::now() + interval;
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(first_tick, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                debug!(event = "core.poll.tick");

                agent.ready().await;

                if skip_when_offline && !agent.is_online() {
                    debug!(event = "core.poll.check_skipped", reason = "offline");
                    continue;
                }

                agent.request_check();
                debug!(event = "core.poll.check_requested");
            }
        });

        Ok(Self { handle, interval })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop polling. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.handle.abort();
        info!(event = "core.poll.stopped");
    }
}
