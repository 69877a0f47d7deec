//! Test doubles for the update agent and the status view.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use super::{AgentError, AgentState, UpdateAgent};
use crate::supervisor::{StatusIndicator, StatusView};

/// Ordered record of what the agent and the view saw, shared between both.
pub type Journal = Arc<Mutex<Vec<String>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

/// How [`FakeAgent::register`] answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Succeeds,
    Fails,
    Unsupported,
}

/// In-memory update agent that counts every call it receives.
pub struct FakeAgent {
    state_tx: watch::Sender<AgentState>,
    ready_tx: watch::Sender<bool>,
    registration: Registration,
    online: AtomicBool,
    activations: Mutex<Vec<bool>>,
    checks: AtomicUsize,
    registrations: AtomicUsize,
    journal: Journal,
}

impl FakeAgent {
    pub fn new(journal: Journal) -> Arc<Self> {
        Self::with_registration(journal, Registration::Succeeds)
    }

    pub fn failing(journal: Journal) -> Arc<Self> {
        Self::with_registration(journal, Registration::Fails)
    }

    pub fn unsupported(journal: Journal) -> Arc<Self> {
        Self::with_registration(journal, Registration::Unsupported)
    }

    fn with_registration(journal: Journal, registration: Registration) -> Arc<Self> {
        let (state_tx, _) = watch::channel(AgentState::default());
        let (ready_tx, _) = watch::channel(true);
        Arc::new(Self {
            state_tx,
            ready_tx,
            registration,
            online: AtomicBool::new(true),
            activations: Mutex::new(Vec::new()),
            checks: AtomicUsize::new(0),
            registrations: AtomicUsize::new(0),
            journal,
        })
    }

    /// Publish a new state, as the agent would after finding a deployment.
    pub fn publish(&self, state: AgentState) {
        self.state_tx.send_replace(state);
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready_tx.send_replace(ready);
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    pub fn activations(&self) -> Vec<bool> {
        self.activations.lock().unwrap().clone()
    }

    pub fn checks(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }

    pub fn registrations(&self) -> usize {
        self.registrations.load(Ordering::SeqCst)
    }
}

impl UpdateAgent for FakeAgent {
    fn register(&self) -> Result<watch::Receiver<AgentState>, AgentError> {
        self.registrations.fetch_add(1, Ordering::SeqCst);
        match self.registration {
            Registration::Succeeds => Ok(self.state_tx.subscribe()),
            Registration::Fails => Err(AgentError::RegistrationFailed {
                message: "agent script returned 404".to_string(),
            }),
            Registration::Unsupported => Err(AgentError::Unsupported),
        }
    }

    fn activate(&self, force_replace_all: bool) {
        self.journal
            .lock()
            .unwrap()
            .push(format!("activate:{force_replace_all}"));
        self.activations.lock().unwrap().push(force_replace_all);
    }

    fn ready(&self) -> impl Future<Output = ()> + Send {
        let mut ready_rx = self.ready_tx.subscribe();
        async move {
            loop {
                let ready = *ready_rx.borrow_and_update();
                if ready || ready_rx.changed().await.is_err() {
                    return;
                }
            }
        }
    }

    fn request_check(&self) {
        self.checks.fetch_add(1, Ordering::SeqCst);
    }

    fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

/// Status view that writes every render into the journal.
pub struct JournalView {
    journal: Journal,
}

impl JournalView {
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }
}

impl StatusView for JournalView {
    fn show(&mut self, indicator: Option<&StatusIndicator>) {
        let entry = match indicator {
            Some(indicator) => format!("show:{indicator}"),
            None => "show:none".to_string(),
        };
        self.journal.lock().unwrap().push(entry);
    }
}
