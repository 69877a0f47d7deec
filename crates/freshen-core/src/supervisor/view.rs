use tracing::info;

use super::types::StatusIndicator;

/// Render target for the transient update indicator.
///
/// Called once per render cycle, before any activation is issued, with
/// `Some` while an update is pending and `None` otherwise.
pub trait StatusView {
    fn show(&mut self, indicator: Option<&StatusIndicator>);
}

/// Default view: reports indicator visibility changes through tracing.
#[derive(Debug, Default)]
pub struct LogView {
    visible: bool,
}

impl LogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl StatusView for LogView {
    fn show(&mut self, indicator: Option<&StatusIndicator>) {
        match (self.visible, indicator) {
            (false, Some(indicator)) => {
                info!(
                    event = "ui.indicator.shown",
                    message = indicator.message()
                );
                self.visible = true;
            }
            (true, None) => {
                info!(event = "ui.indicator.hidden");
                self.visible = false;
            }
            _ => {}
        }
    }
}
