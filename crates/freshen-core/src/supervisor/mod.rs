//! Update supervision: the state machine, its render target, and the
//! component that wires both to the agent and the poll timer.

pub mod events;
pub mod machine;
pub mod prompt;
pub mod types;
pub mod view;

pub use events::Event;
pub use machine::UpdateSupervisor;
pub use prompt::UpdatePrompt;
pub use types::{Phase, StatusIndicator};
pub use view::{LogView, StatusView};
