//! Interactive editing session over a [`flowtune_core`] record sequence.
//!
//! This crate owns the state that the original tool kept as module globals:
//! the live record sequence, the confirmed operation log, and the pending
//! region of an in-flight selection. The GUI (plot, rectangle drag, ratio
//! prompt) stays an external collaborator behind the [`Frontend`] trait and
//! drives the session one [`SessionEvent`] at a time.

pub mod events;
pub mod frontend;
pub mod session;

pub use events::SessionEvent;
pub use frontend::{Frontend, NullFrontend};
pub use session::{ConfirmError, Confirmation, SelectionSession, SessionState};
