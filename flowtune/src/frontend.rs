//! The seam between the session and whatever displays it.

use flowtune_core::{MotionRecord, Operation};

/// A display surface for the session: the plotted toolpath in the original
/// tool, a line-mode terminal in ours, a no-op in tests.
///
/// The frontend only ever borrows session data; mutation goes through the
/// session's own transitions.
pub trait Frontend {
    /// Full re-render after the record sequence changed: the current records
    /// plus the confirmed operation log (so prior regions can be outlined
    /// and labeled with their ratio).
    fn render(&mut self, records: &[MotionRecord], operations: &[Operation]);

    /// An operator-facing message for recoverable conditions (rejected
    /// ratio, nothing pending to confirm or undo).
    fn notify(&mut self, message: &str);
}

/// Frontend that ignores everything. For tests and headless batch runs.
#[derive(Debug, Default)]
pub struct NullFrontend;

impl Frontend for NullFrontend {
    fn render(&mut self, _records: &[MotionRecord], _operations: &[Operation]) {}
    fn notify(&mut self, _message: &str) {}
}
