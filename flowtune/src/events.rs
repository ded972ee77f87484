//! Events a selection session can process.
//!
//! Each event is some external trigger that should change session state.
//! All events are pure data and contain no behavior themselves; whatever
//! input modality produced them (rectangle drag, text prompt, scripted
//! command) is invisible to the session.

use flowtune_core::Region;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A region was drawn. Replaces any prior pending region.
    Select(Region),

    /// The pending region was confirmed with an operator-supplied ratio,
    /// still in its raw textual form (parsing it is a session concern so a
    /// bad value can be rejected without losing the pending region).
    Confirm { ratio: String },

    /// Revert the most recent confirmed operation.
    Undo,

    /// Reapply the most recently undone operation.
    Redo,

    /// End the editing session.
    Quit,
}
