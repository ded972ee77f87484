//! The selection session state machine.

use crate::{events::SessionEvent, frontend::Frontend};
use flowtune_core::{adjust, MotionRecord, Operation, Region};
use snafu::Snafu;

/// Where the session is in the select/confirm cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No region pending; selections may start.
    Idle,
    /// A region has been drawn but not confirmed.
    RegionPending,
}

/// Why a confirmation was rejected. Both variants are recoverable and leave
/// session state exactly as it was.
#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum ConfirmError {
    #[snafu(display("no region pending confirmation"))]
    NothingPending,

    /// The pending region is kept; the operator retries with a new value.
    #[snafu(display("invalid ratio {input:?}: enter a finite number"))]
    InvalidRatio { input: String },
}

/// Summary of a successful confirmation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confirmation {
    pub operation: Operation,
    /// How many records fell inside the region.
    pub affected: usize,
}

/// Owns the live record sequence and the confirmed operation log for one
/// editing pass, from parse to final rewrite.
///
/// Each confirmed selection multiplies the extrusion of the records inside
/// its region immediately and cumulatively; the log exists for overlays and
/// for replay-based undo, not as a deferred work queue. A pristine copy of
/// the extraction result is retained so undo can rebuild the sequence by
/// replaying the remaining log from scratch.
#[derive(Debug)]
pub struct SelectionSession {
    records: Vec<MotionRecord>,
    pristine: Vec<MotionRecord>,
    operations: Vec<Operation>,
    undone: Vec<Operation>,
    pending: Option<Region>,
}

impl SelectionSession {
    /// Starts an `Idle` session owning `records`.
    pub fn new(records: Vec<MotionRecord>) -> Self {
        Self {
            pristine: records.clone(),
            records,
            operations: Vec::new(),
            undone: Vec::new(),
            pending: None,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.pending {
            Some(_) => SessionState::RegionPending,
            None => SessionState::Idle,
        }
    }

    pub fn pending(&self) -> Option<&Region> {
        self.pending.as_ref()
    }

    /// The live record sequence, read-only. Mutation goes through
    /// [`confirm`](Self::confirm).
    pub fn records(&self) -> &[MotionRecord] {
        &self.records
    }

    /// Confirmed operations, oldest first.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Every `stride`-th record, for cheaper rendering of dense toolpaths.
    /// A stride of zero is treated as one.
    pub fn render_view(&self, stride: usize) -> impl Iterator<Item = &MotionRecord> {
        self.records.iter().step_by(stride.max(1))
    }

    /// Registers a drawn region. Only the most recent drag matters; any
    /// prior pending region is replaced, never queued.
    pub fn select(&mut self, region: Region) {
        tracing::debug!(?region, "region selected");
        self.pending = Some(region);
    }

    /// Confirms the pending region with a raw ratio string.
    ///
    /// On success the region transform runs over the full record sequence,
    /// the operation is appended to the log, the redo stack is dropped, and
    /// the session returns to `Idle`. A rejected confirmation mutates
    /// nothing: an unparseable or non-finite ratio keeps the region pending
    /// for a retry, and confirming with nothing pending is a no-op error.
    pub fn confirm(&mut self, ratio_text: &str) -> Result<Confirmation, ConfirmError> {
        let region = self.pending.ok_or(ConfirmError::NothingPending)?;

        let ratio: f64 = ratio_text
            .trim()
            .parse()
            .ok()
            .filter(|r: &f64| r.is_finite())
            .ok_or_else(|| ConfirmError::InvalidRatio {
                input: ratio_text.to_owned(),
            })?;

        let affected = adjust(&mut self.records, &region, ratio);
        let operation = Operation { region, ratio };
        self.operations.push(operation);
        self.undone.clear();
        self.pending = None;

        tracing::info!(ratio, affected, "selection confirmed");
        Ok(Confirmation {
            operation,
            affected,
        })
    }

    /// Reverts the most recent confirmed operation by replaying the rest of
    /// the log against the pristine extraction result. Returns the reverted
    /// operation, or `None` when the log is empty.
    pub fn undo(&mut self) -> Option<Operation> {
        let operation = self.operations.pop()?;
        self.undone.push(operation);
        self.replay();
        tracing::info!(ratio = operation.ratio, "operation undone");
        Some(operation)
    }

    /// Reapplies the most recently undone operation.
    pub fn redo(&mut self) -> Option<Confirmation> {
        let operation = self.undone.pop()?;
        let affected = adjust(&mut self.records, &operation.region, operation.ratio);
        self.operations.push(operation);
        Some(Confirmation {
            operation,
            affected,
        })
    }

    fn replay(&mut self) {
        self.records.clone_from(&self.pristine);
        for operation in &self.operations {
            adjust(&mut self.records, &operation.region, operation.ratio);
        }
    }

    /// Drains one event to completion. Returns `false` when the session
    /// should end. Successful mutations trigger a full re-render; rejected
    /// transitions surface through [`Frontend::notify`] and never touch
    /// durable state.
    pub fn handle(&mut self, event: SessionEvent, frontend: &mut impl Frontend) -> bool {
        match event {
            SessionEvent::Select(region) => {
                self.select(region);
            }
            SessionEvent::Confirm { ratio } => match self.confirm(&ratio) {
                Ok(confirmation) => {
                    frontend.notify(&format!(
                        "applied {} to {} records",
                        confirmation.operation.label(),
                        confirmation.affected
                    ));
                    frontend.render(&self.records, &self.operations);
                }
                Err(err) => frontend.notify(&err.to_string()),
            },
            SessionEvent::Undo => match self.undo() {
                Some(operation) => {
                    frontend.notify(&format!("reverted {}", operation.label()));
                    frontend.render(&self.records, &self.operations);
                }
                None => frontend.notify("nothing to undo"),
            },
            SessionEvent::Redo => match self.redo() {
                Some(confirmation) => {
                    frontend.notify(&format!("reapplied {}", confirmation.operation.label()));
                    frontend.render(&self.records, &self.operations);
                }
                None => frontend.notify("nothing to redo"),
            },
            SessionEvent::Quit => return false,
        }
        true
    }

    /// Consumes the session, yielding the final record sequence for the
    /// rewrite pass.
    pub fn into_records(self) -> Vec<MotionRecord> {
        self.records
    }
}
