//! The parse / transform / rewrite engine for Flowtune, minus any interface.
//!
//! A G-code file goes through three stages:
//!
//! 1. [`extract::extract`] scans the source once and produces an ordered
//!    [`Vec<MotionRecord>`], one record per `G1` line carrying X, Y, and E.
//! 2. [`adjust::adjust`] multiplies the extrusion of every record inside an
//!    axis-aligned [`Region`] by an operator-chosen ratio. Applied once per
//!    confirmed selection, compounding across selections.
//! 3. [`rewrite::rewrite`] walks the source a second time and substitutes the
//!    (possibly multiply-corrected) extrusion values back into their lines,
//!    leaving everything else untouched.
//!
//! The record sequence is the sole shared state between stages; records keep
//! their source line number so the rewriter can detect when its own line scan
//! drifts from the extractor's (see [`rewrite`] for the inherited hazard).

pub mod adjust;
pub mod error;
pub mod extract;
pub mod record;
pub mod rewrite;

pub use adjust::adjust;
pub use error::{Error, Result};
pub use extract::extract;
pub use record::{MotionRecord, Operation, Region};
pub use rewrite::rewrite;
