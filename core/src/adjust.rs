//! The region transform: scale extrusion inside a rectangular bound.

use crate::record::{MotionRecord, Region};

/// Multiplies the extrusion of every record inside `region` by `ratio`,
/// in place, and returns how many records were touched.
///
/// Bounds are inclusive on all four edges. The transform is not idempotent:
/// each application compounds on whatever value is currently stored, never on
/// an original baseline. That compounding is the intended semantic of
/// layering corrections.
pub fn adjust(records: &mut [MotionRecord], region: &Region, ratio: f64) -> usize {
    let mut affected = 0;
    for record in records.iter_mut() {
        if region.contains(record.x, record.y) {
            record.extrusion *= ratio;
            affected += 1;
        }
    }

    tracing::debug!(?region, ratio, affected, "adjusted extrusion");
    affected
}
