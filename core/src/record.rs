//! Data model shared by the extractor, the region transform, and the rewriter.

/// One extrusion move extracted from a single `G1` line.
///
/// `extrusion` is the only field the engine ever rewrites. `line` is the
/// 0-based source line the record came from, captured during extraction so
/// the rewriter can detect when its looser line scan has drifted (see
/// [`crate::rewrite`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionRecord {
    pub x: f64,
    pub y: f64,
    pub extrusion: f64,
    pub line: usize,
}

/// An axis-aligned rectangular bound, closed on both axes.
///
/// Immutable once built; the session replaces a pending region rather than
/// resizing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Region {
    /// Builds a region from two opposite corners in any orientation.
    ///
    /// A rectangle drag hands over raw press/release coordinates; this
    /// normalizes them so `x_min <= x_max` and `y_min <= y_max` hold.
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            x_min: a.0.min(b.0),
            x_max: a.0.max(b.0),
            y_min: a.1.min(b.1),
            y_max: a.1.max(b.1),
        }
    }

    /// Inclusive on all four bounds: a point exactly on an edge is inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

/// A confirmed `(region, ratio)` correction, recorded in session history.
///
/// The ratio is whatever finite number the operator supplied; zero and
/// negative values are deliberately not validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operation {
    pub region: Region,
    pub ratio: f64,
}

impl Operation {
    /// Short label for overlay annotation next to the region outline,
    /// e.g. `x1.50`.
    pub fn label(&self) -> String {
        format!("x{:.2}", self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_normalize_in_any_orientation() {
        let region = Region::from_corners((10.0, 2.0), (3.0, 8.0));
        assert_eq!(region.x_min, 3.0);
        assert_eq!(region.x_max, 10.0);
        assert_eq!(region.y_min, 2.0);
        assert_eq!(region.y_max, 8.0);
    }

    #[test]
    fn contains_is_inclusive_on_every_edge() {
        let region = Region::from_corners((0.0, 0.0), (5.0, 5.0));
        assert!(region.contains(0.0, 2.0));
        assert!(region.contains(5.0, 2.0));
        assert!(region.contains(2.0, 0.0));
        assert!(region.contains(2.0, 5.0));
        assert!(region.contains(0.0, 0.0));
        assert!(region.contains(5.0, 5.0));
    }

    #[test]
    fn contains_excludes_just_outside() {
        let region = Region::from_corners((0.0, 0.0), (5.0, 5.0));
        let eps = f64::EPSILON * 8.0;
        assert!(!region.contains(-eps, 2.0));
        assert!(!region.contains(5.0 + 5.0 * f64::EPSILON, 2.0));
        assert!(!region.contains(2.0, -eps));
        assert!(!region.contains(2.0, 5.0 + 5.0 * f64::EPSILON));
    }

    #[test]
    fn operation_label_formats_two_decimals() {
        let op = Operation {
            region: Region::from_corners((0.0, 0.0), (1.0, 1.0)),
            ratio: 1.5,
        };
        assert_eq!(op.label(), "x1.50");
    }
}
