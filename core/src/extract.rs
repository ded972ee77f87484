//! First pass over the source: structured motion records out of raw text.

use crate::{
    error::{Error, Result},
    record::MotionRecord,
};

/// Command tag identifying a deposition-bearing move. Matched as a substring
/// of the line, not as a delimited token, so `G10` and commented-out moves
/// also qualify. The rewriter uses the same rule; keep them identical.
pub const MOVE_TAG: &str = "G1";

/// Scans `source` once and returns motion records in source order.
///
/// A `G1` line is tokenized on whitespace and scanned for `X`, `Y`, and `E`
/// prefixed tokens; a later token with the same marker overwrites an earlier
/// one. Only lines where all three markers are present and parse produce a
/// record; a tagged line missing one of them is skipped silently, and the
/// skipped line still occupies no slot in the output sequence.
///
/// Numeric parsing is eager: a marker token whose remainder is not a valid
/// float aborts the whole extraction, even when the line would have been
/// skipped afterwards for a missing marker.
pub fn extract(source: &str) -> Result<Vec<MotionRecord>> {
    let mut records = Vec::new();

    for (line_no, line) in source.lines().enumerate() {
        if !line.contains(MOVE_TAG) {
            continue;
        }

        let mut x = None;
        let mut y = None;
        let mut e = None;
        for token in line.split_whitespace() {
            if let Some(rest) = token.strip_prefix('X') {
                x = Some(parse_float(rest, line_no, token)?);
            } else if let Some(rest) = token.strip_prefix('Y') {
                y = Some(parse_float(rest, line_no, token)?);
            } else if let Some(rest) = token.strip_prefix('E') {
                e = Some(parse_float(rest, line_no, token)?);
            }
        }

        if let (Some(x), Some(y), Some(extrusion)) = (x, y, e) {
            records.push(MotionRecord {
                x,
                y,
                extrusion,
                line: line_no,
            });
        }
    }

    tracing::debug!(records = records.len(), "extracted motion records");
    Ok(records)
}

fn parse_float(rest: &str, line: usize, token: &str) -> Result<f64> {
    rest.parse().map_err(|_| Error::ParseFloat {
        line,
        token: token.to_owned(),
    })
}
