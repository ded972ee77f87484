//! Non-interactive batch application of region corrections.

use crate::cli::OpSpec;
use std::path::Path;

pub fn run(input: &Path, output: &Path, ops: &[OpSpec]) -> Result<(), Box<dyn std::error::Error>> {
    super::process(input, output, |session| {
        for op in ops {
            session.select(op.region);
            // to_string round-trips f64 exactly, so the session applies the
            // same value clap parsed.
            let confirmation = session.confirm(&op.ratio.to_string())?;
            println!(
                "{} applied to {} records",
                confirmation.operation.label(),
                confirmation.affected
            );
        }
        Ok(())
    })
}
