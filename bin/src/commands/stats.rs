//! Extraction summary without touching any output file.

use std::path::Path;

pub fn run(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(input)?;
    let records = flowtune_core::extract(&source)?;

    println!("{}: {} extrusion moves", input.display(), records.len());
    if records.is_empty() {
        return Ok(());
    }

    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    let mut total = 0.0;
    for record in &records {
        x = (x.0.min(record.x), x.1.max(record.x));
        y = (y.0.min(record.y), y.1.max(record.y));
        total += record.extrusion;
    }

    println!("  x: [{:.2}, {:.2}]", x.0, x.1);
    println!("  y: [{:.2}, {:.2}]", y.0, y.1);
    println!("  total extrusion: {total:.5}");
    Ok(())
}
