pub mod apply;
pub mod edit;
pub mod stats;

/// Reads the source, runs `build` over a session of its records, rewrites,
/// and writes the output. Shared by the batch and interactive commands; the
/// output file is only created once every stage has succeeded, so a fatal
/// extraction error never leaves a partial file behind.
pub(crate) fn process(
    input: &std::path::Path,
    output: &std::path::Path,
    build: impl FnOnce(&mut flowtune::SelectionSession) -> Result<(), Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(input)?;
    let records = flowtune_core::extract(&source)?;
    tracing::info!(records = records.len(), input = %input.display(), "extraction complete");

    let mut session = flowtune::SelectionSession::new(records);
    build(&mut session)?;

    let rewritten = flowtune_core::rewrite(&source, &session.into_records());
    std::fs::write(output, rewritten)?;
    tracing::info!(output = %output.display(), "wrote corrected G-code");
    Ok(())
}
