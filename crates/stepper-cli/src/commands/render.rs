use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use stepper_core::StepperDocument;

use crate::cli::{DocumentArgs, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::format_slots;

/// Load the document named by `args` and apply the command-line overrides.
pub(crate) fn load_document(args: &DocumentArgs) -> CliResult<StepperDocument> {
    let payload = read_payload(&args.document)?;
    let mut document = StepperDocument::from_json(&payload)?;
    args.overrides.apply(&mut document.layout);
    tracing::debug!(
        path = %args.document.display(),
        steps = document.steps.as_ref().map_or(0, Vec::len),
        "loaded stepper document"
    );
    Ok(document)
}

fn read_payload(path: &Path) -> CliResult<String> {
    if path.as_os_str() == "-" {
        let mut payload = String::new();
        io::stdin()
            .read_to_string(&mut payload)
            .context("failed to read stepper document from stdin")
            .map_err(CliError::failure)?;
        return Ok(payload);
    }
    fs::read_to_string(path)
        .with_context(|| format!("failed to read stepper document {}", path.display()))
        .map_err(CliError::failure)
}

pub(crate) fn handle_render(args: &DocumentArgs, format: OutputFormat) -> CliResult<()> {
    let document = load_document(args)?;
    let slots = document.derive()?;
    println!("{}", format_slots(&slots, format)?);
    Ok(())
}
