use stepper_core::StepperDocument;
use stepper_ui::Classes;
use stepper_ui::logic::stepper_classes;

use super::render::load_document;
use crate::cli::DocumentArgs;
use crate::error::CliResult;

/// Container class followed by one `name=value` line per forwarded attribute.
pub(crate) fn container_summary(document: &StepperDocument) -> String {
    let extra = document
        .class_name
        .clone()
        .map_or_else(Classes::new, Classes::from);
    let classes = stepper_classes(&document.layout, &extra).to_string();
    let mut lines = vec![format!("class={classes}")];
    lines.extend(
        document
            .attributes
            .iter()
            .map(|(name, value)| format!("{name}={value}")),
    );
    lines.join("\n")
}

pub(crate) fn handle_classes(args: &DocumentArgs) -> CliResult<()> {
    let document = load_document(args)?;
    println!("{}", container_summary(&document));
    Ok(())
}
