//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use serde_json::{Value, json};
use stepper_core::{AnnotatedStep, ConnectorSpec, ControlFlags, StepSlot, StepState};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

pub(crate) fn format_slots(
    slots: &[StepSlot<AnnotatedStep, ConnectorSpec>],
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            let mut entries = Vec::with_capacity(slots.len() * 2);
            for slot in slots {
                if let Some(connector) = &slot.connector {
                    entries.push(connector_entry(connector));
                }
                let mut step = serde_json::to_value(&slot.step)
                    .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
                if let Value::Object(map) = &mut step {
                    map.insert("kind".into(), Value::from("step"));
                }
                entries.push(step);
            }
            serde_json::to_string_pretty(&entries)
                .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
        }
        OutputFormat::Table => {
            let mut lines = vec![format!("{:<4} {:<10} {:<5} LABEL", "IDX", "STATE", "LAST")];
            for slot in slots {
                if let Some(connector) = &slot.connector {
                    lines.push(format!("{:<4} {}", "", connector_label(connector)));
                }
                let flags = &slot.step.flags;
                lines.push(format!(
                    "{:<4} {:<10} {:<5} {}",
                    flags.index,
                    state_to_str(flags),
                    if flags.is_last() { "yes" } else { "" },
                    slot.step.label
                ));
            }
            Ok(lines.join("\n").trim_end().to_string())
        }
    }
}

fn connector_entry(connector: &ConnectorSpec) -> Value {
    json!({
        "kind": "connector",
        "variant": connector.variant,
        "orientation": connector.orientation,
    })
}

fn connector_label(connector: &ConnectorSpec) -> String {
    connector.orientation.map_or_else(
        || format!("~ {}", connector.variant),
        |orientation| format!("~ {} ({orientation})", connector.variant),
    )
}

fn state_to_str<C>(flags: &ControlFlags<C>) -> &'static str {
    match flags.state() {
        Some(StepState::Active) => "active",
        Some(StepState::Completed) => "completed",
        Some(StepState::Disabled) => "disabled",
        None => "-",
    }
}
