//! Line drawn between steps.

use stepper_core::{Orientable, Orientation};
use yew::prelude::*;

use crate::logic::connector_classes;

/// Line drawn between two steps, or inside a step in alternative-label layout.
#[derive(Properties, PartialEq, Clone, Debug, Default)]
pub struct StepConnectorProps {
    /// Set by the stepper when the connector is placed.
    #[prop_or_default]
    pub orientation: Option<Orientation>,
    /// Rendered inside a step rather than between steps.
    #[prop_or_default]
    pub alternative_label: bool,
    /// The step that owns the connector is completed.
    #[prop_or_default]
    pub completed: bool,
    /// Classes appended after the connector classes.
    #[prop_or_default]
    pub class: Classes,
}

impl Orientable for StepConnectorProps {
    fn oriented(&self, orientation: Orientation) -> Self {
        Self {
            orientation: Some(orientation),
            ..self.clone()
        }
    }
}

/// Render the connector line.
#[function_component(StepConnector)]
pub fn step_connector(props: &StepConnectorProps) -> Html {
    let classes = connector_classes(
        props.orientation,
        props.alternative_label,
        props.completed,
        &props.class,
    );
    html! {
        <div class={classes} aria-hidden="true">
            <span class="step-connector-line" />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oriented_copy_keeps_template_fields() {
        let template = StepConnectorProps {
            class: Classes::from("dashed"),
            ..StepConnectorProps::default()
        };
        let placed = template.oriented(Orientation::Vertical);
        assert_eq!(placed.orientation, Some(Orientation::Vertical));
        assert_eq!(placed.class, template.class);
        assert_eq!(template.orientation, None);
    }
}
