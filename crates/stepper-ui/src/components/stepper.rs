//! The stepper container.

use stepper_core::{Orientation, StepperLayout, derive_steps};
use yew::prelude::*;
use yew::virtual_dom::{Key, VChild};

use super::connector::{StepConnector, StepConnectorProps};
use super::paper::Paper;
use super::step::{Step, StepProps};
use crate::logic::{STEPPER_ELEVATION, STEPPER_SQUARE, SlotNode, slot_nodes, stepper_classes};

/// Stepper configuration. Children are required.
#[derive(Properties, PartialEq)]
pub struct StepperProps {
    /// The steps, in order.
    pub children: ChildrenWithProps<Step>,
    /// Zero-based active step; values outside the children are allowed.
    #[prop_or(0)]
    pub active_step: i64,
    /// Place labels under the indicators and hand the connector to each step.
    #[prop_or_default]
    pub alternative_label: bool,
    /// Derive completed/disabled from the active step.
    #[prop_or(true)]
    pub linear: bool,
    /// Flow direction.
    #[prop_or_default]
    pub orientation: Orientation,
    /// Connector template.
    #[prop_or_default]
    pub connector: StepConnectorProps,
    /// Classes appended to the container class.
    #[prop_or_default]
    pub class: Classes,
    /// Container id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Attributes forwarded verbatim to the container.
    #[prop_or_default]
    pub attributes: Vec<(&'static str, AttrValue)>,
}

impl StepperProps {
    /// Layout settings carried by these props.
    #[must_use]
    pub const fn layout(&self) -> StepperLayout {
        StepperLayout {
            active_step: self.active_step,
            alternative_label: self.alternative_label,
            linear: self.linear,
            orientation: self.orientation,
        }
    }
}

/// Render the annotated steps, with connectors between them, inside a flat square [`Paper`].
#[function_component(Stepper)]
pub fn stepper(props: &StepperProps) -> Html {
    let layout = props.layout();
    let steps: Vec<StepProps> = props
        .children
        .iter()
        .map(|child| (*child.props).clone())
        .collect();

    let content: Vec<Html> = slot_nodes(derive_steps(&steps, &layout, &props.connector))
        .into_iter()
        .map(|node| match node {
            SlotNode::Connector { key, props: connector } => {
                VChild::<StepConnector>::new(connector, Some(Key::from(key))).into()
            }
            SlotNode::Step { key, props: step } => {
                VChild::<Step>::new(step, Some(Key::from(key))).into()
            }
        })
        .collect();

    html! {
        <Paper
            square={STEPPER_SQUARE}
            elevation={STEPPER_ELEVATION}
            class={stepper_classes(&layout, &props.class)}
            id={props.id.clone()}
            attributes={props.attributes.clone()}
        >
            { for content }
        </Paper>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{step_connector, stepper_surface_classes};
    use stepper_core::StepState;

    fn labelled(label: &'static str) -> StepProps {
        StepProps {
            label: Some(AttrValue::from(label)),
            ..StepProps::default()
        }
    }

    fn nodes(layout: &StepperLayout) -> Vec<SlotNode<StepProps, StepConnectorProps>> {
        let steps = vec![labelled("Cart"), labelled("Shipping"), labelled("Payment")];
        slot_nodes(derive_steps(&steps, layout, &StepConnectorProps::default()))
    }

    #[test]
    fn standard_layout_interleaves_oriented_connectors() {
        let layout = StepperLayout {
            active_step: 1,
            ..StepperLayout::default()
        };
        let rendered: Vec<_> = nodes(&layout)
            .into_iter()
            .map(|node| match node {
                SlotNode::Connector { key, props } => (key, props.orientation, None),
                SlotNode::Step { key, props } => (key, None, props.flags().state()),
            })
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("step-0".to_string(), None, Some(StepState::Completed)),
                ("connector-1".to_string(), Some(Orientation::Horizontal), None),
                ("step-1".to_string(), None, Some(StepState::Active)),
                ("connector-2".to_string(), Some(Orientation::Horizontal), None),
                ("step-2".to_string(), None, Some(StepState::Disabled)),
            ]
        );
        assert_eq!(
            stepper_surface_classes(&layout, &Classes::from("extra")).to_string(),
            "paper stepper extra stepper-non-alternative-label stepper-horizontal"
        );
    }

    #[test]
    fn alternative_label_connectors_live_inside_later_steps() {
        let layout = StepperLayout {
            alternative_label: true,
            ..StepperLayout::default()
        };
        let drawn: Vec<_> = nodes(&layout)
            .into_iter()
            .map(|node| match node {
                SlotNode::Connector { .. } => panic!("no standalone connectors expected"),
                SlotNode::Step { props, .. } => step_connector(&props.flags()).is_some(),
            })
            .collect();
        assert_eq!(drawn, vec![false, true, true]);
    }

    #[test]
    fn props_map_onto_layout() {
        let props = StepperProps {
            children: ChildrenWithProps::new(Vec::new()),
            active_step: 3,
            alternative_label: true,
            linear: false,
            orientation: Orientation::Vertical,
            connector: StepConnectorProps::default(),
            class: Classes::new(),
            id: None,
            attributes: Vec::new(),
        };
        assert_eq!(
            props.layout(),
            StepperLayout {
                active_step: 3,
                alternative_label: true,
                linear: false,
                orientation: Orientation::Vertical,
            }
        );
    }
}
