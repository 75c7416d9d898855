//! Pure render helpers extracted from components for non-wasm testing.

use stepper_core::{ControlFlags, Orientable, Orientation, StepSlot, StepperLayout};
use yew::virtual_dom::AttrValue;
use yew::{Classes, classes};

use crate::components::StepConnectorProps;

/// Highest elevation with its own shadow tier.
pub const MAX_ELEVATION: u8 = 8;

/// The stepper renders on a square surface.
pub const STEPPER_SQUARE: bool = true;

/// The stepper surface is flat.
pub const STEPPER_ELEVATION: u8 = 0;

/// Prefix an orientation token, e.g. `stepper-horizontal`.
#[must_use]
pub fn orientation_class(prefix: &str, orientation: Orientation) -> String {
    format!("{prefix}-{}", orientation.as_str())
}

/// Container class for a stepper.
///
/// The layout classes are only emitted outside alternative-label mode, where
/// steps flow beside each other and need the flex direction.
#[must_use]
pub fn stepper_classes(layout: &StepperLayout, extra: &Classes) -> Classes {
    let mut classes = classes!("stepper", extra.clone());
    if !layout.alternative_label {
        classes.push("stepper-non-alternative-label");
        classes.push(orientation_class("stepper", layout.orientation));
    }
    classes
}

/// Shadow class for a surface elevation; `None` for flat surfaces.
#[must_use]
pub const fn shadow_class(elevation: u8) -> Option<&'static str> {
    match elevation {
        0 => None,
        1 => Some("shadow-sm"),
        2 => Some("shadow"),
        3 | 4 => Some("shadow-md"),
        5..=MAX_ELEVATION => Some("shadow-lg"),
        _ => Some("shadow-xl"),
    }
}

/// Surface class: base, rounding unless square, elevation shadow, then caller classes.
#[must_use]
pub fn paper_classes(square: bool, elevation: u8, extra: &Classes) -> Classes {
    classes!(
        "paper",
        (!square).then_some("rounded-box"),
        shadow_class(elevation),
        extra.clone()
    )
}

/// Full class of the surface a stepper renders into.
#[must_use]
pub fn stepper_surface_classes(layout: &StepperLayout, extra: &Classes) -> Classes {
    paper_classes(
        STEPPER_SQUARE,
        STEPPER_ELEVATION,
        &stepper_classes(layout, extra),
    )
}

/// Attributes applied to a surface element: `id`, then `class`, then the
/// passthrough pairs in the order given.
#[must_use]
pub fn paper_attributes(
    id: Option<&AttrValue>,
    classes: &Classes,
    attributes: &[(&'static str, AttrValue)],
) -> Vec<(&'static str, AttrValue)> {
    let mut applied = Vec::with_capacity(attributes.len() + 2);
    if let Some(id) = id {
        applied.push(("id", id.clone()));
    }
    applied.push(("class", AttrValue::from(classes.to_string())));
    applied.extend(attributes.iter().cloned());
    applied
}

/// One rendered child of the stepper surface, in document order.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotNode<A, C> {
    /// Standalone connector placed before the step with the same index.
    Connector {
        /// Stable key for the connector node.
        key: String,
        /// Connector props.
        props: C,
    },
    /// An annotated step.
    Step {
        /// Stable key for the step node.
        key: String,
        /// Step props.
        props: A,
    },
}

/// Flatten derived slots into keyed nodes: each connector directly before its step.
#[must_use]
pub fn slot_nodes<A, C>(slots: Vec<StepSlot<A, C>>) -> Vec<SlotNode<A, C>> {
    let mut nodes = Vec::with_capacity(slots.len() * 2);
    for (index, slot) in slots.into_iter().enumerate() {
        if let Some(props) = slot.connector {
            nodes.push(SlotNode::Connector {
                key: format!("connector-{index}"),
                props,
            });
        }
        nodes.push(SlotNode::Step {
            key: format!("step-{index}"),
            props: slot.step,
        });
    }
    nodes
}

/// Connector a step draws itself in alternative-label layout.
///
/// Only steps after the first draw one; the template is oriented to the step
/// and marked completed when the step is.
#[must_use]
pub fn step_connector(flags: &ControlFlags<StepConnectorProps>) -> Option<StepConnectorProps> {
    if flags.alternative_label != Some(true) || flags.index == 0 {
        return None;
    }
    flags.connector.as_ref().map(|template| StepConnectorProps {
        alternative_label: true,
        completed: flags.is_completed(),
        ..template.oriented(flags.orientation)
    })
}

/// Step class derived from its merged flags.
#[must_use]
pub fn step_classes<C>(flags: &ControlFlags<C>, extra: &Classes) -> Classes {
    classes!(
        "step",
        orientation_class("step", flags.orientation),
        flags.is_active().then_some("step-active"),
        flags.is_completed().then_some("step-completed"),
        flags.is_disabled().then_some("step-disabled"),
        flags.is_last().then_some("step-last"),
        (flags.alternative_label == Some(true)).then_some("step-alternative-label"),
        extra.clone()
    )
}

/// Connector class for the given orientation and neighbouring step state.
#[must_use]
pub fn connector_classes(
    orientation: Option<Orientation>,
    alternative_label: bool,
    completed: bool,
    extra: &Classes,
) -> Classes {
    classes!(
        "step-connector",
        orientation.map(|orientation| orientation_class("step-connector", orientation)),
        alternative_label.then_some("step-connector-alternative-label"),
        completed.then_some("step-connector-completed"),
        extra.clone()
    )
}
