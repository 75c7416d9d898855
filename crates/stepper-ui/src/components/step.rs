//! A single step and its flag plumbing.

use stepper_core::{ControlFlags, DeclaredFlags, Orientation, StepElement};
use yew::prelude::*;
use yew::virtual_dom::VChild;

use super::connector::{StepConnector, StepConnectorProps};
use crate::logic::{step_classes, step_connector};

/// A single step. Every flag is optional: the enclosing [`Stepper`](super::Stepper)
/// fills in whatever the step leaves unset.
#[derive(Properties, PartialEq, Clone, Default)]
pub struct StepProps {
    /// Text shown next to (or under) the step indicator.
    #[prop_or_default]
    pub label: Option<AttrValue>,
    /// Extra content rendered after the label.
    #[prop_or_default]
    pub children: Children,
    /// Classes appended after the step classes.
    #[prop_or_default]
    pub class: Classes,
    /// Position among siblings.
    #[prop_or_default]
    pub index: Option<usize>,
    /// Flow direction of the stepper.
    #[prop_or_default]
    pub orientation: Option<Orientation>,
    /// Number of siblings.
    #[prop_or_default]
    pub total_steps: Option<usize>,
    /// Step is the current one.
    #[prop_or_default]
    pub active: Option<bool>,
    /// Step precedes the current one.
    #[prop_or_default]
    pub completed: Option<bool>,
    /// Step follows the current one.
    #[prop_or_default]
    pub disabled: Option<bool>,
    /// Step is the final one.
    #[prop_or_default]
    pub last: Option<bool>,
    /// Label renders under the indicator.
    #[prop_or_default]
    pub alternative_label: Option<bool>,
    /// Connector drawn inside the step in alternative-label layout.
    #[prop_or_default]
    pub connector: Option<StepConnectorProps>,
}

impl StepProps {
    /// Flags currently carried by the step, with positional defaults for unset keys.
    #[must_use]
    pub fn flags(&self) -> ControlFlags<StepConnectorProps> {
        ControlFlags::new(
            self.index.unwrap_or_default(),
            self.total_steps.unwrap_or(1),
            self.orientation.unwrap_or_default(),
        )
        .with_overrides(&self.declared())
    }
}

impl StepElement for StepProps {
    type Connector = StepConnectorProps;
    type Annotated = Self;

    fn declared(&self) -> DeclaredFlags<StepConnectorProps> {
        DeclaredFlags {
            index: self.index,
            orientation: self.orientation,
            total_steps: self.total_steps,
            active: self.active,
            completed: self.completed,
            disabled: self.disabled,
            last: self.last,
            alternative_label: self.alternative_label,
            connector: self.connector.clone(),
        }
    }

    fn annotate(&self, flags: ControlFlags<StepConnectorProps>) -> Self {
        Self {
            index: Some(flags.index),
            orientation: Some(flags.orientation),
            total_steps: Some(flags.total_steps),
            active: flags.active,
            completed: flags.completed,
            disabled: flags.disabled,
            last: flags.last,
            alternative_label: flags.alternative_label,
            connector: flags.connector,
            ..self.clone()
        }
    }
}

/// Render a step indicator with its label.
#[function_component(Step)]
pub fn step(props: &StepProps) -> Html {
    let flags = props.flags();
    let classes = step_classes(&flags, &props.class);

    let connector = step_connector(&flags)
        .map(|placed| Html::from(VChild::<StepConnector>::new(placed, None)));

    html! {
        <div
            class={classes}
            data-step-index={flags.index.to_string()}
            aria-current={flags.is_active().then_some("step")}
            aria-disabled={flags.is_disabled().then_some("true")}
        >
            {connector.unwrap_or_default()}
            <span class="step-label">
                <span class="step-icon">{(flags.index + 1).to_string()}</span>
                {props.label.clone().unwrap_or_default()}
            </span>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepper_core::{StepState, StepperLayout, derive_steps};

    fn labelled(label: &'static str) -> StepProps {
        StepProps {
            label: Some(AttrValue::from(label)),
            ..StepProps::default()
        }
    }

    #[test]
    fn annotate_fills_every_flag_and_keeps_label() {
        let steps = vec![labelled("Cart"), labelled("Shipping"), labelled("Payment")];
        let layout = StepperLayout {
            active_step: 1,
            ..StepperLayout::default()
        };
        let slots = derive_steps(&steps, &layout, &StepConnectorProps::default());

        let states: Vec<_> = slots.iter().map(|slot| slot.step.flags().state()).collect();
        assert_eq!(
            states,
            vec![
                Some(StepState::Completed),
                Some(StepState::Active),
                Some(StepState::Disabled)
            ]
        );
        assert_eq!(slots[2].step.label.as_deref(), Some("Payment"));
        assert_eq!(slots[2].step.total_steps, Some(3));
        assert_eq!(slots[2].step.last, Some(true));
        assert_eq!(
            slots[1].connector.as_ref().and_then(|connector| connector.orientation),
            Some(Orientation::Horizontal)
        );
    }

    #[test]
    fn declared_props_override_stepper() {
        let steps = vec![
            StepProps {
                completed: Some(false),
                ..labelled("Cart")
            },
            labelled("Shipping"),
        ];
        let layout = StepperLayout {
            active_step: 1,
            ..StepperLayout::default()
        };
        let slots = derive_steps(&steps, &layout, &StepConnectorProps::default());
        assert_eq!(slots[0].step.completed, Some(false));
        assert_eq!(slots[0].step.flags().state(), None);
    }

    #[test]
    fn alternative_label_hands_template_to_steps() {
        let template = StepConnectorProps {
            class: Classes::from("dashed"),
            ..StepConnectorProps::default()
        };
        let layout = StepperLayout {
            alternative_label: true,
            ..StepperLayout::default()
        };
        let steps = vec![labelled("One"), labelled("Two")];
        let slots = derive_steps(&steps, &layout, &template);
        assert!(slots.iter().all(|slot| slot.connector.is_none()));
        assert_eq!(slots[1].step.connector.as_ref(), Some(&template));
        assert_eq!(slots[1].step.alternative_label, Some(true));
    }

    #[test]
    fn bare_step_defaults_to_single_position() {
        let flags = StepProps::default().flags();
        assert_eq!(flags.index, 0);
        assert_eq!(flags.total_steps, 1);
        assert_eq!(flags.orientation, Orientation::Horizontal);
        assert_eq!(flags.state(), None);
    }
}
