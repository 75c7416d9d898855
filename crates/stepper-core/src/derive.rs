//! Step-state derivation and connector interleaving.
//!
//! # Design
//! - Pure and synchronous: every call recomputes from its inputs.
//! - Steps and connectors stay opaque behind [`StepElement`] and [`Orientable`];
//!   the deriver only borrows them and hands back new values.
//! - Declared step properties are overlaid after the computed flags, so a step
//!   can always force its own state.

use crate::model::{ControlFlags, DeclaredFlags, Orientation, StepState, StepperLayout};

/// A connector template that can be cloned with an orientation applied.
pub trait Orientable: Clone {
    /// Copy of `self` carrying `orientation`.
    #[must_use]
    fn oriented(&self, orientation: Orientation) -> Self;
}

/// A child the stepper can annotate.
pub trait StepElement {
    /// Connector type handed to the step in alternative-label layout.
    type Connector: Orientable;
    /// Value produced once flags are applied.
    type Annotated;

    /// Properties the step sets for itself; these win over computed flags.
    fn declared(&self) -> DeclaredFlags<Self::Connector>;

    /// Produce a new step carrying the merged `flags`.
    fn annotate(&self, flags: ControlFlags<Self::Connector>) -> Self::Annotated;
}

/// One entry of the derived sequence: an optional leading connector and its step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepSlot<A, C> {
    /// Standalone connector rendered immediately before `step`.
    pub connector: Option<C>,
    /// The annotated step.
    pub step: A,
}

/// State for the step at `index` given the active index and linear mode.
#[must_use]
pub fn step_state(index: usize, active_step: i64, linear: bool) -> Option<StepState> {
    let position = i64::try_from(index).unwrap_or(i64::MAX);
    if position == active_step {
        Some(StepState::Active)
    } else if linear && active_step > position {
        Some(StepState::Completed)
    } else if linear && active_step < position {
        Some(StepState::Disabled)
    } else {
        None
    }
}

/// Computed flags for one step, before declared properties are applied.
#[must_use]
pub fn control_flags<C: Clone>(
    index: usize,
    total_steps: usize,
    layout: &StepperLayout,
    template: &C,
) -> ControlFlags<C> {
    let mut flags = ControlFlags::new(index, total_steps, layout.orientation);

    match step_state(index, layout.active_step, layout.linear) {
        Some(StepState::Active) => flags.active = Some(true),
        Some(StepState::Completed) => flags.completed = Some(true),
        Some(StepState::Disabled) => flags.disabled = Some(true),
        None => {}
    }

    if index + 1 == total_steps {
        flags.last = Some(true);
    }

    if layout.alternative_label {
        flags.alternative_label = Some(true);
        flags.connector = Some(template.clone());
    }

    flags
}

/// Annotate `steps` in order and interleave connectors between them.
///
/// In the standard layout every step after the first is preceded by a copy of
/// `template` oriented to the stepper. In alternative-label layout no
/// standalone connectors are emitted; each step receives `template` as-is.
#[must_use]
pub fn derive_steps<S: StepElement>(
    steps: &[S],
    layout: &StepperLayout,
    template: &S::Connector,
) -> Vec<StepSlot<S::Annotated, S::Connector>> {
    let total_steps = steps.len();
    let between = (!layout.alternative_label).then(|| template.oriented(layout.orientation));

    let slots: Vec<_> = steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let flags = control_flags(index, total_steps, layout, template)
                .with_overrides(&step.declared());
            StepSlot {
                connector: if index > 0 { between.clone() } else { None },
                step: step.annotate(flags),
            }
        })
        .collect();

    tracing::debug!(
        total_steps,
        active_step = layout.active_step,
        linear = layout.linear,
        alternative_label = layout.alternative_label,
        orientation = %layout.orientation,
        connectors = slots.iter().filter(|slot| slot.connector.is_some()).count(),
        "derived stepper layout"
    );

    slots
}
