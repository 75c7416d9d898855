//! Assertions over derived stepper layouts.

use stepper_core::{AnnotatedStep, ConnectorSpec, StepSlot, StepperLayout};

/// Assert the layout invariants that hold for any undeclared step list.
///
/// # Panics
/// Panics when any invariant is violated.
pub fn assert_layout_invariants(
    slots: &[StepSlot<AnnotatedStep, ConnectorSpec>],
    layout: &StepperLayout,
) {
    let total = slots.len();
    let mut active = 0;

    for (position, slot) in slots.iter().enumerate() {
        let flags = &slot.step.flags;
        assert_eq!(flags.index, position, "index mismatch at {position}");
        assert_eq!(flags.total_steps, total, "total mismatch at {position}");
        assert_eq!(flags.orientation, layout.orientation);

        let trio = [flags.is_active(), flags.is_completed(), flags.is_disabled()];
        assert!(
            trio.iter().filter(|set| **set).count() <= 1,
            "more than one state at {position}"
        );
        if !layout.linear {
            assert!(flags.completed.is_none() && flags.disabled.is_none());
        }
        if flags.is_active() {
            active += 1;
        }

        assert_eq!(flags.is_last(), position + 1 == total, "last flag at {position}");

        if layout.alternative_label {
            assert!(slot.connector.is_none(), "standalone connector at {position}");
            assert_eq!(flags.alternative_label, Some(true));
            assert!(flags.connector.is_some());
        } else {
            assert_eq!(slot.connector.is_some(), position > 0, "connector at {position}");
            assert!(flags.connector.is_none());
        }
    }

    assert!(active <= 1, "{active} active steps");
}

/// Number of standalone connectors in the derived sequence.
#[must_use]
pub fn connector_count(slots: &[StepSlot<AnnotatedStep, ConnectorSpec>]) -> usize {
    slots.iter().filter(|slot| slot.connector.is_some()).count()
}
