use stepper_core::{
    DeclaredFlags, Orientation, StepDeclaration, StepState, StepperDocument, StepperLayout,
};
use stepper_test_support::assert::{assert_layout_invariants, connector_count};
use stepper_test_support::fixtures::{document, layout_grid};

fn linear_at(active_step: i64) -> StepperLayout {
    StepperLayout {
        active_step,
        ..StepperLayout::default()
    }
}

#[test]
fn invariants_hold_across_layout_grid() -> anyhow::Result<()> {
    for count in 0..6 {
        for layout in layout_grid(count) {
            let slots = document(count, layout).derive()?;
            assert_eq!(slots.len(), count);
            assert_layout_invariants(&slots, &layout);
            let expected = if layout.alternative_label {
                0
            } else {
                count.saturating_sub(1)
            };
            assert_eq!(connector_count(&slots), expected);
        }
    }
    Ok(())
}

#[test]
fn linear_middle_step() -> anyhow::Result<()> {
    let slots = document(3, linear_at(1)).derive()?;
    let states: Vec<_> = slots.iter().map(|slot| slot.step.flags.state()).collect();
    assert_eq!(
        states,
        vec![
            Some(StepState::Completed),
            Some(StepState::Active),
            Some(StepState::Disabled)
        ]
    );
    assert!(slots[0].connector.is_none());
    assert!(slots[1].connector.is_some());
    assert!(slots[2].connector.is_some());
    Ok(())
}

#[test]
fn active_step_past_the_end_completes_everything() -> anyhow::Result<()> {
    let slots = document(3, linear_at(5)).derive()?;
    assert!(slots.iter().all(|slot| slot.step.flags.is_completed()));
    assert!(slots.iter().all(|slot| !slot.step.flags.is_active()));
    Ok(())
}

#[test]
fn negative_active_step_disables_everything() -> anyhow::Result<()> {
    let slots = document(3, linear_at(-1)).derive()?;
    assert!(slots.iter().all(|slot| slot.step.flags.is_disabled()));
    Ok(())
}

#[test]
fn non_linear_only_marks_active() -> anyhow::Result<()> {
    let layout = StepperLayout {
        linear: false,
        ..StepperLayout::default()
    };
    let slots = document(2, layout).derive()?;
    assert_eq!(slots[0].step.flags.state(), Some(StepState::Active));
    let second = &slots[1].step.flags;
    assert_eq!(
        (second.active, second.completed, second.disabled),
        (None, None, None)
    );
    assert!(second.is_last());
    Ok(())
}

#[test]
fn non_linear_out_of_range_sets_no_state() -> anyhow::Result<()> {
    let layout = StepperLayout {
        active_step: 9,
        linear: false,
        ..StepperLayout::default()
    };
    let slots = document(3, layout).derive()?;
    assert!(slots.iter().all(|slot| slot.step.flags.state().is_none()));
    Ok(())
}

#[test]
fn alternative_label_attaches_connector_to_every_step() -> anyhow::Result<()> {
    let layout = StepperLayout {
        alternative_label: true,
        ..StepperLayout::default()
    };
    let stepper = document(4, layout);
    let slots = stepper.derive()?;
    assert_eq!(connector_count(&slots), 0);
    for slot in &slots {
        assert_eq!(slot.step.flags.alternative_label, Some(true));
        assert_eq!(slot.step.flags.connector.as_ref(), Some(&stepper.connector));
    }
    assert!(slots[3].step.flags.is_last());
    Ok(())
}

#[test]
fn empty_document_derives_nothing() -> anyhow::Result<()> {
    assert!(document(0, StepperLayout::default()).derive()?.is_empty());
    Ok(())
}

#[test]
fn vertical_connectors_are_oriented() -> anyhow::Result<()> {
    let layout = StepperLayout {
        orientation: Orientation::Vertical,
        ..StepperLayout::default()
    };
    let slots = document(3, layout).derive()?;
    for slot in slots.iter().skip(1) {
        let connector = slot.connector.as_ref().map(|connector| connector.orientation);
        assert_eq!(connector, Some(Some(Orientation::Vertical)));
    }
    Ok(())
}

#[test]
fn declared_completed_false_survives() -> anyhow::Result<()> {
    let mut stepper = document(2, linear_at(1));
    if let Some(steps) = stepper.steps.as_mut() {
        steps[0] = StepDeclaration {
            label: "Cart".into(),
            declared: DeclaredFlags {
                completed: Some(false),
                ..DeclaredFlags::default()
            },
        };
    }
    let slots = stepper.derive()?;
    assert_eq!(slots[0].step.flags.completed, Some(false));
    assert_eq!(slots[0].step.label, "Cart");
    Ok(())
}

#[test]
fn derivation_is_idempotent() -> anyhow::Result<()> {
    let stepper = StepperDocument::from_json(stepper_test_support::fixtures::CHECKOUT_DOCUMENT)?;
    assert_eq!(stepper.derive()?, stepper.derive()?);
    Ok(())
}
