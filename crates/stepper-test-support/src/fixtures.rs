//! Step lists and documents for tests.

use stepper_core::{StepDeclaration, StepperDocument, StepperLayout};

/// Checkout-style document exercising declarations, attributes and a custom class.
pub const CHECKOUT_DOCUMENT: &str = r#"{
    "activeStep": 1,
    "className": "checkout",
    "attributes": {"data-flow": "checkout", "aria-label": "Checkout progress"},
    "steps": [
        {"label": "Cart"},
        {"label": "Shipping"},
        {"label": "Payment"}
    ]
}"#;

/// `count` steps labelled `Step 1`, `Step 2`, ...
#[must_use]
pub fn labelled_steps(count: usize) -> Vec<StepDeclaration> {
    (1..=count)
        .map(|number| StepDeclaration::new(format!("Step {number}")))
        .collect()
}

/// Document with `count` labelled steps and the supplied layout.
#[must_use]
pub fn document(count: usize, layout: StepperLayout) -> StepperDocument {
    StepperDocument {
        layout,
        steps: Some(labelled_steps(count)),
        ..StepperDocument::default()
    }
}

/// Every layout combination worth sweeping for `active_step` values around `count`.
#[must_use]
pub fn layout_grid(count: usize) -> Vec<StepperLayout> {
    let upper = i64::try_from(count).unwrap_or(i64::MAX).saturating_add(2);
    let mut layouts = Vec::new();
    for active_step in -2..=upper {
        for linear in [true, false] {
            for alternative_label in [true, false] {
                layouts.push(StepperLayout {
                    active_step,
                    linear,
                    alternative_label,
                    ..StepperLayout::default()
                });
            }
        }
    }
    layouts
}
