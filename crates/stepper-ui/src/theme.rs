//! Spacing tokens and the stepper stylesheet for hosts without a utility CSS framework.

/// Base spacing unit in pixels.
pub const SPACING_UNIT_PX: u16 = 8;

/// Multiples of [`SPACING_UNIT_PX`] used for stepper padding.
pub const STEPPER_PADDING_UNITS: u16 = 3;

/// Padding applied around the step sequence.
#[must_use]
pub const fn stepper_padding_px() -> u16 {
    SPACING_UNIT_PX * STEPPER_PADDING_UNITS
}

/// Class name and declarations for each stepper rule.
pub const STEPPER_RULES: [(&str, &[(&str, &str)]); 4] = [
    ("stepper", &[("display", "flex")]),
    (
        "stepper-non-alternative-label",
        &[("align-content", "center"), ("justify-content", "space-between")],
    ),
    (
        "stepper-horizontal",
        &[("flex-direction", "row"), ("align-items", "center")],
    ),
    (
        "stepper-vertical",
        &[("flex-direction", "column"), ("align-items", "stretch")],
    ),
];

/// Render the stepper rules as CSS.
#[must_use]
pub fn stylesheet() -> String {
    STEPPER_RULES
        .iter()
        .map(|(class, declarations)| {
            let mut body: String = declarations
                .iter()
                .map(|(property, value)| format!(" {property}: {value};"))
                .collect();
            if *class == "stepper" {
                body.push_str(&format!(" padding: {}px;", stepper_padding_px()));
            }
            format!(".{class} {{{body} }}\n")
        })
        .collect()
}
