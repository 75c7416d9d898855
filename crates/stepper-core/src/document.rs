//! Serde-loadable stepper descriptions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::derive::{Orientable, StepElement, StepSlot, derive_steps};
use crate::error::{StepperError, StepperResult};
use crate::model::{ControlFlags, DeclaredFlags, Orientation, StepperLayout};

const DEFAULT_CONNECTOR_VARIANT: &str = "line";

fn default_variant() -> String {
    DEFAULT_CONNECTOR_VARIANT.to_string()
}

/// Connector template described by a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorSpec {
    /// Visual variant name, `line` unless overridden.
    #[serde(default = "default_variant")]
    pub variant: String,
    /// Orientation once placed; templates normally leave this unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl Default for ConnectorSpec {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            orientation: None,
        }
    }
}

impl Orientable for ConnectorSpec {
    fn oriented(&self, orientation: Orientation) -> Self {
        Self {
            orientation: Some(orientation),
            ..self.clone()
        }
    }
}

/// A step as written in a document: a label plus anything it declares for itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDeclaration {
    /// Display label.
    pub label: String,
    /// Properties that override the computed flags.
    #[serde(flatten)]
    pub declared: DeclaredFlags<ConnectorSpec>,
}

impl StepDeclaration {
    /// Step with a label and nothing declared.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            declared: DeclaredFlags::default(),
        }
    }
}

/// A declared step after derivation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnnotatedStep {
    /// Display label.
    pub label: String,
    /// Merged control flags.
    #[serde(flatten)]
    pub flags: ControlFlags<ConnectorSpec>,
}

impl StepElement for StepDeclaration {
    type Connector = ConnectorSpec;
    type Annotated = AnnotatedStep;

    fn declared(&self) -> DeclaredFlags<ConnectorSpec> {
        self.declared.clone()
    }

    fn annotate(&self, flags: ControlFlags<ConnectorSpec>) -> AnnotatedStep {
        AnnotatedStep {
            label: self.label.clone(),
            flags,
        }
    }
}

/// Full stepper description: layout, container attributes and steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepperDocument {
    /// Layout settings; missing keys take their defaults.
    #[serde(flatten)]
    pub layout: StepperLayout,
    /// Extra class appended to the container class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Connector template.
    #[serde(default)]
    pub connector: ConnectorSpec,
    /// Attributes forwarded to the container surface.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    /// The steps. Required; `None` means the document omitted them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<StepDeclaration>>,
}

impl StepperDocument {
    /// Parse a JSON document.
    ///
    /// # Errors
    /// Returns [`StepperError::InvalidDocument`] when the payload is not a valid document.
    pub fn from_json(payload: &str) -> StepperResult<Self> {
        serde_json::from_str(payload).map_err(|source| StepperError::InvalidDocument { source })
    }

    /// Declared steps.
    ///
    /// # Errors
    /// Returns [`StepperError::MissingSteps`] when the document has no `steps` key.
    pub fn steps(&self) -> StepperResult<&[StepDeclaration]> {
        self.steps.as_deref().ok_or(StepperError::MissingSteps)
    }

    /// Run the deriver over the declared steps.
    ///
    /// # Errors
    /// Returns [`StepperError::MissingSteps`] when the document has no `steps` key.
    pub fn derive(&self) -> StepperResult<Vec<StepSlot<AnnotatedStep, ConnectorSpec>>> {
        Ok(derive_steps(self.steps()?, &self.layout, &self.connector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_defaults_fill_missing_layout_keys() -> StepperResult<()> {
        let document = StepperDocument::from_json(r#"{"steps": [{"label": "Account"}]}"#)?;
        assert_eq!(document.layout, StepperLayout::default());
        assert_eq!(document.connector.variant, "line");
        assert!(document.attributes.is_empty());
        assert_eq!(document.steps()?.len(), 1);
        Ok(())
    }

    #[test]
    fn document_reads_camel_case_layout_and_declarations() -> StepperResult<()> {
        let document = StepperDocument::from_json(
            r#"{
                "activeStep": 2,
                "linear": false,
                "orientation": "vertical",
                "alternativeLabel": true,
                "className": "checkout",
                "attributes": {"data-flow": "checkout"},
                "connector": {"variant": "dashed"},
                "steps": [
                    {"label": "Cart", "completed": true},
                    {"label": "Shipping"},
                    {"label": "Payment", "active": false}
                ]
            }"#,
        )?;
        assert_eq!(document.layout.active_step, 2);
        assert!(!document.layout.linear);
        assert!(document.layout.alternative_label);
        assert_eq!(document.layout.orientation, Orientation::Vertical);
        assert_eq!(document.class_name.as_deref(), Some("checkout"));
        assert_eq!(document.connector.variant, "dashed");

        let steps = document.steps()?;
        assert_eq!(steps[0].declared.completed, Some(true));
        assert!(steps[1].declared.is_empty());
        assert_eq!(steps[2].declared.active, Some(false));
        Ok(())
    }

    #[test]
    fn capitalised_orientation_is_accepted() -> StepperResult<()> {
        let document = StepperDocument::from_json(r#"{"orientation": "Vertical", "steps": []}"#)?;
        assert_eq!(document.layout.orientation, Orientation::Vertical);
        Ok(())
    }

    #[test]
    fn missing_steps_fail_fast() -> StepperResult<()> {
        let document = StepperDocument::from_json(r#"{"activeStep": 1}"#)?;
        assert!(matches!(document.steps(), Err(StepperError::MissingSteps)));
        assert!(matches!(document.derive(), Err(StepperError::MissingSteps)));
        Ok(())
    }

    #[test]
    fn empty_steps_are_valid() -> StepperResult<()> {
        let document = StepperDocument::from_json(r#"{"steps": []}"#)?;
        assert!(document.derive()?.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            StepperDocument::from_json(r#"{"activeStep": "#),
            Err(StepperError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn annotated_steps_serialize_flat() -> Result<(), Box<dyn std::error::Error>> {
        let document = StepperDocument {
            steps: Some(vec![StepDeclaration::new("Only")]),
            ..StepperDocument::default()
        };
        let slots = document.derive()?;
        let value = serde_json::to_value(&slots[0].step)?;
        assert_eq!(
            value,
            serde_json::json!({
                "label": "Only",
                "index": 0,
                "orientation": "horizontal",
                "totalSteps": 1,
                "active": true,
                "last": true
            })
        );
        Ok(())
    }
}
