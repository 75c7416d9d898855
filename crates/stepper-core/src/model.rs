//! Layout configuration and the per-step flag sets produced by the deriver.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::StepperError;

/// Flow direction of the step sequence.
///
/// Documents and the command line accept the same spellings: case is ignored
/// and surrounding whitespace trimmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Steps laid out left to right.
    #[default]
    Horizontal,
    /// Steps stacked top to bottom.
    Vertical,
}

impl Orientation {
    /// Returns the lowercase token used in class names and documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = StepperError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(StepperError::InvalidOrientation {
                value: value.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Orientation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Stepper-level settings that drive derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepperLayout {
    /// Zero-based active index. Values outside the child range are allowed.
    pub active_step: i64,
    /// Places labels under the icons and hands the connector to each step.
    pub alternative_label: bool,
    /// Derive `completed`/`disabled` from the position relative to `active_step`.
    pub linear: bool,
    /// Flow direction.
    pub orientation: Orientation,
}

impl Default for StepperLayout {
    fn default() -> Self {
        Self {
            active_step: 0,
            alternative_label: false,
            linear: true,
            orientation: Orientation::Horizontal,
        }
    }
}

/// Mutually exclusive state computed for a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    /// The step at `active_step`.
    Active,
    /// A step before `active_step` in linear mode.
    Completed,
    /// A step after `active_step` in linear mode.
    Disabled,
}

/// Flags handed to each step. Optional fields are absent unless computed or declared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlFlags<C> {
    /// Position among siblings.
    pub index: usize,
    /// Orientation copied from the stepper.
    pub orientation: Orientation,
    /// Number of siblings.
    pub total_steps: usize,
    /// Set for the step at the active index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Set for steps before the active index in linear mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Set for steps after the active index in linear mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Set for the final step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<bool>,
    /// Set in alternative-label layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_label: Option<bool>,
    /// Un-oriented connector template, alternative-label layout only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<C>,
}

impl<C> ControlFlags<C> {
    /// Baseline flags carrying only position and orientation.
    #[must_use]
    pub const fn new(index: usize, total_steps: usize, orientation: Orientation) -> Self {
        Self {
            index,
            orientation,
            total_steps,
            active: None,
            completed: None,
            disabled: None,
            last: None,
            alternative_label: None,
            connector: None,
        }
    }

    /// Overlay declared properties key by key; anything the step declares wins.
    #[must_use]
    pub fn with_overrides(mut self, declared: &DeclaredFlags<C>) -> Self
    where
        C: Clone,
    {
        if let Some(index) = declared.index {
            self.index = index;
        }
        if let Some(orientation) = declared.orientation {
            self.orientation = orientation;
        }
        if let Some(total_steps) = declared.total_steps {
            self.total_steps = total_steps;
        }
        self.active = declared.active.or(self.active);
        self.completed = declared.completed.or(self.completed);
        self.disabled = declared.disabled.or(self.disabled);
        self.last = declared.last.or(self.last);
        self.alternative_label = declared.alternative_label.or(self.alternative_label);
        if declared.connector.is_some() {
            self.connector.clone_from(&declared.connector);
        }
        self
    }

    /// True when `active` is explicitly set to `true`.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active == Some(true)
    }

    /// True when `completed` is explicitly set to `true`.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed == Some(true)
    }

    /// True when `disabled` is explicitly set to `true`.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled == Some(true)
    }

    /// True when `last` is explicitly set to `true`.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.last == Some(true)
    }

    /// First of active/completed/disabled that is set, in that precedence.
    #[must_use]
    pub fn state(&self) -> Option<StepState> {
        if self.is_active() {
            Some(StepState::Active)
        } else if self.is_completed() {
            Some(StepState::Completed)
        } else if self.is_disabled() {
            Some(StepState::Disabled)
        } else {
            None
        }
    }
}

/// Properties a step declares for itself. `None` means "not declared".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeclaredFlags<C> {
    /// Overrides the computed position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Overrides the stepper orientation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Overrides the sibling count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_steps: Option<usize>,
    /// Overrides `active`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Overrides `completed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Overrides `disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Overrides `last`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<bool>,
    /// Overrides `alternative_label`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_label: Option<bool>,
    /// Overrides the connector handed down in alternative-label layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<C>,
}

impl<C> Default for DeclaredFlags<C> {
    fn default() -> Self {
        Self {
            index: None,
            orientation: None,
            total_steps: None,
            active: None,
            completed: None,
            disabled: None,
            last: None,
            alternative_label: None,
            connector: None,
        }
    }
}

impl<C> DeclaredFlags<C> {
    /// True when the step declares nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.index.is_none()
            && self.orientation.is_none()
            && self.total_steps.is_none()
            && self.active.is_none()
            && self.completed.is_none()
            && self.disabled.is_none()
            && self.last.is_none()
            && self.alternative_label.is_none()
            && self.connector.is_none()
    }
}
