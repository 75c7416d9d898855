//! Stepper components: the container, its children, and the surface they render into.

pub mod connector;
pub mod paper;
pub mod step;
pub mod stepper;

pub use connector::{StepConnector, StepConnectorProps};
pub use paper::{Paper, PaperProps};
pub use step::{Step, StepProps};
pub use stepper::{Stepper, StepperProps};
