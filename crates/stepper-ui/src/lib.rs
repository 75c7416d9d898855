#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(missing_docs, unreachable_pub)]
#![allow(clippy::module_name_repetitions)]
//! Yew stepper components.
//! This crate holds the `Stepper` container, its `Step` and `StepConnector`
//! children, the `Paper` surface they render into, and the shared style tokens.

pub mod components;
pub mod logic;
pub mod theme;

pub use components::{
    Paper, PaperProps, Step, StepConnector, StepConnectorProps, StepProps, Stepper, StepperProps,
};
pub use stepper_core::{Orientation, StepperLayout};
pub use yew::Classes;
