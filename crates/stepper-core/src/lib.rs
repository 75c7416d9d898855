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

//! Framework-free step-state derivation for stepper widgets.
//!
//! Layout: `model.rs` (layout config, control flags, declared overrides),
//! `derive.rs` (the deriver and connector interleaving), `document.rs`
//! (serde-loadable stepper documents), `error.rs` (error types).

pub mod derive;
pub mod document;
pub mod error;
pub mod model;

pub use derive::{Orientable, StepElement, StepSlot, control_flags, derive_steps, step_state};
pub use document::{AnnotatedStep, ConnectorSpec, StepDeclaration, StepperDocument};
pub use error::{StepperError, StepperResult};
pub use model::{ControlFlags, DeclaredFlags, Orientation, StepState, StepperLayout};
