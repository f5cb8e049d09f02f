//! Wizard state module

pub mod catalog;
mod options;
mod validation;
mod wizard_state;

pub use options::*;
pub use validation::*;
pub use wizard_state::*;
