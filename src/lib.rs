//! Name Request wizard - client-side state for the business name request flow
//!
//! Holds the wizard's form inputs and reference data, derives the option
//! lists the views render, and drives the `/stats` and `/name-analysis`
//! calls with cancellation.

pub mod api;
pub mod config;
pub mod state;
pub mod store;

pub use api::{HttpNameRequestApi, NameAnalysisQuery, NameRequestApi};
pub use config::WizardConfig;
pub use store::{AnalyzeOutcome, NewRequestStore};
