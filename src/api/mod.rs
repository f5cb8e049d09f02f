//! HTTP client module for the name request API

mod client;
mod traits;

pub use client::{ApiError, HttpNameRequestApi};
pub use traits::{NameAnalysisQuery, NameRequestApi};

#[cfg(test)]
pub use traits::MockNameRequestApi;
