//! Trait abstraction for the name request API to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::state::{AnalysisJson, Location, Stats};

/// Query parameters for `GET /name-analysis`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameAnalysisQuery {
    pub name: String,
    pub location: Location,
    pub entity_type: String,
    pub request_type: String,
}

impl NameAnalysisQuery {
    /// Query string pairs in the order the service documents them
    pub fn to_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("location", self.location.as_str()),
            ("entity_type", self.entity_type.as_str()),
            ("request_type", self.request_type.as_str()),
        ]
    }
}

/// Name request API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NameRequestApi: Send + Sync {
    /// Fetch usage statistics
    async fn get_stats(&self) -> Result<Stats>;

    /// Submit a name for automated analysis
    async fn analyze_name(&self, query: &NameAnalysisQuery) -> Result<AnalysisJson>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs() {
        let query = NameAnalysisQuery {
            name: "Acme Holdings".to_string(),
            location: Location::CA,
            entity_type: "XCR".to_string(),
            request_type: "MVE".to_string(),
        };
        assert_eq!(
            query.to_pairs(),
            [
                ("name", "Acme Holdings"),
                ("location", "CA"),
                ("entity_type", "XCR"),
                ("request_type", "MVE"),
            ]
        );
    }
}
