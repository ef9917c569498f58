use serde::{Deserialize, Serialize};

/// A research paper normalized from the scholarly-search upstream.
///
/// Every field has a safe placeholder, so normalization of an upstream record
/// is total: a record missing all optional fields still produces a valid
/// reference (see `ideaforge-scholar`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchReference {
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Download or DOI link; empty when the upstream record has neither.
    pub url: String,
}
