//! CORE (core.ac.uk) scholarly-works search integration.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Datelike;
use serde::Deserialize;

use ideaforge_core::config::AppConfig;
use ideaforge_core::error::{Error, Result};
use ideaforge_core::reference::ResearchReference;
use ideaforge_core::search::ReferenceSearch;

// ---------------------------------------------------------------------------
// CORE v3 works-search raw record types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawWork {
    pub title: Option<String>,
    pub authors: Vec<RawAuthor>,
    pub year_published: Option<i32>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub download_url: Option<String>,
    pub doi: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawAuthor {
    pub name: Option<String>,
}

/// Normalize one raw upstream record. Total: every missing optional field is
/// replaced with its placeholder, never an error.
pub fn normalize_work(work: RawWork) -> ResearchReference {
    ResearchReference {
        title: work.title.unwrap_or_else(|| "Untitled".into()),
        authors: work.authors.into_iter().filter_map(|a| a.name).collect(),
        year: work.year_published.unwrap_or_else(current_year),
        abstract_text: work
            .abstract_text
            .unwrap_or_else(|| "Abstract not available".into()),
        url: work
            .download_url
            .or_else(|| work.doi.map(|doi| format!("https://doi.org/{doi}")))
            .unwrap_or_default(),
    }
}

/// Extract and normalize the `results` array of a search response body.
/// A missing or malformed array, and any individually unparseable record,
/// normalizes to nothing rather than failing the whole search.
pub fn normalize_results(body: &serde_json::Value) -> Vec<ResearchReference> {
    let Some(items) = body.get("results").and_then(|r| r.as_array()) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| serde_json::from_value::<RawWork>(item.clone()).ok())
        .map(normalize_work)
        .collect()
}

/// Join keywords into the logical-OR query the works index expects.
pub fn build_query(keywords: &[String]) -> String {
    keywords.join(" OR ")
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

// ---------------------------------------------------------------------------
// CoreSearchClient
// ---------------------------------------------------------------------------

pub struct CoreSearchClient {
    api_key: String,
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl CoreSearchClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.core_api_key.clone(),
            base_url: config.core_base_url.clone(),
            timeout: config.upstream_timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ReferenceSearch for CoreSearchClient {
    async fn search(
        &self,
        keywords: &[String],
        limit: u32,
        recency_years: Option<i32>,
    ) -> Result<Vec<ResearchReference>> {
        let mut request = self
            .client
            .get(format!("{}/search/works", self.base_url))
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .query(&[("q", build_query(keywords))])
            .query(&[("limit", limit)]);

        if let Some(years) = recency_years {
            request = request.query(&[("year_from", current_year() - years)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read response body".into());
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;

        Ok(normalize_results(&body))
    }
}
