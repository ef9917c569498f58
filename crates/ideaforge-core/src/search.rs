use async_trait::async_trait;

use crate::error::Result;
use crate::reference::ResearchReference;

/// Trait for scholarly-works search backends.
#[async_trait]
pub trait ReferenceSearch: Send + Sync {
    /// Search for works matching any of `keywords` (logical OR), returning at
    /// most `limit` normalized references, optionally restricted to the last
    /// `recency_years` years.
    ///
    /// Zero references is a valid, non-error outcome; only a failed upstream
    /// call is an error.
    async fn search(
        &self,
        keywords: &[String],
        limit: u32,
        recency_years: Option<i32>,
    ) -> Result<Vec<ResearchReference>>;
}
