use thiserror::Error;

/// Top-level error type for the ideaforge pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// An upstream API answered with a non-success HTTP status.
    #[error("upstream error (HTTP {status}): {body}")]
    Upstream { status: u16, body: String },

    /// The request to an upstream API failed before any response arrived
    /// (connect failure, DNS, timeout).
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// An upstream API returned a success status but the payload failed
    /// parse or shape expectations.
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Every candidate idea failed stage 2; nothing to return.
    #[error("no projects could be generated successfully")]
    NoProjectsGenerated,

    /// A required credential or setting is missing at startup.
    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, Error>;
