use thiserror::Error;

/// Failures while retrieving the upstream subsidy page.
///
/// Extraction misses are not errors; see [`crate::ExtractionResult`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{source_id} HTTP {status}")]
    UnexpectedStatus { source_id: String, status: u16 },

    #[error("invalid source URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
