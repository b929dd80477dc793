//! HTTP client for the upstream subsidy table page.

use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Fetches the one configured source page.
///
/// Non-2xx responses become [`FetchError::UnexpectedStatus`]. There is no
/// retry; a failed fetch is reported to the caller, who falls back to manual
/// entry.
#[derive(Debug, Clone)]
pub struct SubsidyPageClient {
    client: Client,
    url: reqwest::Url,
    source_id: String,
}

impl SubsidyPageClient {
    /// Creates a client with a request timeout and a browser-like `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidUrl`] if `source_url` does not parse.
    /// - [`FetchError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(
        source_url: &str,
        source_id: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let url = reqwest::Url::parse(source_url).map_err(|e| FetchError::InvalidUrl {
            url: source_url.to_owned(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(5)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            url,
            source_id: source_id.to_owned(),
        })
    }

    /// Identifier of the upstream, reported as `source` on fresh results.
    #[must_use]
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Fetches the page body as text.
    ///
    /// # Errors
    ///
    /// - [`FetchError::UnexpectedStatus`] for any non-2xx status.
    /// - [`FetchError::Http`] for network, TLS, timeout, or body decode failures.
    pub async fn fetch_page(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, ACCEPT_HTML)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                source_id = %self.source_id,
                status = status.as_u16(),
                "subsidy source returned non-success status"
            );
            return Err(FetchError::UnexpectedStatus {
                source_id: self.source_id.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(
            source_id = %self.source_id,
            bytes = body.len(),
            "fetched subsidy source page"
        );
        Ok(body)
    }
}
