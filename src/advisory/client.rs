// Remote advisory client
//
// Fetches country safety data from the TuGo travel-safety API. The request
// carries a hard 4000 ms deadline: reqwest aborts the in-flight request when
// the deadline passes, so a late response is never observed by the caller.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::AdvisoryRecord;

/// Deadline for a single advisory fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_millis(4000);

const USER_AGENT: &str = concat!("SoloQuest/", env!("CARGO_PKG_VERSION"));

/// Why a remote fetch failed.
///
/// The resolver treats every variant the same way (fall back to the static
/// table); the tags exist so a finer-grained retry policy can be added later
/// without reshaping the error.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {}ms", FETCH_TIMEOUT.as_millis())]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("advisory service returned HTTP {0}")]
    Http(StatusCode),
}

/// Source of remote advisory data. Implemented by [`TugoClient`] for the real
/// service and by stubs in resolver tests.
pub trait AdvisoryFetch {
    fn fetch(
        &self,
        code: &str,
    ) -> impl std::future::Future<Output = Result<AdvisoryRecord, FetchError>> + Send;
}

/// HTTP client for the TuGo advisory service.
pub struct TugoClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl TugoClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    fn country_url(&self, code: &str) -> String {
        format!(
            "{}/v1/travelsafe/countries/{}",
            self.base_url.trim_end_matches('/'),
            code
        )
    }
}

impl AdvisoryFetch for TugoClient {
    async fn fetch(&self, code: &str) -> Result<AdvisoryRecord, FetchError> {
        let url = self.country_url(code);
        log::info!("Fetching advisory for {} from {}", code, url);

        let response = self
            .http
            .get(&url)
            .header("X-Auth-API-Key", &self.api_key)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Advisory service returned {} for {}", status, code);
            return Err(FetchError::Http(status));
        }

        response
            .json::<AdvisoryRecord>()
            .await
            .map_err(classify_send_error)
    }
}

fn classify_send_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_url_format() {
        let client = TugoClient::new("https://api.tugo.com", "test-key").unwrap();
        assert_eq!(
            client.country_url("FR"),
            "https://api.tugo.com/v1/travelsafe/countries/FR"
        );
    }

    #[test]
    fn country_url_trims_trailing_slash() {
        let client = TugoClient::new("https://api.tugo.com/", "test-key").unwrap();
        assert_eq!(
            client.country_url("US"),
            "https://api.tugo.com/v1/travelsafe/countries/US"
        );
    }
}
