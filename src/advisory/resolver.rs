// Advisory resolution policy
//
// Decides, per lookup, whether to use the remote service or the fallback
// table, and folds every failure into one user-visible error. Each call is
// independent: there is no retry beyond the single fallback step, and the
// resolver never touches the cache mirror (the app layer persists successes).

use thiserror::Error;

use super::client::{AdvisoryFetch, FetchError};
use super::fallback::FallbackTable;
use super::AdvisoryRecord;

/// User-visible failure of one lookup. The message strings are shown inline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdvisoryError {
    /// Empty input; no I/O was attempted.
    #[error("Please enter a valid country code.")]
    Validation,
    /// Offline, table consulted, code absent.
    #[error("No fallback data found for that country code.")]
    NotFound,
    /// Remote fetch failed and the fallback also lacked the code.
    #[error("Failed to retrieve safety data. Please check the country code and try again.")]
    Retrieval,
}

/// Where the resolved record came from. Not persisted; a fallback record
/// reached via a failed fetch is shown like any other result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorySource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub record: AdvisoryRecord,
    pub source: AdvisorySource,
}

pub struct Resolver<'a, F> {
    fetcher: &'a F,
    fallback: &'a FallbackTable,
}

impl<'a, F: AdvisoryFetch> Resolver<'a, F> {
    pub fn new(fetcher: &'a F, fallback: &'a FallbackTable) -> Self {
        Self { fetcher, fallback }
    }

    /// Resolve a user-entered country code.
    ///
    /// `online` is the environment's reachability signal. When it is false
    /// and the fallback table is Ready, the network is never attempted. A
    /// table that is still Loading (or Failed) does not short-circuit: the
    /// lookup proceeds to the remote service regardless of reachability.
    pub async fn resolve(&self, input: &str, online: bool) -> Result<Resolution, AdvisoryError> {
        let code = input.trim().to_uppercase();
        if code.is_empty() {
            return Err(AdvisoryError::Validation);
        }

        if !online && self.fallback.is_ready() {
            return match self.fallback.get(&code) {
                Some(entry) => Ok(Resolution {
                    record: entry.to_record(),
                    source: AdvisorySource::Fallback,
                }),
                None => Err(AdvisoryError::NotFound),
            };
        }

        match self.fetcher.fetch(&code).await {
            Ok(record) => Ok(Resolution {
                record,
                source: AdvisorySource::Remote,
            }),
            Err(err) => {
                log::warn!("Advisory fetch for {} failed ({}), trying fallback", code, err);
                match self.fallback.get(&code) {
                    Some(entry) => Ok(Resolution {
                        record: entry.to_record(),
                        source: AdvisorySource::Fallback,
                    }),
                    None => Err(AdvisoryError::Retrieval),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::fallback::FallbackEntry;
    use crate::advisory::{RegionalAdvisories, RiskLevel};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering};

    enum StubBehavior {
        Succeed(AdvisoryRecord),
        Fail(fn() -> FetchError),
    }

    struct StubFetcher {
        behavior: StubBehavior,
        calls: AtomicU32,
    }

    impl StubFetcher {
        fn ok(record: AdvisoryRecord) -> Self {
            Self {
                behavior: StubBehavior::Succeed(record),
                calls: AtomicU32::new(0),
            }
        }

        fn failing(make: fn() -> FetchError) -> Self {
            Self {
                behavior: StubBehavior::Fail(make),
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AdvisoryFetch for StubFetcher {
        async fn fetch(&self, _code: &str) -> Result<AdvisoryRecord, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                StubBehavior::Succeed(record) => Ok(record.clone()),
                StubBehavior::Fail(make) => Err(make()),
            }
        }
    }

    fn remote_record() -> AdvisoryRecord {
        AdvisoryRecord {
            name: "France".to_string(),
            advisory_state: Some(2),
            advisory_text: "Exercise a high degree of caution".to_string(),
            advisories: Some(RegionalAdvisories {
                regional_advisories: vec![],
            }),
            climate: None,
            health: None,
        }
    }

    fn ready_table() -> FallbackTable {
        let mut entries = HashMap::new();
        entries.insert(
            "FR".to_string(),
            FallbackEntry {
                country: "France".to_string(),
                advisory_state: Some(2),
                general_advisory: "Exercise caution".to_string(),
            },
        );
        FallbackTable::preloaded(entries)
    }

    #[tokio::test]
    async fn empty_input_is_validation_error_without_io() {
        let fetcher = StubFetcher::ok(remote_record());
        let table = ready_table();
        let resolver = Resolver::new(&fetcher, &table);

        for input in ["", "   ", "\t\n"] {
            let err = resolver.resolve(input, true).await.unwrap_err();
            assert_eq!(err, AdvisoryError::Validation);
        }
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn online_success_passes_payload_through() {
        let fetcher = StubFetcher::ok(remote_record());
        let table = ready_table();
        let resolver = Resolver::new(&fetcher, &table);

        let resolution = resolver.resolve("fr", true).await.unwrap();
        assert_eq!(resolution.source, AdvisorySource::Remote);
        assert_eq!(resolution.record, remote_record());
        // Optional sections from the remote payload survive untouched.
        assert!(resolution.record.advisories.is_some());
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let table = ready_table();
        for fetcher in [
            StubFetcher::failing(|| FetchError::Timeout),
            StubFetcher::failing(|| FetchError::Network("connection refused".into())),
        ] {
            let resolver = Resolver::new(&fetcher, &table);
            let lower = resolver.resolve("fr", true).await.unwrap();
            let upper = resolver.resolve("FR", true).await.unwrap();
            assert_eq!(lower, upper);
        }
    }

    #[tokio::test]
    async fn offline_with_ready_table_skips_network() {
        let fetcher = StubFetcher::ok(remote_record());
        let table = ready_table();
        let resolver = Resolver::new(&fetcher, &table);

        let resolution = resolver.resolve("FR", false).await.unwrap();
        assert_eq!(resolution.source, AdvisorySource::Fallback);
        assert_eq!(resolution.record.advisory_text, "Exercise caution");
        assert_eq!(resolution.record.risk_level(), RiskLevel::Moderate);
        assert!(resolution.record.advisories.is_none());
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn offline_miss_is_not_found_and_never_fetches() {
        let fetcher = StubFetcher::ok(remote_record());
        let table = ready_table();
        let resolver = Resolver::new(&fetcher, &table);

        let err = resolver.resolve("ZZ", false).await.unwrap_err();
        assert_eq!(err, AdvisoryError::NotFound);
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_fallback_silently() {
        let table = ready_table();
        for fetcher in [
            StubFetcher::failing(|| FetchError::Timeout),
            StubFetcher::failing(|| FetchError::Network("dns".into())),
            StubFetcher::failing(|| FetchError::Http(reqwest::StatusCode::BAD_GATEWAY)),
        ] {
            let resolver = Resolver::new(&fetcher, &table);
            let resolution = resolver.resolve("FR", true).await.unwrap();
            assert_eq!(resolution.source, AdvisorySource::Fallback);
            assert_eq!(resolution.record.advisory_text, "Exercise caution");
            assert_eq!(fetcher.calls(), 1);
        }
    }

    #[tokio::test]
    async fn fetch_failure_without_fallback_entry_is_retrieval_error() {
        let fetcher = StubFetcher::failing(|| FetchError::Timeout);
        let table = ready_table();
        let resolver = Resolver::new(&fetcher, &table);

        let err = resolver.resolve("ZZ", true).await.unwrap_err();
        assert_eq!(err, AdvisoryError::Retrieval);
    }

    #[tokio::test]
    async fn offline_with_loading_table_still_tries_network() {
        // Startup race: until the bundled table has loaded, an offline lookup
        // falls through to the remote attempt and fails like a network error.
        let fetcher = StubFetcher::failing(|| FetchError::Network("offline".into()));
        let table = FallbackTable::new();
        let resolver = Resolver::new(&fetcher, &table);

        let err = resolver.resolve("FR", false).await.unwrap_err();
        assert_eq!(err, AdvisoryError::Retrieval);
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn waiting_for_settled_restores_offline_fallback() {
        // A caller that awaits table readiness gets fallback data offline.
        let table = ready_table();
        assert_eq!(
            table.settled().await,
            crate::advisory::fallback::TablePhase::Ready
        );
        let fetcher = StubFetcher::ok(remote_record());
        let resolver = Resolver::new(&fetcher, &table);
        let resolution = resolver.resolve("FR", false).await.unwrap();
        assert_eq!(resolution.source, AdvisorySource::Fallback);
        assert_eq!(fetcher.calls(), 0);
    }
}
