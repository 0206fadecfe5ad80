//! Advisory operations: startup loads and the search flow.

use crate::advisory::client::AdvisoryFetch;
use crate::advisory::resolver::{AdvisoryError, Resolution, Resolver};
use crate::advisory::AdvisoryRecord;

use super::AppState;

/// Session startup: kick off the fallback-table load and read the cached
/// last advisory, concurrently (neither depends on the other). Returns the
/// cached record so the shell can show it before any search happens.
pub async fn startup<F>(state: &AppState<F>) -> Option<AdvisoryRecord> {
    let (_, cached) = tokio::join!(
        state.fallback.load(&state.config.fallback_path),
        state.store.load_last_advisory(),
    );
    cached
}

/// One advisory lookup. On success the cache mirror is overwritten; a cache
/// write failure is logged but never turns a successful lookup into an error.
pub async fn search<F: AdvisoryFetch>(
    state: &AppState<F>,
    code: &str,
    online: bool,
) -> Result<Resolution, AdvisoryError> {
    let resolver = Resolver::new(&state.advisory, state.fallback.as_ref());
    let resolution = resolver.resolve(code, online).await?;
    if let Err(e) = state.store.save_last_advisory(&resolution.record).await {
        log::error!("Could not persist last advisory: {}", e);
    }
    Ok(resolution)
}

/// The cached last result, if any survives from an earlier session.
pub async fn last_result<F>(state: &AppState<F>) -> Option<AdvisoryRecord> {
    state.store.load_last_advisory().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::client::FetchError;
    use crate::advisory::fallback::{FallbackEntry, FallbackTable};
    use crate::advisory::resolver::AdvisorySource;
    use crate::config::Config;
    use crate::store::Store;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Arc;

    struct UnreachableFetcher;

    impl AdvisoryFetch for UnreachableFetcher {
        async fn fetch(&self, _code: &str) -> Result<AdvisoryRecord, FetchError> {
            Err(FetchError::Network("connection refused".into()))
        }
    }

    fn test_config() -> Config {
        Config {
            api_url: "https://soloquest.onrender.com".to_string(),
            advisory_url: "https://api.tugo.com".to_string(),
            advisory_key: "test-key".to_string(),
            db_path: PathBuf::from(":memory:"),
            fallback_path: PathBuf::from("assets/safety_advisories.json"),
        }
    }

    async fn test_state() -> AppState<UnreachableFetcher> {
        let mut entries = HashMap::new();
        entries.insert(
            "FR".to_string(),
            FallbackEntry {
                country: "France".to_string(),
                advisory_state: Some(2),
                general_advisory: "Exercise caution".to_string(),
            },
        );
        AppState {
            config: test_config(),
            store: Store::open_in_memory().await.unwrap(),
            fallback: Arc::new(FallbackTable::preloaded(entries)),
            advisory: UnreachableFetcher,
        }
    }

    fn prior_record() -> AdvisoryRecord {
        AdvisoryRecord {
            name: "Japan".to_string(),
            advisory_state: Some(1),
            advisory_text: "Take normal security precautions".to_string(),
            advisories: None,
            climate: None,
            health: None,
        }
    }

    #[tokio::test]
    async fn failed_search_leaves_cache_untouched() {
        let state = test_state().await;
        state.store.save_last_advisory(&prior_record()).await.unwrap();

        // ZZ is absent from the table and the network is down.
        let err = search(&state, "ZZ", true).await.unwrap_err();
        assert_eq!(err, AdvisoryError::Retrieval);
        assert_eq!(state.store.load_last_advisory().await, Some(prior_record()));
    }

    #[tokio::test]
    async fn validation_failure_leaves_cache_untouched() {
        let state = test_state().await;
        state.store.save_last_advisory(&prior_record()).await.unwrap();

        let err = search(&state, "   ", true).await.unwrap_err();
        assert_eq!(err, AdvisoryError::Validation);
        assert_eq!(state.store.load_last_advisory().await, Some(prior_record()));
    }

    #[tokio::test]
    async fn fallback_success_overwrites_cache() {
        let state = test_state().await;
        state.store.save_last_advisory(&prior_record()).await.unwrap();

        let resolution = search(&state, "fr", true).await.unwrap();
        assert_eq!(resolution.source, AdvisorySource::Fallback);

        let cached = state.store.load_last_advisory().await.unwrap();
        assert_eq!(cached, resolution.record);
        assert_eq!(cached.name, "France");
    }

    #[tokio::test]
    async fn first_success_populates_empty_cache() {
        let state = test_state().await;
        assert!(last_result(&state).await.is_none());

        search(&state, "FR", false).await.unwrap();
        assert!(last_result(&state).await.is_some());
    }
}
