//! Application State
//!
//! Shared state behind every operation: configuration, local storage, the
//! fallback advisory table and the remote advisory client.

use std::sync::Arc;

use crate::advisory::client::TugoClient;
use crate::advisory::fallback::FallbackTable;
use crate::config::Config;
use crate::store::Store;

use super::AppError;

/// Generic over the advisory fetcher so operations can be exercised with a
/// stub; the default is the real HTTP client.
pub struct AppState<F = TugoClient> {
    pub config: Config,
    pub store: Store,
    pub fallback: Arc<FallbackTable>,
    pub advisory: F,
}

impl AppState<TugoClient> {
    pub async fn init(config: Config) -> Result<Self, AppError> {
        let store = Store::open(&config.db_path).await?;
        let advisory = TugoClient::new(&config.advisory_url, &config.advisory_key)?;
        Ok(Self {
            store,
            advisory,
            fallback: Arc::new(FallbackTable::new()),
            config,
        })
    }
}
