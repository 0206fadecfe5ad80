// Client-local persistent storage
//
// A single sqlite table of key/value slots, standing in for the browser's
// localStorage. The cache mirror for the last resolved advisory lives here
// under a fixed key, alongside the session tokens. Writes are last-writer-
// wins upserts; reads of absent or corrupt slots degrade to "nothing stored".

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use thiserror::Error;

use crate::advisory::AdvisoryRecord;
use crate::api::auth::UserProfile;

/// Slot for the last successfully resolved advisory. The key matches the
/// web client's localStorage slot so stored JSON stays interchangeable.
pub const LAST_ADVISORY_KEY: &str = "lastSafetyData";

pub const ACCESS_TOKEN_KEY: &str = "access";
pub const REFRESH_TOKEN_KEY: &str = "refresh";
pub const USER_KEY: &str = "user";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Sqlite(#[from] sqlx::Error),
    #[error("could not serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct Store {
    pool: Pool<Sqlite>,
}

impl Store {
    /// Open (or create) the storage database at the given path.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// In-memory storage, used by tests and throwaway sessions. Pinned to a
    /// single connection so the database survives the whole session.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )"#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM storage WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    pub async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"INSERT INTO storage (key, value, updated_at)
               VALUES (?, ?, datetime('now'))
               ON CONFLICT(key) DO UPDATE SET
                 value = excluded.value,
                 updated_at = datetime('now')"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ========================================================================
    // Cache mirror for the last resolved advisory
    // ========================================================================

    /// Read the cached last advisory. Any failure (no slot, corrupt JSON,
    /// storage error) yields None so startup can never trip over the cache.
    pub async fn load_last_advisory(&self) -> Option<AdvisoryRecord> {
        let raw = match self.get(LAST_ADVISORY_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Could not read cached advisory: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Cached advisory is corrupt, ignoring: {}", e);
                None
            }
        }
    }

    /// Overwrite the cache mirror. Called only after a successful resolution.
    pub async fn save_last_advisory(&self, record: &AdvisoryRecord) -> Result<(), StoreError> {
        let raw = serde_json::to_string(record)?;
        self.set(LAST_ADVISORY_KEY, &raw).await
    }

    // ========================================================================
    // Session slots
    // ========================================================================

    pub async fn access_token(&self) -> Result<Option<String>, StoreError> {
        self.get(ACCESS_TOKEN_KEY).await
    }

    pub async fn set_session(
        &self,
        access: &str,
        refresh: &str,
        user: &UserProfile,
    ) -> Result<(), StoreError> {
        self.set(ACCESS_TOKEN_KEY, access).await?;
        self.set(REFRESH_TOKEN_KEY, refresh).await?;
        self.set(USER_KEY, &serde_json::to_string(user)?).await
    }

    pub async fn clear_session(&self) -> Result<(), StoreError> {
        self.delete(ACCESS_TOKEN_KEY).await?;
        self.delete(REFRESH_TOKEN_KEY).await?;
        self.delete(USER_KEY).await
    }

    pub async fn current_user(&self) -> Option<UserProfile> {
        let raw = self.get(USER_KEY).await.ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Stored user profile is corrupt, ignoring: {}", e);
                None
            }
        }
    }
}
