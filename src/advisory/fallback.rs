// Static fallback advisory table
//
// A bundled JSON document maps uppercase ISO country codes to minimal
// advisory entries. It is loaded once per session; a failed load leaves the
// table empty for the rest of the session (no retry). The lifecycle is
// explicit so callers can tell "still loading" apart from "load failed".

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::AdvisoryRecord;

/// One entry of the bundled safety_advisories.json document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackEntry {
    pub country: String,
    pub advisory_state: Option<i64>,
    pub general_advisory: String,
}

impl FallbackEntry {
    /// Build a minimal advisory record. Fallback records never carry the
    /// regional/climate/health sections.
    pub fn to_record(&self) -> AdvisoryRecord {
        AdvisoryRecord {
            name: self.country.clone(),
            advisory_state: self.advisory_state,
            advisory_text: self.general_advisory.clone(),
            advisories: None,
            climate: None,
            health: None,
        }
    }
}

/// Load lifecycle of the fallback table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablePhase {
    Loading,
    Ready,
    Failed,
}

/// Process-wide fallback table, read-only once loaded.
pub struct FallbackTable {
    phase: watch::Sender<TablePhase>,
    entries: OnceLock<HashMap<String, FallbackEntry>>,
}

impl FallbackTable {
    pub fn new() -> Self {
        let (phase, _) = watch::channel(TablePhase::Loading);
        Self {
            phase,
            entries: OnceLock::new(),
        }
    }

    /// Build a table that is already Ready. Used when the entries come from
    /// somewhere other than the bundled file (tests, embedded data).
    pub fn preloaded(entries: HashMap<String, FallbackEntry>) -> Self {
        let table = Self::new();
        let _ = table.entries.set(entries);
        table.phase.send_replace(TablePhase::Ready);
        table
    }

    /// Load the bundled document. Meant to be called exactly once, at
    /// session start; a second call is a no-op for the entry map.
    pub async fn load(&self, path: &Path) {
        match tokio::fs::read_to_string(path).await {
            Ok(raw) => match serde_json::from_str::<HashMap<String, FallbackEntry>>(&raw) {
                Ok(map) => {
                    log::info!(
                        "Loaded {} fallback advisories from {}",
                        map.len(),
                        path.display()
                    );
                    let _ = self.entries.set(map);
                    self.phase.send_replace(TablePhase::Ready);
                }
                Err(e) => {
                    log::warn!("Fallback advisories in {} are invalid: {}", path.display(), e);
                    self.phase.send_replace(TablePhase::Failed);
                }
            },
            Err(e) => {
                log::warn!(
                    "Could not read fallback advisories from {}: {}",
                    path.display(),
                    e
                );
                self.phase.send_replace(TablePhase::Failed);
            }
        }
    }

    pub fn phase(&self) -> TablePhase {
        *self.phase.borrow()
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == TablePhase::Ready
    }

    /// Look up an uppercase country code. Yields None until the table is
    /// Ready; a missing key on a Ready table is an expected state, not an
    /// error.
    pub fn get(&self, code: &str) -> Option<&FallbackEntry> {
        if !self.is_ready() {
            return None;
        }
        self.entries.get().and_then(|map| map.get(code))
    }

    /// Suspend until the load has finished either way. Lets callers opt out
    /// of the startup race between table readiness and the first lookup.
    pub async fn settled(&self) -> TablePhase {
        let mut rx = self.phase.subscribe();
        rx.wait_for(|p| *p != TablePhase::Loading)
            .await
            .map(|p| *p)
            .unwrap_or(TablePhase::Failed)
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_json() -> &'static str {
        r#"{
            "FR": {"country": "France", "advisory_state": 2, "general_advisory": "Exercise caution"},
            "US": {"country": "United States", "advisory_state": 1, "general_advisory": "Normal precautions"}
        }"#
    }

    #[tokio::test]
    async fn load_makes_table_ready() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();

        let table = FallbackTable::new();
        assert_eq!(table.phase(), TablePhase::Loading);
        assert!(table.get("FR").is_none());

        table.load(file.path()).await;
        assert_eq!(table.phase(), TablePhase::Ready);

        let entry = table.get("FR").unwrap();
        assert_eq!(entry.country, "France");
        assert_eq!(entry.advisory_state, Some(2));
        assert!(table.get("ZZ").is_none());
    }

    #[tokio::test]
    async fn missing_file_marks_failed() {
        let table = FallbackTable::new();
        table.load(Path::new("/nonexistent/advisories.json")).await;
        assert_eq!(table.phase(), TablePhase::Failed);
        assert!(table.get("FR").is_none());
        assert_eq!(table.settled().await, TablePhase::Failed);
    }

    #[tokio::test]
    async fn invalid_json_marks_failed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let table = FallbackTable::new();
        table.load(file.path()).await;
        assert_eq!(table.phase(), TablePhase::Failed);
    }

    #[tokio::test]
    async fn settled_waits_for_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();
        let path = file.path().to_path_buf();

        let table = std::sync::Arc::new(FallbackTable::new());
        let loader = {
            let table = table.clone();
            tokio::spawn(async move { table.load(&path).await })
        };
        assert_eq!(table.settled().await, TablePhase::Ready);
        loader.await.unwrap();
    }

    #[test]
    fn fallback_record_is_minimal() {
        let entry = FallbackEntry {
            country: "France".to_string(),
            advisory_state: Some(2),
            general_advisory: "Exercise caution".to_string(),
        };
        let record = entry.to_record();
        assert_eq!(record.name, "France");
        assert_eq!(record.advisory_text, "Exercise caution");
        assert!(record.advisories.is_none());
        assert!(record.climate.is_none());
        assert!(record.health.is_none());
    }
}
