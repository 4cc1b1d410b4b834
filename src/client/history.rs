use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::models::AnalysisHistory;

/// Name of the persisted history entry, matching the browser localStorage
/// key of the original frontend.
pub const STORAGE_KEY: &str = "binarySquadHistory";

/// File-backed stand-in for localStorage: one JSON array under a fixed key.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    dir: PathBuf,
}

impl HistoryStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(format!("{STORAGE_KEY}.json"))
    }

    /// Missing or unreadable stores load as empty history; the client never
    /// refuses to start over a corrupt cache.
    pub fn load(&self) -> AnalysisHistory {
        let path = self.path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return AnalysisHistory::new(),
            Err(e) => {
                warn!("Failed to read history store {}: {}", path.display(), e);
                return AnalysisHistory::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(e) => {
                warn!("Discarding corrupt history store {}: {}", path.display(), e);
                AnalysisHistory::new()
            }
        }
    }

    pub fn save(&self, history: &AnalysisHistory) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string(history)?;
        fs::write(self.path(), json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoryItem;

    fn temp_store(tag: &str) -> HistoryStore {
        let dir = std::env::temp_dir().join(format!(
            "binary-squad-history-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        HistoryStore::new(dir)
    }

    fn item(asset: &str) -> HistoryItem {
        HistoryItem {
            date: "02/01/2026, 09:30:00".into(),
            asset: asset.into(),
            verdict: "Entrada sugerida: PUT".into(),
            probability: 81,
        }
    }

    #[test]
    fn missing_store_loads_empty() {
        let store = temp_store("missing");
        assert!(store.load().is_empty());
    }

    #[test]
    fn saved_history_reloads_identically() {
        let store = temp_store("roundtrip");
        let mut history = AnalysisHistory::new();
        history.record(item("EUR/USD"));
        history.record(item("GBP/JPY"));

        store.save(&history).unwrap();
        assert_eq!(store.load(), history);
    }

    #[test]
    fn corrupt_store_loads_empty() {
        let store = temp_store("corrupt");
        fs::create_dir_all(&store.dir).unwrap();
        fs::write(store.path(), "not json at all").unwrap();
        assert!(store.load().is_empty());
    }
}
