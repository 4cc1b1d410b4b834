use std::collections::VecDeque;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::models::AnalysisResult;

/// The client keeps only the last five analyses.
pub const HISTORY_CAPACITY: usize = 5;

/// One line of the "Últimas 5 Análises" panel, derived from a successful
/// result. `date` uses the pt-BR locale format the original UI shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub date: String,
    pub asset: String,
    pub verdict: String,
    pub probability: u8,
}

impl HistoryItem {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            date: Local::now().format("%d/%m/%Y, %H:%M:%S").to_string(),
            asset: result.asset.clone(),
            verdict: result.verdict.clone(),
            probability: result.probability,
        }
    }
}

/// Bounded most-recent-first queue; recording past capacity evicts the
/// oldest entry. Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisHistory {
    items: VecDeque<HistoryItem>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, item: HistoryItem) {
        self.items.push_front(item);
        self.items.truncate(HISTORY_CAPACITY);
    }

    pub fn items(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(asset: &str) -> HistoryItem {
        HistoryItem {
            date: "01/01/2026, 12:00:00".into(),
            asset: asset.into(),
            verdict: "Entrada sugerida: CALL".into(),
            probability: 72,
        }
    }

    #[test]
    fn history_is_capped_and_newest_first() {
        let mut history = AnalysisHistory::new();
        for i in 0..7 {
            history.record(item(&format!("PAIR{}", i)));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        let assets: Vec<&str> = history.items().map(|i| i.asset.as_str()).collect();
        assert_eq!(assets, vec!["PAIR6", "PAIR5", "PAIR4", "PAIR3", "PAIR2"]);
    }

    #[test]
    fn history_length_tracks_successes_below_cap() {
        let mut history = AnalysisHistory::new();
        assert!(history.is_empty());
        history.record(item("EUR/USD"));
        history.record(item("GBP/JPY"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn history_round_trips_as_json_array() {
        let mut history = AnalysisHistory::new();
        history.record(item("EUR/USD"));
        history.record(item("BTC/USD"));

        let json = serde_json::to_string(&history).unwrap();
        assert!(json.starts_with('['));
        let restored: AnalysisHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, history);
    }
}
