use tokio::sync::watch;
use tracing::warn;

use crate::client::api::{AnalysisClient, ClientError};
use crate::client::form::AnalysisForm;
use crate::client::history::HistoryStore;
use crate::client::progress::{ProgressConfig, ProgressSimulator};
use crate::models::{AnalysisHistory, AnalysisResult, HistoryItem};

/// One user's interaction with the form: validates, submits, drives the
/// cosmetic progress bar and maintains the capped persisted history.
pub struct AnalysisSession {
    pub form: AnalysisForm,
    client: AnalysisClient,
    store: HistoryStore,
    history: AnalysisHistory,
    progress: watch::Sender<u8>,
    progress_config: ProgressConfig,
    result: Option<AnalysisResult>,
    error: Option<String>,
    show_history: bool,
}

impl AnalysisSession {
    /// Loads whatever history the store already holds.
    pub fn new(client: AnalysisClient, store: HistoryStore) -> Self {
        let history = store.load();
        let (progress, _) = watch::channel(0);
        Self {
            form: AnalysisForm::default(),
            client,
            store,
            history,
            progress,
            progress_config: ProgressConfig::default(),
            result: None,
            error: None,
            show_history: false,
        }
    }

    pub fn with_progress_config(mut self, config: ProgressConfig) -> Self {
        self.progress_config = config;
        self
    }

    /// Observe the cosmetic progress value (0..=100).
    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    pub fn history(&self) -> &AnalysisHistory {
        &self.history
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    pub fn history_shown(&self) -> bool {
        self.show_history
    }

    /// Runs one submission end to end. On success the result is kept and a
    /// history entry is recorded and persisted; on any failure the progress
    /// bar is reset, the message is kept for display and history is left
    /// untouched. There are no automatic retries.
    pub async fn analyze(&mut self) -> Result<&AnalysisResult, ClientError> {
        self.error = None;
        self.form.validate().map_err(|e| {
            self.error = Some(e.message.clone());
            ClientError::Invalid(e)
        })?;

        let simulator =
            ProgressSimulator::with_sender(self.progress.clone(), self.progress_config.clone());

        match self.client.submit(&self.form).await {
            Ok(result) => {
                simulator.complete().await;
                self.history.record(HistoryItem::from_result(&result));
                if let Err(e) = self.store.save(&self.history) {
                    // The verdict is still shown even if the cache write fails
                    warn!("Failed to persist analysis history: {}", e);
                }
                self.result = Some(result);
                Ok(self.result.as_ref().expect("result was just stored"))
            }
            Err(e) => {
                simulator.cancel().await;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// "Nova Análise": clears the form, result, error, progress and the
    /// history panel flag. Persisted history survives.
    pub fn reset(&mut self) {
        self.form.clear();
        self.result = None;
        self.error = None;
        self.show_history = false;
        self.progress.send_replace(0);
    }
}
