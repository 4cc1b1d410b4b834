//! Headless counterpart of the browser form: field validation, multipart
//! submission, the cosmetic progress bar and the persisted 5-entry history.

pub mod api;
pub mod controller;
pub mod form;
pub mod history;
pub mod progress;

pub use api::{AnalysisClient, ClientError};
pub use controller::AnalysisSession;
pub use form::{AnalysisForm, ChartImage, FormField, ValidationError};
pub use history::HistoryStore;
pub use progress::{ProgressConfig, ProgressSimulator};
