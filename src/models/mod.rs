mod analysis;
mod history;

pub use analysis::{
    AnalysisRequest, AnalysisResult, MarketType, Verdict, EXPIRATION_MINUTES,
};
pub use history::{AnalysisHistory, HistoryItem, HISTORY_CAPACITY};
