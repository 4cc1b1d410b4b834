use chrono::{SecondsFormat, Utc};
use rand::Rng;
use tokio::time::sleep;
use tracing::info;

use crate::models::{AnalysisRequest, AnalysisResult, Verdict};
use crate::services::text_pools::{CALL_ANALYSIS, ENTRY_LEVELS, PUT_ANALYSIS, TIMINGS, TRENDS};
use crate::state::AnalyzerSettings;

/// Waits out the simulated processing window, then fabricates a verdict.
/// No work happens during the wait and nothing is retained afterwards.
pub async fn run_analysis(settings: &AnalyzerSettings, request: &AnalysisRequest) -> AnalysisResult {
    let delay = settings.sample_delay();
    info!(
        "Analyzing {} ({} bytes, expiration {}min, market {}): simulated delay {:?}",
        request.asset,
        request.image.len(),
        request.expiration,
        request.market_type,
        delay
    );
    if !delay.is_zero() {
        sleep(delay).await;
    }

    generate(&request.asset)
}

/// Uniform independent draws from the fixed pools. The probability range
/// mirrors the original generator: 65..90.
pub fn generate(asset: &str) -> AnalysisResult {
    let mut rng = rand::rng();

    let verdict = if rng.random_bool(0.5) {
        Verdict::Call
    } else {
        Verdict::Put
    };
    let probability: u8 = rng.random_range(65..90);

    let pool = match verdict {
        Verdict::Call => &CALL_ANALYSIS,
        Verdict::Put => &PUT_ANALYSIS,
    };
    let analysis = pick(&mut rng, pool).replace("{asset}", asset);

    AnalysisResult {
        trend: pick(&mut rng, &TRENDS).to_string(),
        entry_levels: pick(&mut rng, &ENTRY_LEVELS).to_string(),
        timing: pick(&mut rng, &TIMINGS).to_string(),
        analysis,
        verdict: verdict.label().to_string(),
        probability,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        asset: asset.to_string(),
    }
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn probability_always_within_advertised_range() {
        for _ in 0..200 {
            let result = generate("EUR/USD");
            assert!((65..=90).contains(&result.probability));
        }
    }

    #[test]
    fn verdict_is_one_of_the_two_labels() {
        for _ in 0..50 {
            let result = generate("EUR/USD");
            assert!(
                result.verdict == "Entrada sugerida: CALL"
                    || result.verdict == "Entrada sugerida: PUT"
            );
        }
    }

    #[test]
    fn analysis_text_comes_from_the_pool_matching_the_verdict() {
        for _ in 0..50 {
            let result = generate("GBP/JPY");
            let pool = if result.verdict.contains("CALL") {
                &CALL_ANALYSIS
            } else {
                &PUT_ANALYSIS
            };
            assert!(pool
                .iter()
                .any(|t| t.replace("{asset}", "GBP/JPY") == result.analysis));
        }
    }

    #[test]
    fn asset_is_interpolated_and_echoed() {
        let result = generate("BTC/USD");
        assert_eq!(result.asset, "BTC/USD");
        assert!(result.analysis.contains("BTC/USD"));
        assert!(!result.analysis.contains("{asset}"));
    }

    #[test]
    fn trend_entry_and_timing_come_from_their_pools() {
        let result = generate("EUR/USD");
        assert!(TRENDS.contains(&result.trend.as_str()));
        assert!(ENTRY_LEVELS.contains(&result.entry_levels.as_str()));
        assert!(TIMINGS.contains(&result.timing.as_str()));
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let result = generate("EUR/USD");
        assert!(DateTime::parse_from_rfc3339(&result.timestamp).is_ok());
    }
}
