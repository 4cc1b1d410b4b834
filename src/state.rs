use std::time::Duration;

use rand::Rng;

#[derive(Clone)]
pub struct AppState {
    pub settings: AnalyzerSettings,
}

/// Tunables for the simulated analysis. The delay window exists purely to
/// imitate processing latency; tests set both bounds to zero.
#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
}

impl AnalyzerSettings {
    pub fn from_env() -> Self {
        Self {
            delay_min_ms: env_ms("ANALYSIS_DELAY_MIN_MS", 5000),
            delay_max_ms: env_ms("ANALYSIS_DELAY_MAX_MS", 8000),
        }
    }

    /// Uniform draw from [delay_min_ms, delay_max_ms).
    pub fn sample_delay(&self) -> Duration {
        if self.delay_max_ms <= self.delay_min_ms {
            return Duration::from_millis(self.delay_min_ms);
        }
        let ms = rand::rng().random_range(self.delay_min_ms..self.delay_max_ms);
        Duration::from_millis(ms)
    }
}

fn env_ms(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_stays_inside_window() {
        let settings = AnalyzerSettings {
            delay_min_ms: 5000,
            delay_max_ms: 8000,
        };
        for _ in 0..200 {
            let d = settings.sample_delay();
            assert!(d >= Duration::from_millis(5000));
            assert!(d < Duration::from_millis(8000));
        }
    }

    #[test]
    fn degenerate_window_returns_min() {
        let settings = AnalyzerSettings {
            delay_min_ms: 0,
            delay_max_ms: 0,
        };
        assert_eq!(settings.sample_delay(), Duration::ZERO);
    }
}
