use std::fmt;
use std::str::FromStr;

use axum::body::Bytes;
use serde::{Deserialize, Serialize};

/// Allowed option expirations, in minutes. Enforced by the form only; the
/// endpoint echoes whatever string it receives.
pub const EXPIRATION_MINUTES: [u32; 7] = [1, 2, 5, 10, 15, 30, 60];

/// One multipart submission as the endpoint sees it. Only `image` is
/// required server-side; the remaining fields arrive as raw strings and are
/// deliberately not validated (the original behaves the same way).
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub image: Bytes,
    pub email: String,
    pub asset: String,
    pub expiration: String,
    pub market_type: String,
}

/// The canned verdict the client renders. `probability` is always within
/// [65, 90] and `timestamp` is RFC 3339 UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub trend: String,
    pub entry_levels: String,
    pub timing: String,
    pub analysis: String,
    pub verdict: String,
    pub probability: u8,
    pub timestamp: String,
    pub asset: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Call,
    Put,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Call => "Entrada sugerida: CALL",
            Verdict::Put => "Entrada sugerida: PUT",
        }
    }
}

/// Market mode flag; passed through to the endpoint with no differing logic.
/// Crosses the wire as its `as_str` form inside the multipart payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarketType {
    #[default]
    Normal,
    Otc,
}

impl MarketType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketType::Normal => "normal",
            MarketType::Otc => "otc",
        }
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(MarketType::Normal),
            "otc" => Ok(MarketType::Otc),
            other => Err(format!("tipo de mercado desconhecido: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result = AnalysisResult {
            trend: "t".into(),
            entry_levels: "e".into(),
            timing: "m".into(),
            analysis: "a".into(),
            verdict: Verdict::Call.label().to_string(),
            probability: 70,
            timestamp: "2026-01-01T00:00:00Z".into(),
            asset: "EUR/USD".into(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["entryLevels"], "e");
        assert_eq!(json["verdict"], "Entrada sugerida: CALL");
        assert_eq!(json["asset"], "EUR/USD");
    }

    #[test]
    fn market_type_round_trips_through_wire_values() {
        assert_eq!("normal".parse::<MarketType>().unwrap(), MarketType::Normal);
        assert_eq!("otc".parse::<MarketType>().unwrap(), MarketType::Otc);
        assert!("forex".parse::<MarketType>().is_err());
        assert_eq!(MarketType::Otc.to_string(), "otc");
    }
}
