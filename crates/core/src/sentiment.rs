use crate::num::round2;
use serde::{Deserialize, Serialize};

const HISTORICAL_AVERAGE: i32 = 50;
const HERD_RISK_RATIO: f64 = 3.0;

/// Randomness behind the sentiment mock. Injectable so tests can pin the
/// draw to a known value.
pub trait RandomSource {
    /// Uniform draw in `[min, max)`.
    fn next_int(&mut self, min: i32, max: i32) -> i32;
}

/// Production source backed by the thread-local rng.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        use rand::Rng;
        rand::thread_rng().gen_range(min..max)
    }
}

/// Ephemeral crowd-attention reading for one ticker. Regenerated on every
/// request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentSnapshot {
    pub ticker: String,

    #[serde(rename = "volume_mencoes")]
    pub mention_volume: i32,

    #[serde(rename = "media_historica")]
    pub historical_average: i32,

    pub ratio: f64,

    #[serde(rename = "risco_manada")]
    pub herd_risk: bool,

    #[serde(rename = "recomendacao")]
    pub recommendation: String,
}

/// Synthetic media-attention signal for an arbitrary ticker string. Not
/// derived from any real feed; with the production source the result changes
/// between calls for the same ticker.
pub fn analyze(ticker: &str, rng: &mut dyn RandomSource) -> SentimentSnapshot {
    let mention_volume = 50 + rng.next_int(0, 220) - 20;
    let ratio = round2(mention_volume as f64 / HISTORICAL_AVERAGE as f64);
    let herd_risk = ratio >= HERD_RISK_RATIO;

    let recommendation = if herd_risk {
        "ALERTA: Possível distribuição"
    } else {
        "Normal"
    };

    SentimentSnapshot {
        ticker: ticker.to_string(),
        mention_volume,
        historical_average: HISTORICAL_AVERAGE,
        ratio,
        herd_risk,
        recommendation: recommendation.to_string(),
    }
}
