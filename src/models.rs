use serde::{Deserialize, Serialize};

/// One market data point as the host pipeline ships it. Only `price` and
/// `volume` participate in filtering; `bid`/`ask` pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tick {
    pub symbol: String,
    pub price: f32,
    pub volume: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bid: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<f32>,
}
