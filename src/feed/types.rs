//! Historical price types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One OHLC(V) bar of historical data at a fixed granularity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    /// Bar open timestamp
    pub timestamp: DateTime<Utc>,
    /// Opening price
    pub open: Decimal,
    /// Highest traded price
    pub high: Decimal,
    /// Lowest traded price
    pub low: Decimal,
    /// Closing price
    pub close: Decimal,
    /// Traded volume, when the source provides it
    #[serde(default)]
    pub volume: Option<Decimal>,
}
