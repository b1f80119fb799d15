//! CSV-backed history source
//!
//! Reads `<dir>/<TICKER>.csv` with a `timestamp,open,high,low,close[,volume]`
//! header. Rows must be in ascending timestamp order.

use super::{Candle, HistoryError, MarketHistorySource};
use async_trait::async_trait;
use std::path::PathBuf;

/// Loads candle history from per-ticker CSV files
pub struct CsvHistorySource {
    base_dir: PathBuf,
}

impl CsvHistorySource {
    /// Create a source rooted at the given directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn csv_path(&self, ticker: &str) -> PathBuf {
        self.base_dir.join(format!("{ticker}.csv"))
    }

    fn read_candles(&self, ticker: &str) -> Result<Vec<Candle>, HistoryError> {
        let path = self.csv_path(ticker);
        if !path.exists() {
            return Err(HistoryError::NotFound(ticker.to_string()));
        }

        let mut reader = csv::Reader::from_path(&path)
            .map_err(|e| HistoryError::Malformed(ticker.to_string(), e.to_string()))?;

        let mut candles: Vec<Candle> = Vec::new();
        for (row, result) in reader.deserialize::<Candle>().enumerate() {
            let candle =
                result.map_err(|e| HistoryError::Malformed(ticker.to_string(), e.to_string()))?;
            if let Some(prev) = candles.last() {
                if candle.timestamp <= prev.timestamp {
                    return Err(HistoryError::OutOfOrder(ticker.to_string(), row));
                }
            }
            candles.push(candle);
        }

        if candles.is_empty() {
            return Err(HistoryError::NotFound(ticker.to_string()));
        }

        Ok(candles)
    }
}

#[async_trait]
impl MarketHistorySource for CsvHistorySource {
    async fn load_history(&self, ticker: &str) -> Result<Vec<Candle>, HistoryError> {
        // File reads are small and bounded; no need to spawn_blocking here
        let candles = self.read_candles(ticker)?;
        tracing::debug!(ticker, candles = candles.len(), "Loaded history");
        Ok(candles)
    }
}
