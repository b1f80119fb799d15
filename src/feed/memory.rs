//! In-memory history source for tests and batch replays

use super::{Candle, HistoryError, MarketHistorySource};
use async_trait::async_trait;
use std::collections::HashMap;

/// Serves preloaded candle history straight from memory
#[derive(Default)]
pub struct MemoryHistorySource {
    histories: HashMap<String, Vec<Candle>>,
}

impl MemoryHistorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload history for a ticker, replacing any existing candles
    pub fn insert(&mut self, ticker: impl Into<String>, candles: Vec<Candle>) {
        self.histories.insert(ticker.into(), candles);
    }
}

#[async_trait]
impl MarketHistorySource for MemoryHistorySource {
    async fn load_history(&self, ticker: &str) -> Result<Vec<Candle>, HistoryError> {
        match self.histories.get(ticker) {
            Some(candles) if !candles.is_empty() => Ok(candles.clone()),
            _ => Err(HistoryError::NotFound(ticker.to_string())),
        }
    }
}
