//! Market history module
//!
//! Provides historical candle data through the `MarketHistorySource` seam

mod csv_source;
mod memory;
mod types;

pub use csv_source::CsvHistorySource;
pub use memory::MemoryHistorySource;
pub use types::Candle;

use async_trait::async_trait;
use thiserror::Error;

/// History loading errors
#[derive(Debug, Error)]
pub enum HistoryError {
    /// No candles exist for the requested ticker
    #[error("No history available for {0}")]
    NotFound(String),
    /// The source returned candles out of timestamp order
    #[error("History for {0} is not ordered at row {1}")]
    OutOfOrder(String, usize),
    /// A row could not be parsed
    #[error("Malformed history for {0}: {1}")]
    Malformed(String, String),
    /// Underlying I/O failure
    #[error("Failed to read history: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for historical candle providers
#[async_trait]
pub trait MarketHistorySource: Send + Sync {
    /// Load the full ordered candle history for a ticker
    async fn load_history(&self, ticker: &str) -> Result<Vec<Candle>, HistoryError>;
}
