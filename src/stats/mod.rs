//! Portfolio statistics module
//!
//! Batch aggregation over persisted closed-trade records, decoupled from
//! the live simulation loop.

mod aggregator;
mod sources;

pub use aggregator::{StatisticsAggregator, TradeStatistics};
pub use sources::{BalanceSource, TradeStatisticsSource};
