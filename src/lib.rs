//! papersim: paper-trading simulator over historical candle data
//!
//! This library provides the core components for:
//! - Historical candle loading through the `MarketHistorySource` seam
//! - Synthetic intra-candle tick generation at a configurable speed
//! - Position and account bookkeeping with weighted-average cost,
//!   realized P&L, and direction flips
//! - A tick-driven simulation driver emitting per-tick state snapshots
//! - Trade validation and execution against the simulated account
//! - Batch portfolio statistics over closed-trade history

pub mod cli;
pub mod config;
pub mod feed;
pub mod ledger;
pub mod sim;
pub mod stats;
pub mod telemetry;
pub mod ticks;
pub mod trade;
