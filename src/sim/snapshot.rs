//! Per-tick simulation output

use crate::ledger::Position;
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything an observer needs to render one tick of the simulation
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSnapshot {
    /// Synthetic price at this tick
    pub price: Decimal,
    /// Mark-to-market equity at this price
    pub equity: Decimal,
    /// Profit as a fraction of starting cash
    pub return_rate: Decimal,
    /// Running peak-to-now equity drawdown
    pub drawdown: Decimal,
    /// Available cash
    pub cash: Decimal,
    /// Closed trades so far
    pub total_trades: u64,
    /// Fraction of closed trades that won
    pub win_rate: Decimal,
    /// Largest single realized gain
    pub max_gain: Decimal,
    /// Cloned view of open positions
    pub positions: Vec<Position>,
    /// Every price emitted so far this run, for charting
    pub price_history: Vec<Decimal>,
}
