//! Simulation module
//!
//! Tick-driven replay of candle history against an account

mod driver;
mod snapshot;

pub use driver::SimulationDriver;
pub use snapshot::SimulationSnapshot;

use crate::feed::HistoryError;
use thiserror::Error;

/// Fatal simulation-run errors
#[derive(Debug, Error)]
pub enum SimError {
    /// The source had no candles for the requested ticker
    #[error("No history available for {0}")]
    NoHistory(String),
    /// The history source failed
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Outcome of advancing the simulation by one tick.
///
/// `Ended` is normal completion, not a failure: the host distinguishes
/// "nothing left to replay" from errors by type.
#[derive(Debug)]
pub enum TickEvent {
    /// One tick's worth of market and account state
    Snapshot(SimulationSnapshot),
    /// History is exhausted; terminal for this run
    Ended,
}
