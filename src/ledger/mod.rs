//! Ledger module
//!
//! Position and account bookkeeping: weighted-average cost, realized and
//! unrealized P&L, direction flips, and trade-closed notifications

mod account;
mod position;
mod types;

pub use account::Account;
pub use position::Position;
pub use types::{ClosedTradeRecord, TradeClosedListener};
