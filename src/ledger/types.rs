//! Ledger event types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable fact describing a reduce, close, or flip of a position.
///
/// Produced once by the account, fanned out to listeners, never mutated.
/// Increases never produce a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosedTradeRecord {
    /// Instrument ticker
    pub ticker: String,
    /// Direction of the position that was reduced
    pub was_long: bool,
    /// Units closed by this fill
    pub quantity: u64,
    /// Average entry price of the closed portion
    pub entry_price: Decimal,
    /// Price the closing fill executed at
    pub exit_price: Decimal,
    /// Profit or loss locked in by the fill
    pub realized_pnl: Decimal,
    /// When the position direction was entered
    pub entry_time: DateTime<Utc>,
    /// When the closing fill executed
    pub exit_time: DateTime<Utc>,
    /// Owning account
    pub account_id: Uuid,
}

/// Observer notified synchronously whenever a trade closes.
///
/// Fire-and-forget: no return value, and a panicking listener is isolated
/// from the account and from other listeners.
pub trait TradeClosedListener: Send + Sync {
    /// Receive one closed-trade record
    fn on_trade_closed(&self, record: &ClosedTradeRecord);
}
