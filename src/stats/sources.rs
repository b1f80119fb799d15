//! Read-only collaborator seams for the statistics aggregator

use crate::ledger::ClosedTradeRecord;
use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Provides the persisted closed-trade history for an account
#[async_trait]
pub trait TradeStatisticsSource: Send + Sync {
    /// Fetch every closed trade recorded for the account
    async fn fetch_trades(&self, account_id: Uuid) -> anyhow::Result<Vec<ClosedTradeRecord>>;
}

/// Provides the starting balance for an account
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Fetch the cash the account was funded with
    async fn initial_balance(&self, account_id: Uuid) -> anyhow::Result<Decimal>;
}
