//! Closed-trade statistics aggregation

use super::{BalanceSource, TradeStatisticsSource};
use crate::ledger::ClosedTradeRecord;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use uuid::Uuid;

/// Aggregate performance over a list of closed trades.
///
/// `worst_trade_loss` is the single worst trade's loss, deliberately
/// named apart from the account's running peak-to-now `max_drawdown`:
/// the two are different metrics and must stay distinct.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TradeStatistics {
    /// Sum of realized P&L over all trades
    pub total_profit: Decimal,
    /// Largest single winning trade; 0 with no winners
    pub max_gain: Decimal,
    /// Magnitude of the single worst losing trade; 0 with no losers
    pub worst_trade_loss: Decimal,
    /// Number of closed trades
    pub total_trades: usize,
    /// Trades with positive realized P&L
    pub winning_trades: usize,
    /// Trades with negative realized P&L
    pub losing_trades: usize,
    /// Winning percentage of all trades; 0 with no trades
    pub win_rate_pct: Decimal,
    /// Total profit as a percentage of the initial balance; 0 if unfunded
    pub total_return_pct: Decimal,
    /// Entry time of the earliest trade
    pub first_entry_time: Option<DateTime<Utc>>,
    /// Entry time of the latest trade
    pub last_entry_time: Option<DateTime<Utc>>,
}

impl TradeStatistics {
    /// Human-readable trading span, "no trades" when empty
    pub fn span(&self) -> String {
        match (self.first_entry_time, self.last_entry_time) {
            (Some(first), Some(last)) => format!(
                "{} to {}",
                first.format("%Y-%m-%d %H:%M UTC"),
                last.format("%Y-%m-%d %H:%M UTC")
            ),
            _ => "no trades".to_string(),
        }
    }

    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        format!(
            r#"
══════════════════════════════════════════════════════
               PORTFOLIO STATISTICS
══════════════════════════════════════════════════════

PERFORMANCE
───────────────────────────────────────────────────────
Total Profit:     {:+.2} ({:+.2}%)
Max Gain:         {:.2}
Worst Trade:      {:.2}
Win Rate:         {:.1}%

ACTIVITY
───────────────────────────────────────────────────────
Total Trades:     {} ({} won / {} lost)
Trading Span:     {}
══════════════════════════════════════════════════════
"#,
            self.total_profit,
            self.total_return_pct,
            self.max_gain,
            self.worst_trade_loss,
            self.win_rate_pct,
            self.total_trades,
            self.winning_trades,
            self.losing_trades,
            self.span(),
        )
    }
}

/// Folds closed-trade records into portfolio statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    /// Create a new aggregator
    pub fn new() -> Self {
        Self
    }

    /// Compute statistics over a closed-trade history.
    ///
    /// An empty history yields all-zero fields and no timestamps,
    /// whatever the initial balance.
    pub fn compute(
        &self,
        trades: &[ClosedTradeRecord],
        initial_balance: Decimal,
    ) -> TradeStatistics {
        if trades.is_empty() {
            return TradeStatistics::default();
        }

        let total_profit: Decimal = trades.iter().map(|t| t.realized_pnl).sum();
        let winning_trades = trades.iter().filter(|t| t.realized_pnl > dec!(0)).count();
        let losing_trades = trades.iter().filter(|t| t.realized_pnl < dec!(0)).count();

        let max_gain = trades
            .iter()
            .map(|t| t.realized_pnl)
            .filter(|pnl| *pnl > dec!(0))
            .max()
            .unwrap_or(dec!(0));
        let worst_trade_loss = trades
            .iter()
            .map(|t| t.realized_pnl)
            .filter(|pnl| *pnl < dec!(0))
            .min()
            .unwrap_or(dec!(0))
            .abs();

        let win_rate_pct =
            Decimal::from(winning_trades) / Decimal::from(trades.len()) * dec!(100);
        let total_return_pct = if initial_balance == dec!(0) {
            dec!(0)
        } else {
            total_profit / initial_balance * dec!(100)
        };

        TradeStatistics {
            total_profit,
            max_gain,
            worst_trade_loss,
            total_trades: trades.len(),
            winning_trades,
            losing_trades,
            win_rate_pct,
            total_return_pct,
            first_entry_time: trades.iter().map(|t| t.entry_time).min(),
            last_entry_time: trades.iter().map(|t| t.entry_time).max(),
        }
    }

    /// Fetch an account's history and balance, then compute statistics
    pub async fn compute_for_account(
        &self,
        trades: &dyn TradeStatisticsSource,
        balances: &dyn BalanceSource,
        account_id: Uuid,
    ) -> anyhow::Result<TradeStatistics> {
        let history = trades.fetch_trades(account_id).await?;
        let initial_balance = balances.initial_balance(account_id).await?;
        Ok(self.compute(&history, initial_balance))
    }
}
