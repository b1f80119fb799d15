//! Account: cash, positions, running statistics, trade-closed fan-out

use super::{ClosedTradeRecord, Position, TradeClosedListener};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use uuid::Uuid;

/// A single paper-trading account.
///
/// Sole owner of its positions; cash moves by exactly the fill notional
/// on every trade and through no other path. Positions are exposed only
/// as cloned snapshots.
pub struct Account {
    /// Account identifier carried on closed-trade records
    pub id: Uuid,
    /// Available cash balance
    pub cash: Decimal,
    /// Cash the account started with
    pub initial_cash: Decimal,
    /// Highest equity observed across all mark-to-market evaluations
    pub max_equity_seen: Decimal,
    /// Closed trades so far (reduces, closes, flips)
    pub total_trades: u64,
    /// Closed trades with positive realized P&L
    pub winning_trades: u64,
    /// Largest single realized gain
    pub max_single_gain: Decimal,
    positions: HashMap<String, Position>,
    listeners: Vec<Box<dyn TradeClosedListener>>,
}

impl Account {
    /// Create an account funded with the given cash
    pub fn new(initial_cash: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            cash: initial_cash,
            initial_cash,
            max_equity_seen: initial_cash,
            total_trades: 0,
            winning_trades: 0,
            max_single_gain: dec!(0),
            positions: HashMap::new(),
            listeners: vec![],
        }
    }

    /// Register a trade-closed observer
    pub fn subscribe(&mut self, listener: Box<dyn TradeClosedListener>) {
        self.listeners.push(listener);
    }

    /// Execute a validated fill against the ledger.
    ///
    /// Cash moves by the fill notional, the position absorbs the fill,
    /// and any realized P&L updates the running statistics and is fanned
    /// out to listeners as a [`ClosedTradeRecord`]. Positions left flat
    /// are removed.
    pub fn execute_trade(
        &mut self,
        ticker: &str,
        is_buy: bool,
        qty: u64,
        price: Decimal,
        time: DateTime<Utc>,
    ) {
        let notional = Decimal::from(qty) * price;
        if is_buy {
            self.cash -= notional;
        } else {
            self.cash += notional;
        }

        let position = self
            .positions
            .entry(ticker.to_string())
            .or_insert_with(|| Position::flat(ticker));

        let was_long = position.is_long;
        let entry_price = position.avg_price;
        let entry_time = position.opened_at;
        let held_before = position.quantity;

        let realized = position.apply_fill(is_buy, qty, price, time);

        if position.is_flat() {
            self.positions.remove(ticker);
        }

        tracing::info!(ticker, is_buy, qty, %price, %realized, "Fill applied");

        if realized != dec!(0) {
            self.total_trades += 1;
            if realized > dec!(0) {
                self.winning_trades += 1;
            }
            self.max_single_gain = self.max_single_gain.max(realized);

            let record = ClosedTradeRecord {
                ticker: ticker.to_string(),
                was_long,
                quantity: qty.min(held_before),
                entry_price,
                exit_price: price,
                realized_pnl: realized,
                entry_time,
                exit_time: time,
                account_id: self.id,
            };
            self.notify_trade_closed(&record);
        }
    }

    /// Fan one record out to every listener, isolating panics per listener
    fn notify_trade_closed(&self, record: &ClosedTradeRecord) {
        for listener in &self.listeners {
            let outcome = catch_unwind(AssertUnwindSafe(|| listener.on_trade_closed(record)));
            if outcome.is_err() {
                tracing::warn!(ticker = %record.ticker, "Trade-closed listener panicked");
            }
        }
    }

    /// Mark-to-market equity: cash plus unrealized P&L over all positions.
    ///
    /// Only the position matching `current_ticker` is marked at
    /// `current_price`; every other position is marked at its own average
    /// cost, because the engine streams one instrument's live price at a
    /// time. Updates the running equity peak as a side effect.
    pub fn total_equity(&mut self, current_price: Decimal, current_ticker: &str) -> Decimal {
        let unrealized: Decimal = self
            .positions
            .values()
            .map(|p| {
                let mark = if p.ticker == current_ticker {
                    current_price
                } else {
                    p.avg_price
                };
                p.unrealized_pnl(mark)
            })
            .sum();

        let equity = self.cash + unrealized;
        self.max_equity_seen = self.max_equity_seen.max(equity);
        equity
    }

    /// Equity gain over the starting cash
    pub fn total_profit(&self, equity: Decimal) -> Decimal {
        equity - self.initial_cash
    }

    /// Profit as a fraction of starting cash; 0 for an unfunded account
    pub fn total_return_rate(&self, equity: Decimal) -> Decimal {
        if self.initial_cash == dec!(0) {
            return dec!(0);
        }
        self.total_profit(equity) / self.initial_cash
    }

    /// Running peak-to-now equity drawdown, never negative
    pub fn max_drawdown(&self, equity: Decimal) -> Decimal {
        (self.max_equity_seen - equity).max(dec!(0))
    }

    /// Fraction of closed trades that won; 0 with no closed trades
    pub fn win_rate(&self) -> Decimal {
        if self.total_trades == 0 {
            return dec!(0);
        }
        Decimal::from(self.winning_trades) / Decimal::from(self.total_trades)
    }

    /// Closed trades with non-positive realized P&L
    pub fn losing_trades(&self) -> u64 {
        self.total_trades - self.winning_trades
    }

    /// Cloned snapshot of all open positions
    pub fn positions(&self) -> Vec<Position> {
        self.positions.values().cloned().collect()
    }

    /// Cloned view of one position, if held
    pub fn position(&self, ticker: &str) -> Option<Position> {
        self.positions.get(ticker).cloned()
    }

    /// Number of open positions
    pub fn open_positions(&self) -> usize {
        self.positions.len()
    }
}
