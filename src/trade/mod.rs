//! Trade interactor module
//!
//! Validates a buy/sell request and executes it against the account.
//! Orders either fully execute at the supplied price or are rejected;
//! there are no partial fills.

use crate::ledger::Account;
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Trade validation errors; none of these mutate the account
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TradeError {
    /// Requested cash amount was zero or negative
    #[error("Trade amount must be positive")]
    NonPositiveAmount,
    /// Amount buys less than one whole unit at the current price
    #[error("Amount too low to trade one unit at {price}")]
    AmountTooLow {
        /// Price the request was validated against
        price: Decimal,
    },
    /// Buy notional exceeds available cash
    #[error("Insufficient funds: need {required}, have {available}")]
    InsufficientFunds {
        /// Notional the order would cost
        required: Decimal,
        /// Cash currently available
        available: Decimal,
    },
    /// Current price is unusable for sizing
    #[error("Invalid price {0}")]
    InvalidPrice(Decimal),
}

/// Successful execution report
#[derive(Debug, Clone, Serialize)]
pub struct TradeReceipt {
    /// Units executed
    pub quantity: u64,
    /// Cash balance after the fill
    pub cash_after: Decimal,
    /// Human-readable confirmation
    pub summary: String,
}

/// Validates and executes single trade requests against a shared account
pub struct TradeInteractor {
    account: Arc<Mutex<Account>>,
}

impl TradeInteractor {
    /// Create an interactor over a shared account
    pub fn new(account: Arc<Mutex<Account>>) -> Self {
        Self { account }
    }

    /// Size, validate, and execute one trade.
    ///
    /// The cash amount is converted to whole units at the current price;
    /// the order executes fully at that price or not at all.
    pub fn execute(
        &self,
        ticker: &str,
        is_buy: bool,
        cash_amount: Decimal,
        current_price: Decimal,
        time: DateTime<Utc>,
    ) -> Result<TradeReceipt, TradeError> {
        if cash_amount <= dec!(0) {
            return Err(TradeError::NonPositiveAmount);
        }
        if current_price <= dec!(0) {
            return Err(TradeError::InvalidPrice(current_price));
        }

        let quantity = (cash_amount / current_price)
            .floor()
            .to_u64()
            .unwrap_or(0);
        if quantity == 0 {
            return Err(TradeError::AmountTooLow {
                price: current_price,
            });
        }

        let notional = Decimal::from(quantity) * current_price;

        let mut account = self.account.lock().expect("account mutex poisoned");
        if is_buy && notional > account.cash {
            return Err(TradeError::InsufficientFunds {
                required: notional,
                available: account.cash,
            });
        }

        account.execute_trade(ticker, is_buy, quantity, current_price, time);

        let verb = if is_buy { "Bought" } else { "Sold" };
        let summary = format!("{verb} {quantity} shares of {ticker} at ${current_price}");
        tracing::info!(ticker, is_buy, quantity, %current_price, "Trade executed");

        Ok(TradeReceipt {
            quantity,
            cash_after: account.cash,
            summary,
        })
    }
}
