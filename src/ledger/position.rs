//! Single-instrument position with weighted-average cost

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// An open holding in one instrument.
///
/// `quantity == 0` means the position is flat; its `avg_price` and
/// direction carry no meaning and the owning account removes it. All
/// mutation goes through [`Position::apply_fill`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Instrument ticker
    pub ticker: String,
    /// Direction: long (true) or short (false)
    pub is_long: bool,
    /// Number of units held
    pub quantity: u64,
    /// Quantity-weighted average entry price
    pub avg_price: Decimal,
    /// When the current direction was first entered
    pub opened_at: DateTime<Utc>,
}

impl Position {
    /// Create a flat position for a ticker
    pub fn flat(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            is_long: true,
            quantity: 0,
            avg_price: dec!(0),
            opened_at: Utc::now(),
        }
    }

    /// Whether the position holds no units
    pub fn is_flat(&self) -> bool {
        self.quantity == 0
    }

    /// Apply one fill and return the realized P&L.
    ///
    /// Opening and same-direction increases realize nothing. An
    /// opposite-direction fill realizes P&L on the portion that existed:
    /// a partial or exact close keeps direction and average price; a fill
    /// larger than the position flips it, reopening the remainder in the
    /// opposite direction at the fill price.
    pub fn apply_fill(
        &mut self,
        is_buy: bool,
        qty: u64,
        price: Decimal,
        time: DateTime<Utc>,
    ) -> Decimal {
        debug_assert!(qty > 0, "fills carry a positive quantity");

        if self.quantity == 0 {
            self.is_long = is_buy;
            self.quantity = qty;
            self.avg_price = price;
            self.opened_at = time;
            return dec!(0);
        }

        if is_buy == self.is_long {
            // Increase: re-weight the average entry price
            let held = Decimal::from(self.quantity);
            let added = Decimal::from(qty);
            self.avg_price = (self.avg_price * held + price * added) / (held + added);
            self.quantity += qty;
            return dec!(0);
        }

        let price_diff = if self.is_long {
            price - self.avg_price
        } else {
            self.avg_price - price
        };

        if qty <= self.quantity {
            // Partial or exact close; direction and avg_price stay put
            self.quantity -= qty;
            return price_diff * Decimal::from(qty);
        }

        // Flip: realize on what existed, reopen the rest opposite
        let realized = price_diff * Decimal::from(self.quantity);
        self.is_long = is_buy;
        self.quantity = qty - self.quantity;
        self.avg_price = price;
        self.opened_at = time;
        realized
    }

    /// Mark-to-market P&L at a hypothetical current price; 0 when flat
    pub fn unrealized_pnl(&self, current_price: Decimal) -> Decimal {
        if self.quantity == 0 {
            return dec!(0);
        }
        let diff = if self.is_long {
            current_price - self.avg_price
        } else {
            self.avg_price - current_price
        };
        diff * Decimal::from(self.quantity)
    }
}
