//! Tick-driven simulation driver
//!
//! Walks loaded candle history one synthetic tick at a time, asking the
//! account for an equity snapshot at every step. The host decides the
//! cadence: each call to [`SimulationDriver::tick`] advances simulated
//! time by exactly one tick, whatever the wall clock does.

use super::{SimError, SimulationSnapshot, TickEvent};
use crate::config::SimulationConfig;
use crate::feed::{Candle, MarketHistorySource};
use crate::ledger::Account;
use crate::ticks::{ticks_per_candle, TickGenerator};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

/// Replays one ticker's history against a shared account
pub struct SimulationDriver {
    source: Arc<dyn MarketHistorySource>,
    account: Arc<Mutex<Account>>,
    generator: TickGenerator,
    base_ticks_per_minute: u32,
    speed_factor: u32,
    ticker: String,
    history: Vec<Candle>,
    candle_index: usize,
    tick_index: usize,
    current_ticks: Vec<Decimal>,
    price_history: Vec<Decimal>,
    running: bool,
}

impl SimulationDriver {
    /// Create a driver over a history source and a shared account
    pub fn new(
        source: Arc<dyn MarketHistorySource>,
        account: Arc<Mutex<Account>>,
        config: &SimulationConfig,
    ) -> Self {
        Self {
            source,
            account,
            generator: TickGenerator::new(),
            base_ticks_per_minute: config.base_ticks_per_minute,
            speed_factor: config.speed_factor,
            ticker: String::new(),
            history: vec![],
            candle_index: 0,
            tick_index: 0,
            current_ticks: vec![],
            price_history: vec![],
            running: false,
        }
    }

    /// Load full history for a ticker and arm the first tick sequence.
    ///
    /// Empty or unavailable history is fatal for the run: the driver
    /// stays stopped and the error is returned to the host.
    pub async fn load_and_start(&mut self, ticker: &str) -> Result<(), SimError> {
        let history = self.source.load_history(ticker).await?;
        if history.is_empty() {
            return Err(SimError::NoHistory(ticker.to_string()));
        }

        tracing::info!(ticker, candles = history.len(), "Simulation loaded");

        self.ticker = ticker.to_string();
        self.history = history;
        self.candle_index = 0;
        self.tick_index = 0;
        self.price_history.clear();
        self.current_ticks = self
            .generator
            .generate(&self.history[0], self.ticks_per_candle());
        self.running = true;
        Ok(())
    }

    /// Advance simulated time by one tick.
    ///
    /// Emits a snapshot at the current synthetic price, or
    /// [`TickEvent::Ended`] once history is exhausted. `Ended` is
    /// terminal for the loaded run.
    pub fn tick(&mut self) -> TickEvent {
        if !self.running || self.candle_index >= self.history.len() {
            return TickEvent::Ended;
        }

        let price = self.current_ticks[self.tick_index];
        self.price_history.push(price);

        let snapshot = {
            let mut account = self.account.lock().expect("account mutex poisoned");
            let equity = account.total_equity(price, &self.ticker);
            SimulationSnapshot {
                price,
                equity,
                return_rate: account.total_return_rate(equity),
                drawdown: account.max_drawdown(equity),
                cash: account.cash,
                total_trades: account.total_trades,
                win_rate: account.win_rate(),
                max_gain: account.max_single_gain,
                positions: account.positions(),
                price_history: self.price_history.clone(),
            }
        };

        self.advance();
        TickEvent::Snapshot(snapshot)
    }

    /// Change the replay speed; applies from the next generated sequence
    pub fn set_speed(&mut self, speed_factor: u32) {
        self.speed_factor = speed_factor;
    }

    /// Ticker currently loaded, if any
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    fn ticks_per_candle(&self) -> usize {
        ticks_per_candle(self.base_ticks_per_minute, self.speed_factor)
    }

    fn advance(&mut self) {
        self.tick_index += 1;
        if self.tick_index < self.current_ticks.len() {
            return;
        }

        self.tick_index = 0;
        self.candle_index += 1;
        if self.candle_index < self.history.len() {
            self.current_ticks = self
                .generator
                .generate(&self.history[self.candle_index], self.ticks_per_candle());
        } else {
            tracing::info!(ticker = %self.ticker, "Simulation history exhausted");
        }
    }
}
