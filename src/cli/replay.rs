//! Replay command implementation

use crate::config::Config;
use crate::feed::CsvHistorySource;
use crate::ledger::Account;
use crate::sim::{SimulationDriver, TickEvent};
use clap::Args;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Ticker to replay
    #[arg(short, long)]
    pub ticker: String,

    /// Override the configured speed factor
    #[arg(short, long)]
    pub speed: Option<u32>,

    /// Wall-clock milliseconds between ticks
    #[arg(long, default_value_t = 100)]
    pub interval_ms: u64,
}

impl ReplayArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut sim_config = config.simulation.clone();
        if let Some(speed) = self.speed {
            sim_config.speed_factor = speed;
        }

        let source = Arc::new(CsvHistorySource::new(config.data.history_dir.clone()));
        let account = Arc::new(Mutex::new(Account::new(sim_config.initial_cash)));
        let mut driver = SimulationDriver::new(source, Arc::clone(&account), &sim_config);

        driver.load_and_start(&self.ticker).await?;
        tracing::info!(ticker = %self.ticker, speed = sim_config.speed_factor, "Replay started");

        let mut interval = tokio::time::interval(Duration::from_millis(self.interval_ms));
        let mut last_equity = sim_config.initial_cash;

        loop {
            interval.tick().await;
            match driver.tick() {
                TickEvent::Snapshot(snapshot) => {
                    last_equity = snapshot.equity;
                    tracing::info!(
                        price = %snapshot.price,
                        equity = %snapshot.equity,
                        drawdown = %snapshot.drawdown,
                        trades = snapshot.total_trades,
                        "Tick"
                    );
                }
                TickEvent::Ended => break,
            }
        }

        let account = account.lock().expect("account mutex poisoned");
        println!("Replay of {} finished", self.ticker);
        println!("  Final equity:  {last_equity:.2}");
        println!("  Cash:          {:.2}", account.cash);
        println!("  Total profit:  {:.2}", account.total_profit(last_equity));
        println!("  Closed trades: {}", account.total_trades);
        Ok(())
    }
}
