//! Stats command implementation

use crate::config::Config;
use crate::ledger::ClosedTradeRecord;
use crate::stats::StatisticsAggregator;
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// JSON file holding an array of closed-trade records
    #[arg(short, long)]
    pub trades: PathBuf,

    /// Initial balance; defaults to the configured starting cash
    #[arg(short, long)]
    pub initial_balance: Option<Decimal>,
}

impl StatsArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(&self.trades)?;
        let trades: Vec<ClosedTradeRecord> = serde_json::from_str(&content)?;

        let initial_balance = self
            .initial_balance
            .unwrap_or(config.simulation.initial_cash);

        let stats = StatisticsAggregator::new().compute(&trades, initial_balance);
        println!("{}", stats.format_table());
        Ok(())
    }
}
