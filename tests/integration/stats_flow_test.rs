//! Offline statistics pipeline tests
//!
//! Exercises the persisted-record path: records serialized to JSON, read
//! back, and folded by the aggregator, as the stats CLI does.

use chrono::{Duration, Utc};
use papersim::cli::StatsArgs;
use papersim::config::Config;
use papersim::ledger::ClosedTradeRecord;
use papersim::stats::StatisticsAggregator;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::Write;
use uuid::Uuid;

fn record(pnl: Decimal) -> ClosedTradeRecord {
    let entry = Utc::now();
    ClosedTradeRecord {
        ticker: "ACME".to_string(),
        was_long: true,
        quantity: 10,
        entry_price: dec!(100),
        exit_price: dec!(100) + pnl / dec!(10),
        realized_pnl: pnl,
        entry_time: entry,
        exit_time: entry + Duration::minutes(2),
        account_id: Uuid::new_v4(),
    }
}

#[test]
fn test_records_survive_json_roundtrip() {
    let trades = vec![record(dec!(120)), record(dec!(-45))];

    let json = serde_json::to_string(&trades).unwrap();
    let restored: Vec<ClosedTradeRecord> = serde_json::from_str(&json).unwrap();

    let before = StatisticsAggregator::new().compute(&trades, dec!(1000));
    let after = StatisticsAggregator::new().compute(&restored, dec!(1000));

    assert_eq!(before.total_profit, after.total_profit);
    assert_eq!(before.worst_trade_loss, after.worst_trade_loss);
    assert_eq!(before.win_rate_pct, after.win_rate_pct);
    assert_eq!(after.total_profit, dec!(75));
}

#[tokio::test]
async fn test_stats_command_reads_trade_file() {
    let trades = vec![record(dec!(200)), record(dec!(-80)), record(dec!(30))];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trades.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", serde_json::to_string(&trades).unwrap()).unwrap();

    let args = StatsArgs {
        trades: path,
        initial_balance: Some(dec!(5000)),
    };
    args.execute(&Config::default()).await.unwrap();
}

#[tokio::test]
async fn test_stats_command_missing_file_fails() {
    let args = StatsArgs {
        trades: "/nonexistent/trades.json".into(),
        initial_balance: None,
    };
    assert!(args.execute(&Config::default()).await.is_err());
}
