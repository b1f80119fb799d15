//! End-to-end integration tests
//!
//! Runs a full replay: in-memory history, tick-driven driver, trades
//! placed through the interactor mid-run, and closed-trade records
//! collected by a listener.

use chrono::{Duration, Utc};
use papersim::config::SimulationConfig;
use papersim::feed::{Candle, MemoryHistorySource};
use papersim::ledger::{Account, ClosedTradeRecord, TradeClosedListener};
use papersim::sim::{SimulationDriver, TickEvent};
use papersim::stats::StatisticsAggregator;
use papersim::trade::TradeInteractor;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

struct Collector {
    records: Arc<Mutex<Vec<ClosedTradeRecord>>>,
}

impl TradeClosedListener for Collector {
    fn on_trade_closed(&self, record: &ClosedTradeRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}

fn history() -> Vec<Candle> {
    let start = Utc::now();
    vec![
        Candle {
            timestamp: start,
            open: dec!(100),
            high: dec!(110),
            low: dec!(90),
            close: dec!(105),
            volume: Some(dec!(5000)),
        },
        Candle {
            timestamp: start + Duration::minutes(1),
            open: dec!(105),
            high: dec!(120),
            low: dec!(100),
            close: dec!(115),
            volume: Some(dec!(4200)),
        },
    ]
}

#[tokio::test]
async fn test_full_replay_with_trades() {
    let mut source = MemoryHistorySource::new();
    source.insert("ACME", history());

    let records = Arc::new(Mutex::new(vec![]));
    let account = Arc::new(Mutex::new(Account::new(dec!(10000))));
    account.lock().unwrap().subscribe(Box::new(Collector {
        records: records.clone(),
    }));

    // Four ticks per candle lands one tick on each OHLC anchor
    let config = SimulationConfig {
        base_ticks_per_minute: 4,
        speed_factor: 1,
        initial_cash: dec!(10000),
    };
    let mut driver = SimulationDriver::new(Arc::new(source), Arc::clone(&account), &config);
    let interactor = TradeInteractor::new(Arc::clone(&account));

    driver.load_and_start("ACME").await.unwrap();

    // Tick 1: open of candle one
    let TickEvent::Snapshot(snapshot) = driver.tick() else {
        panic!("expected a snapshot");
    };
    assert_eq!(snapshot.price, dec!(100));

    let receipt = interactor
        .execute("ACME", true, dec!(1000), snapshot.price, Utc::now())
        .unwrap();
    assert_eq!(receipt.quantity, 10);
    assert_eq!(receipt.cash_after, dec!(9000));

    // Tick 2: candle high, long 10 from 100 marked at 110
    let TickEvent::Snapshot(snapshot) = driver.tick() else {
        panic!("expected a snapshot");
    };
    assert_eq!(snapshot.price, dec!(110));
    assert_eq!(snapshot.equity, dec!(9100));
    assert_eq!(snapshot.positions.len(), 1);

    // Ticks 3-5: low, close, then open of candle two
    for expected in [dec!(90), dec!(105), dec!(105)] {
        let TickEvent::Snapshot(snapshot) = driver.tick() else {
            panic!("expected a snapshot");
        };
        assert_eq!(snapshot.price, expected);
    }

    // Close the whole position at 105 for +50 realized
    let receipt = interactor
        .execute("ACME", false, dec!(1050), dec!(105), Utc::now())
        .unwrap();
    assert_eq!(receipt.quantity, 10);
    assert_eq!(receipt.cash_after, dec!(10050));

    // Drain the rest of the run
    let mut remaining = 0;
    while let TickEvent::Snapshot(snapshot) = driver.tick() {
        assert!(snapshot.positions.is_empty());
        remaining += 1;
    }
    assert_eq!(remaining, 3);
    assert!(matches!(driver.tick(), TickEvent::Ended));

    // Ledger and emitted records agree
    let account = account.lock().unwrap();
    assert_eq!(account.cash, dec!(10050));
    assert_eq!(account.total_trades, 1);
    assert_eq!(account.winning_trades, 1);
    assert_eq!(account.max_single_gain, dec!(50));
    assert_eq!(account.open_positions(), 0);

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].realized_pnl, dec!(50));
    assert_eq!(records[0].entry_price, dec!(100));
    assert_eq!(records[0].exit_price, dec!(105));
    assert!(records[0].was_long);
}

#[tokio::test]
async fn test_replay_statistics_match_ledger() {
    let mut source = MemoryHistorySource::new();
    source.insert("ACME", history());

    let records = Arc::new(Mutex::new(vec![]));
    let account = Arc::new(Mutex::new(Account::new(dec!(10000))));
    account.lock().unwrap().subscribe(Box::new(Collector {
        records: records.clone(),
    }));

    let config = SimulationConfig {
        base_ticks_per_minute: 4,
        speed_factor: 1,
        initial_cash: dec!(10000),
    };
    let mut driver = SimulationDriver::new(Arc::new(source), Arc::clone(&account), &config);
    let interactor = TradeInteractor::new(Arc::clone(&account));

    driver.load_and_start("ACME").await.unwrap();

    // One winning close and one losing close over the run
    driver.tick();
    interactor
        .execute("ACME", true, dec!(1000), dec!(100), Utc::now())
        .unwrap();
    interactor
        .execute("ACME", false, dec!(550), dec!(110), Utc::now())
        .unwrap();
    interactor
        .execute("ACME", false, dec!(475), dec!(95), Utc::now())
        .unwrap();
    while let TickEvent::Snapshot(_) = driver.tick() {}

    let records = records.lock().unwrap();
    let stats = StatisticsAggregator::new().compute(&records, dec!(10000));

    let account = account.lock().unwrap();
    assert_eq!(stats.total_trades as u64, account.total_trades);
    assert_eq!(stats.winning_trades as u64, account.winning_trades);
    assert_eq!(stats.max_gain, account.max_single_gain);
    // (110-100)*5 then (95-100)*5
    assert_eq!(stats.total_profit, dec!(25));
    assert_eq!(stats.worst_trade_loss, dec!(25));
    assert_eq!(stats.win_rate_pct, dec!(50));
}
