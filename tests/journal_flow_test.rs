mod common;

use common::{MockApiPort, make_strategy, make_trade};
use trademate::adapters::csv_export;
use trademate::adapters::session_file_adapter::SessionFileAdapter;
use trademate::cli::{TradeUpdateArgs, apply_trade_updates, fetch_journal};
use trademate::domain::trade::TradeStatus;
use trademate::ports::api_port::ApiPort;
use trademate::ports::session_port::{Session, SessionPort};

#[test]
fn record_then_list_round_trip() {
    let api = MockApiPort::new();
    let draft = {
        let mut t = make_trade(0, "2025-06-10 09:00:00", 12.0, Some(2));
        t.id = None;
        t
    };
    let created = api.create_trade(&draft).unwrap();
    assert!(created.id.is_some());

    let today = "2025-06-10".parse().unwrap();
    let (trades, alerts) = fetch_journal(&api, today).unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].id, created.id);
    assert!(!alerts.any());
}

#[test]
fn edit_flow_revalidates_and_persists() {
    let api = MockApiPort::new().with_trade(make_trade(7, "2025-06-09 09:00:00", 30.0, Some(2)));

    let mut trade = api
        .list_trades()
        .unwrap()
        .into_iter()
        .find(|t| t.id == Some(7))
        .unwrap();
    let changes = TradeUpdateArgs {
        status: Some(TradeStatus::Breakeven),
        exit: Some(1.08),
        ..Default::default()
    };
    apply_trade_updates(&mut trade, &changes).unwrap();
    api.update_trade(7, &trade).unwrap();

    let stored = &api.list_trades().unwrap()[0];
    assert_eq!(stored.status, TradeStatus::Breakeven);
    assert_eq!(stored.exit_price, 1.08);
}

#[test]
fn delete_removes_the_trade() {
    let api = MockApiPort::new()
        .with_trade(make_trade(1, "2025-06-09 09:00:00", 10.0, None))
        .with_trade(make_trade(2, "2025-06-09 10:00:00", -4.0, None));
    api.delete_trade(1).unwrap();
    let trades = api.list_trades().unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].id, Some(2));
}

#[test]
fn losing_streak_today_raises_revenge_alert() {
    let mut api = MockApiPort::new();
    for (id, hour) in [(1, 9), (2, 10), (3, 11), (4, 12)] {
        api = api.with_trade(make_trade(
            id,
            &format!("2025-06-10 {hour:02}:00:00"),
            -8.0,
            Some(2),
        ));
    }
    let today = "2025-06-10".parse().unwrap();
    let (_, alerts) = fetch_journal(&api, today).unwrap();
    assert!(alerts.revenge_trading);
    assert!(alerts.over_trading);
    assert_eq!(alerts.losing_trades_today, 4);
}

#[test]
fn export_writes_listed_trades_to_csv() {
    let api = MockApiPort::new()
        .with_trade(make_trade(1, "2025-06-09 09:00:00", 10.0, Some(2)))
        .with_trade(make_trade(2, "2025-06-09 11:00:00", -4.0, Some(2)));
    let trades = api.list_trades().unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("journal.csv");
    csv_export::export_trades(&path, &trades).unwrap();

    let out = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Open Date"));
    assert!(lines[1].contains("EUR/USD"));
    assert!(lines[2].contains("-4.00"));
}

#[test]
fn strategy_trades_only_returns_matching_entries() {
    let api = MockApiPort::new()
        .with_strategy(make_strategy(5, "London Breakout", 61.5))
        .with_trade(make_trade(1, "2025-06-09 09:00:00", 10.0, Some(5)))
        .with_trade(make_trade(2, "2025-06-09 10:00:00", 3.0, Some(8)))
        .with_trade(make_trade(3, "2025-06-09 11:00:00", -2.0, None));
    let trades = api.strategy_trades(5).unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].id, Some(1));
}

#[test]
fn dashboard_balance_survives_in_the_session_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let sessions = SessionFileAdapter::new(dir.path().join("session.json"));
    sessions
        .save(&Session {
            token: "mock-token".to_string(),
            current_balance: None,
        })
        .unwrap();

    // what the dashboard does after fetching stats
    let mut session = sessions.load().unwrap().unwrap();
    session.current_balance = Some(10_412.5);
    sessions.save(&session).unwrap();

    let reloaded = sessions.load().unwrap().unwrap();
    assert_eq!(reloaded.token, "mock-token");
    assert_eq!(reloaded.current_balance, Some(10_412.5));
}
