#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use chrono::{DateTime, NaiveDateTime, Utc};
use trademate::domain::currency::CurrencyPair;
use trademate::domain::error::TradeMateError;
use trademate::domain::stats::{EquityInterval, EquityPoint, StrategyStats, TradeStats};
use trademate::domain::strategy::Strategy;
use trademate::domain::trade::{Trade, TradeDirection, TradeStatus, duration_ms};
use trademate::domain::user::{User, UserUpdate};
use trademate::ports::api_port::ApiPort;

pub struct MockApiPort {
    pub trades: RefCell<Vec<Trade>>,
    pub strategies: RefCell<Vec<Strategy>>,
    pub pairs: RefCell<Vec<CurrencyPair>>,
    pub user: User,
    pub stats: TradeStats,
    pub strategy_stats: StrategyStats,
    pub equity: Vec<EquityPoint>,
    pub fail_with: Option<String>,
    next_id: Cell<i64>,
}

impl MockApiPort {
    pub fn new() -> Self {
        Self {
            trades: RefCell::new(Vec::new()),
            strategies: RefCell::new(Vec::new()),
            pairs: RefCell::new(Vec::new()),
            user: make_user(9),
            stats: TradeStats::default(),
            strategy_stats: StrategyStats::default(),
            equity: Vec::new(),
            fail_with: None,
            next_id: Cell::new(100),
        }
    }

    pub fn with_trade(self, trade: Trade) -> Self {
        self.trades.borrow_mut().push(trade);
        self
    }

    pub fn with_strategy(self, strategy: Strategy) -> Self {
        self.strategies.borrow_mut().push(strategy);
        self
    }

    pub fn with_pair(self, pair: CurrencyPair) -> Self {
        self.pairs.borrow_mut().push(pair);
        self
    }

    pub fn with_stats(mut self, stats: TradeStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_strategy_stats(mut self, stats: StrategyStats) -> Self {
        self.strategy_stats = stats;
        self
    }

    pub fn with_equity(mut self, equity: Vec<EquityPoint>) -> Self {
        self.equity = equity;
        self
    }

    pub fn failing(mut self, reason: &str) -> Self {
        self.fail_with = Some(reason.to_string());
        self
    }

    fn check(&self) -> Result<(), TradeMateError> {
        match &self.fail_with {
            Some(reason) => Err(TradeMateError::Transport {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }

    fn next_id(&self) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl ApiPort for MockApiPort {
    fn login(&self, _email: &str, password: &str) -> Result<String, TradeMateError> {
        self.check()?;
        if password == "secret" {
            Ok("mock-token".to_string())
        } else {
            Err(TradeMateError::Unauthorized {
                message: "Invalid email or password.".to_string(),
            })
        }
    }

    fn register(&self, _email: &str, _password: &str) -> Result<(), TradeMateError> {
        self.check()
    }

    fn current_user(&self) -> Result<User, TradeMateError> {
        self.check()?;
        Ok(self.user.clone())
    }

    fn update_user(&self, _update: &UserUpdate) -> Result<User, TradeMateError> {
        self.check()?;
        Ok(self.user.clone())
    }

    fn list_trades(&self) -> Result<Vec<Trade>, TradeMateError> {
        self.check()?;
        Ok(self.trades.borrow().clone())
    }

    fn create_trade(&self, trade: &Trade) -> Result<Trade, TradeMateError> {
        self.check()?;
        let mut created = trade.clone();
        created.id = Some(self.next_id());
        self.trades.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_trade(&self, id: i64, trade: &Trade) -> Result<Trade, TradeMateError> {
        self.check()?;
        let mut trades = self.trades.borrow_mut();
        match trades.iter_mut().find(|t| t.id == Some(id)) {
            Some(stored) => {
                *stored = trade.clone();
                stored.id = Some(id);
                Ok(stored.clone())
            }
            None => Err(TradeMateError::Api {
                status: 404,
                message: format!("trade {id} not found"),
            }),
        }
    }

    fn delete_trade(&self, id: i64) -> Result<(), TradeMateError> {
        self.check()?;
        let mut trades = self.trades.borrow_mut();
        let before = trades.len();
        trades.retain(|t| t.id != Some(id));
        if trades.len() == before {
            return Err(TradeMateError::Api {
                status: 404,
                message: format!("trade {id} not found"),
            });
        }
        Ok(())
    }

    fn trade_stats(&self) -> Result<TradeStats, TradeMateError> {
        self.check()?;
        Ok(self.stats.clone())
    }

    fn equity_curve(
        &self,
        _interval: EquityInterval,
    ) -> Result<Vec<EquityPoint>, TradeMateError> {
        self.check()?;
        Ok(self.equity.clone())
    }

    fn list_strategies(&self) -> Result<Vec<Strategy>, TradeMateError> {
        self.check()?;
        Ok(self.strategies.borrow().clone())
    }

    fn create_strategy(&self, strategy: &Strategy) -> Result<Strategy, TradeMateError> {
        self.check()?;
        let mut created = strategy.clone();
        created.id = Some(self.next_id());
        self.strategies.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn update_strategy(&self, id: i64, strategy: &Strategy) -> Result<Strategy, TradeMateError> {
        self.check()?;
        let mut strategies = self.strategies.borrow_mut();
        match strategies.iter_mut().find(|s| s.id == Some(id)) {
            Some(stored) => {
                *stored = strategy.clone();
                stored.id = Some(id);
                Ok(stored.clone())
            }
            None => Err(TradeMateError::Api {
                status: 404,
                message: format!("strategy {id} not found"),
            }),
        }
    }

    fn delete_strategy(&self, id: i64) -> Result<(), TradeMateError> {
        self.check()?;
        self.strategies.borrow_mut().retain(|s| s.id != Some(id));
        Ok(())
    }

    fn strategy_trades(&self, strategy_id: i64) -> Result<Vec<Trade>, TradeMateError> {
        self.check()?;
        Ok(self
            .trades
            .borrow()
            .iter()
            .filter(|t| t.strategy_id == Some(strategy_id))
            .cloned()
            .collect())
    }

    fn strategy_stats(
        &self,
        _user_id: i64,
        _strategy_id: i64,
    ) -> Result<StrategyStats, TradeMateError> {
        self.check()?;
        Ok(self.strategy_stats.clone())
    }

    fn list_pairs(&self) -> Result<Vec<CurrencyPair>, TradeMateError> {
        self.check()?;
        Ok(self.pairs.borrow().clone())
    }

    fn create_pair(&self, pair: &CurrencyPair) -> Result<CurrencyPair, TradeMateError> {
        self.check()?;
        let mut created = pair.clone();
        created.id = Some(self.next_id());
        self.pairs.borrow_mut().push(created.clone());
        Ok(created)
    }

    fn delete_pair(&self, id: i64) -> Result<(), TradeMateError> {
        self.check()?;
        self.pairs.borrow_mut().retain(|p| p.id != Some(id));
        Ok(())
    }
}

pub fn ts(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap_or_else(|_| panic!("bad test timestamp {s}"))
        .and_utc()
}

pub fn make_trade(id: i64, open: &str, profit: f64, strategy_id: Option<i64>) -> Trade {
    let open = ts(open);
    let close = open + chrono::Duration::hours(2);
    Trade {
        id: Some(id),
        open_date: open,
        close_date: close,
        duration: duration_ms(open, close),
        currency_pair_id: Some(1),
        currency_pair: Some(CurrencyPair::new("EUR", "USD")),
        strategy_id,
        strategy: None,
        status: if profit < 0.0 {
            TradeStatus::Loss
        } else {
            TradeStatus::Win
        },
        direction: TradeDirection::Buy,
        entry_price: 1.08,
        exit_price: 1.09,
        categories: Some(vec!["Day Trading".to_string()]),
        market_trend: "Uptrend".to_string(),
        stop_loss_price: 1.07,
        take_profit_price: 1.10,
        transaction_cost: 1.0,
        reason: None,
        comment: None,
        position_size: Some(1_000.0),
        user_id: Some(9),
        profit: Some(profit),
    }
}

pub fn make_strategy(id: i64, name: &str, win_rate: f64) -> Strategy {
    Strategy {
        id: Some(id),
        name: name.to_string(),
        kind: "Breakout Trading".to_string(),
        comment: Some("session open only".to_string()),
        description: "Trade the session open range".to_string(),
        market_type: Some(vec!["Forex".to_string()]),
        market_condition: Some(vec!["Volatile".to_string()]),
        risk_level: "Medium".to_string(),
        win_rate,
        total_trades: 20,
        last_modified_date: None,
        user_id: Some(9),
        star_rate: None,
    }
}

pub fn make_user(id: i64) -> User {
    User {
        id: Some(id),
        email: "trader@trademate.com".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Perera".to_string()),
        mobile: Some("0712345678".to_string()),
        date_of_birth: None,
        address_line1: Some("12 Galle Rd".to_string()),
        address_line2: None,
        city: Some("Colombo".to_string()),
        postal_code: Some("00300".to_string()),
        country: Some("LK".to_string()),
        gender: None,
        initial_capital: Some(10_000.0),
    }
}
