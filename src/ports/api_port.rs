//! Trade Mate API access port trait.

use crate::domain::currency::CurrencyPair;
use crate::domain::error::TradeMateError;
use crate::domain::stats::{EquityInterval, EquityPoint, StrategyStats, TradeStats};
use crate::domain::strategy::Strategy;
use crate::domain::trade::Trade;
use crate::domain::user::{User, UserUpdate};

/// Everything the CLI needs from the backend, one method per endpoint.
pub trait ApiPort {
    fn login(&self, email: &str, password: &str) -> Result<String, TradeMateError>;
    fn register(&self, email: &str, password: &str) -> Result<(), TradeMateError>;

    fn current_user(&self) -> Result<User, TradeMateError>;
    fn update_user(&self, update: &UserUpdate) -> Result<User, TradeMateError>;

    fn list_trades(&self) -> Result<Vec<Trade>, TradeMateError>;
    fn create_trade(&self, trade: &Trade) -> Result<Trade, TradeMateError>;
    fn update_trade(&self, id: i64, trade: &Trade) -> Result<Trade, TradeMateError>;
    fn delete_trade(&self, id: i64) -> Result<(), TradeMateError>;

    fn trade_stats(&self) -> Result<TradeStats, TradeMateError>;
    fn equity_curve(&self, interval: EquityInterval) -> Result<Vec<EquityPoint>, TradeMateError>;

    fn list_strategies(&self) -> Result<Vec<Strategy>, TradeMateError>;
    fn create_strategy(&self, strategy: &Strategy) -> Result<Strategy, TradeMateError>;
    fn update_strategy(&self, id: i64, strategy: &Strategy) -> Result<Strategy, TradeMateError>;
    fn delete_strategy(&self, id: i64) -> Result<(), TradeMateError>;
    /// Trades recorded against one strategy.
    fn strategy_trades(&self, strategy_id: i64) -> Result<Vec<Trade>, TradeMateError>;
    fn strategy_stats(
        &self,
        user_id: i64,
        strategy_id: i64,
    ) -> Result<StrategyStats, TradeMateError>;

    fn list_pairs(&self) -> Result<Vec<CurrencyPair>, TradeMateError>;
    fn create_pair(&self, pair: &CurrencyPair) -> Result<CurrencyPair, TradeMateError>;
    fn delete_pair(&self, id: i64) -> Result<(), TradeMateError>;
}
