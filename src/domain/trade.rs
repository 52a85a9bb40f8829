//! Trade journal records and trade arithmetic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::currency::CurrencyPair;
use super::strategy::Strategy;

/// Outcome of a closed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Win,
    Loss,
    Breakeven,
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TradeStatus::Win => "win",
            TradeStatus::Loss => "loss",
            TradeStatus::Breakeven => "breakeven",
        };
        f.write_str(s)
    }
}

impl FromStr for TradeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "win" => Ok(TradeStatus::Win),
            "loss" => Ok(TradeStatus::Loss),
            "breakeven" => Ok(TradeStatus::Breakeven),
            other => Err(format!(
                "unknown status '{other}' (expected win, loss or breakeven)"
            )),
        }
    }
}

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TradeDirection::Buy => "buy",
            TradeDirection::Sell => "sell",
        })
    }
}

impl FromStr for TradeDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "buy" => Ok(TradeDirection::Buy),
            "sell" => Ok(TradeDirection::Sell),
            other => Err(format!("unknown type '{other}' (expected buy or sell)")),
        }
    }
}

/// A single journaled trade as exchanged with the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub open_date: DateTime<Utc>,
    pub close_date: DateTime<Utc>,
    /// Holding time in milliseconds, close minus open.
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_pair_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_pair: Option<CurrencyPair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<Strategy>,
    pub status: TradeStatus,
    #[serde(rename = "type")]
    pub direction: TradeDirection,
    pub entry_price: f64,
    pub exit_price: f64,
    /// Nullable on the wire.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    pub market_trend: String,
    pub stop_loss_price: f64,
    pub take_profit_price: f64,
    pub transaction_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Net profit computed server-side, present on journal listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,
}

impl Trade {
    /// Whether the trade was opened and closed in the same instant.
    pub fn is_instant(&self) -> bool {
        self.open_date == self.close_date
    }

    /// Whether the trade has a strategy attached.
    pub fn has_strategy(&self) -> bool {
        self.strategy_id.is_some() || self.strategy.is_some()
    }

    /// Net profit for display: the server value when present, otherwise a
    /// direction-aware local estimate over the position size.
    pub fn display_profit(&self) -> f64 {
        if let Some(profit) = self.profit {
            return profit;
        }
        let size = self.position_size.unwrap_or(1.0);
        let per_unit = match self.direction {
            TradeDirection::Buy => self.exit_price - self.entry_price,
            TradeDirection::Sell => self.entry_price - self.exit_price,
        };
        per_unit * size - self.transaction_cost
    }
}

/// Milliseconds between open and close. Negative when close precedes open.
pub fn duration_ms(open: DateTime<Utc>, close: DateTime<Utc>) -> i64 {
    (close - open).num_milliseconds()
}

/// Break a millisecond duration into the journal's display form,
/// "D days, H hours, M minutes, S seconds".
pub fn humanize_duration(ms: i64) -> String {
    let ms = ms.max(0);
    let days = ms / (1000 * 60 * 60 * 24);
    let hours = (ms % (1000 * 60 * 60 * 24)) / (1000 * 60 * 60);
    let minutes = (ms % (1000 * 60 * 60)) / (1000 * 60);
    let seconds = (ms % (1000 * 60)) / 1000;
    format!("{days} days, {hours} hours, {minutes} minutes, {seconds} seconds")
}
