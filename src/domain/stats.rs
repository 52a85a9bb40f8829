//! Server-computed statistics shapes for the dashboard and playbook.

use serde::{Deserialize, Serialize};

/// Profit and loss totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProfit {
    pub month: String,
    #[serde(default)]
    pub profit: f64,
    #[serde(default)]
    pub loss: f64,
}

/// Discipline alert counters for the current month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertTotals {
    #[serde(default)]
    pub fomo: u64,
    #[serde(default)]
    pub over_trade_days: u64,
    #[serde(default)]
    pub revenge_trade_days: u64,
}

/// Aggregate account statistics from `/trades/users/trade-stats`.
///
/// Everything here is computed server-side; the client only renders it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeStats {
    #[serde(default)]
    pub total_trades: u64,
    #[serde(default)]
    pub win_trades: u64,
    #[serde(default)]
    pub loss_trades: u64,
    #[serde(default)]
    pub breakeven_trades: u64,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default)]
    pub total_strategy_count: u64,
    #[serde(rename = "dailyPL", default)]
    pub daily_pl: f64,
    #[serde(default)]
    pub average_holding_period: f64,
    #[serde(default)]
    pub highest_win_trade: f64,
    #[serde(default)]
    pub highest_loss_trade: f64,
    #[serde(default)]
    pub total_currency_pairs_count: u64,
    /// "risk:reward" string, e.g. "1:2.5".
    #[serde(default)]
    pub risk_to_reward_ratio: Option<String>,
    #[serde(default)]
    pub draw_down_ratio: Option<f64>,
    #[serde(default)]
    pub current_balance: Option<f64>,
    #[serde(default)]
    pub monthly_profits: Vec<MonthlyProfit>,
    #[serde(default)]
    pub total_alerts_this_month: Option<AlertTotals>,
    /// Shape undocumented upstream; kept raw and rendered by name when present.
    #[serde(default)]
    pub most_profitable_strategy: Option<serde_json::Value>,
}

impl TradeStats {
    /// Win percentage over all trades, 0 when no trades were taken.
    pub fn win_percentage(&self) -> f64 {
        if self.total_trades == 0 {
            0.0
        } else {
            self.win_trades as f64 / self.total_trades as f64 * 100.0
        }
    }

    pub fn most_profitable_strategy_name(&self) -> Option<&str> {
        self.most_profitable_strategy
            .as_ref()?
            .get("name")?
            .as_str()
    }
}

/// Per-strategy statistics from `/strategies/strategy-stats/{user}/{strategy}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyStats {
    /// Win rate percentage in [0, 100].
    #[serde(default)]
    pub win_loss_ratio: f64,
    /// "risk:reward" string, e.g. "1:3".
    #[serde(default)]
    pub risk_to_reward_ratio: Option<String>,
    #[serde(default)]
    pub average_profit_loss: Option<f64>,
    #[serde(default)]
    pub draw_down_ratio: Option<f64>,
}

/// One point of the account equity curve. The date granularity depends on
/// the requested interval, so it is kept as the server sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityPoint {
    pub date: String,
    pub equity: f64,
}

/// Granularity of the equity curve endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquityInterval {
    Daily,
    Monthly,
}

impl EquityInterval {
    pub fn path_segment(self) -> &'static str {
        match self {
            EquityInterval::Daily => "daily",
            EquityInterval::Monthly => "monthly",
        }
    }
}
