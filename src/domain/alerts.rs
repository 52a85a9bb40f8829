//! Journal discipline alerts.
//!
//! Local heuristics over the day's trades: over-trading, revenge trading
//! and FOMO entries (trades taken without a strategy).

use chrono::NaiveDate;

use super::trade::Trade;

/// Trades per day above which the over-trading and revenge alerts fire.
pub const MAX_TRADES_PER_DAY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalAlerts {
    pub trades_today: usize,
    pub losing_trades_today: usize,
    pub over_trading: bool,
    pub revenge_trading: bool,
    pub fomo: bool,
}

impl JournalAlerts {
    pub fn any(&self) -> bool {
        self.over_trading || self.revenge_trading || self.fomo
    }
}

/// Assess the journal against `today`, comparing the calendar date of each
/// trade's open timestamp.
pub fn assess(trades: &[Trade], today: NaiveDate) -> JournalAlerts {
    let mut trades_today = 0usize;
    let mut losing_trades_today = 0usize;
    let mut fomo = false;

    for trade in trades {
        if trade.open_date.date_naive() != today {
            continue;
        }
        trades_today += 1;
        if trade.display_profit() < 0.0 {
            losing_trades_today += 1;
        }
        if !trade.has_strategy() {
            fomo = true;
        }
    }

    JournalAlerts {
        trades_today,
        losing_trades_today,
        over_trading: trades_today > MAX_TRADES_PER_DAY,
        revenge_trading: losing_trades_today > MAX_TRADES_PER_DAY,
        fomo,
    }
}
