//! CSV export of the trade journal.

use std::io;
use std::path::Path;

use crate::domain::error::TradeMateError;
use crate::domain::trade::{Trade, humanize_duration};

const HEADERS: [&str; 15] = [
    "Open Date",
    "Close Date",
    "Duration",
    "Currency Pair",
    "Strategy",
    "Status",
    "Type",
    "Entry Price",
    "Exit Price",
    "Position Size",
    "Stop Loss",
    "Take Profit",
    "Transaction Cost",
    "Market Trend",
    "Profit",
];

/// Write the journal as CSV to any writer.
pub fn write_trades<W: io::Write>(writer: W, trades: &[Trade]) -> Result<(), TradeMateError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADERS).map_err(csv_error)?;

    for trade in trades {
        let pair = trade
            .currency_pair
            .as_ref()
            .map(|p| p.label())
            .unwrap_or_default();
        let strategy = trade
            .strategy
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_default();
        csv.write_record([
            trade.open_date.to_rfc3339(),
            trade.close_date.to_rfc3339(),
            humanize_duration(trade.duration),
            pair,
            strategy,
            trade.status.to_string(),
            trade.direction.to_string(),
            trade.entry_price.to_string(),
            trade.exit_price.to_string(),
            trade
                .position_size
                .map(|s| s.to_string())
                .unwrap_or_default(),
            trade.stop_loss_price.to_string(),
            trade.take_profit_price.to_string(),
            trade.transaction_cost.to_string(),
            trade.market_trend.clone(),
            format!("{:.2}", trade.display_profit()),
        ])
        .map_err(csv_error)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the journal as CSV to a file.
pub fn export_trades<P: AsRef<Path>>(path: P, trades: &[Trade]) -> Result<(), TradeMateError> {
    let file = std::fs::File::create(path)?;
    write_trades(file, trades)
}

fn csv_error(e: csv::Error) -> TradeMateError {
    TradeMateError::Export {
        reason: e.to_string(),
    }
}
