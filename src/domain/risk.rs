//! Risk-management calculators.
//!
//! Stateless arithmetic behind the risk tooling: maximum risk per trade,
//! suggested position size, optimal take-profit distance and client-side
//! drawdown percentage.

use super::error::TradeMateError;

/// Baseline guidelines shown alongside the calculators.
pub const DEFAULT_GUIDELINES: [&str; 5] = [
    "Never risk more than 1-2% of your account on a single trade.",
    "Always use stop-loss orders to limit potential losses.",
    "Maintain a positive risk-reward ratio, aiming for at least 1:2.",
    "Diversify your trades across different assets and strategies.",
    "Regularly review and adjust your risk management approach.",
];

/// Default account size when no balance has been cached yet.
pub const DEFAULT_ACCOUNT_SIZE: f64 = 10_000.0;

/// Output of the position-size calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSuggestion {
    /// Capital at risk on the trade.
    pub max_risk: f64,
    /// Units to buy so the stop-loss distance risks exactly `max_risk`.
    pub position_size: f64,
}

/// Suggest a position size from account size, risk percentage and the
/// stop-loss distance in price units.
pub fn suggest_position(
    account_size: f64,
    risk_pct: f64,
    stop_loss: f64,
) -> Result<PositionSuggestion, TradeMateError> {
    if !account_size.is_finite() || account_size <= 0.0 {
        return Err(TradeMateError::validation(
            "account-size",
            "must be a positive number",
        ));
    }
    if !risk_pct.is_finite() || risk_pct <= 0.0 || risk_pct > 100.0 {
        return Err(TradeMateError::validation(
            "risk-pct",
            "must be between 0 and 100",
        ));
    }
    if !stop_loss.is_finite() || stop_loss <= 0.0 {
        return Err(TradeMateError::validation(
            "stop-loss",
            "must be a positive price distance",
        ));
    }
    let max_risk = account_size * risk_pct / 100.0;
    Ok(PositionSuggestion {
        max_risk,
        position_size: max_risk / stop_loss,
    })
}

/// Take-profit distance for a stop-loss distance and a reward ratio
/// (the reward side of a 1:R risk-to-reward target).
pub fn optimal_take_profit(stop_loss: f64, reward_ratio: f64) -> Result<f64, TradeMateError> {
    if !stop_loss.is_finite() || stop_loss <= 0.0 {
        return Err(TradeMateError::validation(
            "stop-loss",
            "must be a positive price distance",
        ));
    }
    if !reward_ratio.is_finite() || reward_ratio < 0.0 {
        return Err(TradeMateError::validation(
            "ratio",
            "must be a non-negative number",
        ));
    }
    Ok(stop_loss * reward_ratio)
}

/// Peak-to-trough decline as a percentage of the peak.
pub fn drawdown_pct(peak: f64, trough: f64) -> Result<f64, TradeMateError> {
    if !peak.is_finite() || peak <= 0.0 {
        return Err(TradeMateError::validation(
            "peak",
            "must be a positive number",
        ));
    }
    if !trough.is_finite() || trough < 0.0 {
        return Err(TradeMateError::validation(
            "trough",
            "must be a non-negative number",
        ));
    }
    if trough > peak {
        return Err(TradeMateError::validation(
            "trough",
            "cannot exceed the peak",
        ));
    }
    Ok((peak - trough) / peak * 100.0)
}
