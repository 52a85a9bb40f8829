//! Client-side form validation.
//!
//! Required-field and shape checks performed before a request is sent.
//! Authoritative invariants (uniqueness, referential integrity) live
//! server-side.

use super::error::TradeMateError;
use super::strategy::Strategy;
use super::trade::Trade;
use super::user::UserUpdate;

fn require(field: &str, value: &str) -> Result<(), TradeMateError> {
    if value.trim().is_empty() {
        Err(TradeMateError::validation(field, "is required"))
    } else {
        Ok(())
    }
}

/// Accepts local@domain.tld: no whitespace, exactly one '@', and a dot in
/// the domain with text on both sides.
pub fn validate_email(email: &str) -> Result<(), TradeMateError> {
    let invalid = || TradeMateError::validation("email", "must be a valid email address");

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(invalid()),
    };
    if local.is_empty() || domain.is_empty() {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) if !name.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), TradeMateError> {
    require("email", email)?;
    require("password", password)?;
    validate_email(email)
}

pub fn validate_registration(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), TradeMateError> {
    require("email", email)?;
    require("password", password)?;
    require("password confirmation", confirm)?;
    if password != confirm {
        return Err(TradeMateError::validation(
            "password",
            "passwords do not match",
        ));
    }
    validate_email(email)
}

/// Validate a trade before create/update. Open == close is allowed (an
/// instant trade, flagged separately); close before open is not.
pub fn validate_trade(trade: &Trade) -> Result<(), TradeMateError> {
    if trade.close_date < trade.open_date {
        return Err(TradeMateError::validation(
            "close date",
            "must not be earlier than the open date",
        ));
    }
    if trade.currency_pair_id.is_none() && trade.currency_pair.is_none() {
        return Err(TradeMateError::validation("currency pair", "is required"));
    }
    if !(trade.entry_price.is_finite() && trade.entry_price > 0.0) {
        return Err(TradeMateError::validation(
            "entry price",
            "must be a positive number",
        ));
    }
    if !(trade.exit_price.is_finite() && trade.exit_price > 0.0) {
        return Err(TradeMateError::validation(
            "exit price",
            "must be a positive number",
        ));
    }
    match trade.position_size {
        Some(size) if size.is_finite() && size > 0.0 => {}
        _ => {
            return Err(TradeMateError::validation(
                "position size",
                "must be a positive number",
            ));
        }
    }
    match &trade.categories {
        Some(categories) if !categories.is_empty() => {}
        _ => return Err(TradeMateError::validation("categories", "at least one is required")),
    }
    require("market trend", &trade.market_trend)?;
    Ok(())
}

/// Validate a strategy before create/update, naming every failing field.
pub fn validate_strategy(strategy: &Strategy) -> Result<(), TradeMateError> {
    let mut missing: Vec<&str> = Vec::new();

    if strategy.name.trim().is_empty() {
        missing.push("name");
    }
    if strategy.kind.trim().is_empty() {
        missing.push("type");
    }
    if strategy
        .comment
        .as_deref()
        .map(str::trim)
        .unwrap_or("")
        .is_empty()
    {
        missing.push("comment");
    }
    if strategy.description.trim().is_empty() {
        missing.push("description");
    }
    if strategy.market_type.as_deref().unwrap_or(&[]).is_empty() {
        missing.push("market type");
    }
    if strategy
        .market_condition
        .as_deref()
        .unwrap_or(&[])
        .is_empty()
    {
        missing.push("market condition");
    }
    if strategy.risk_level.trim().is_empty() {
        missing.push("risk level");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(TradeMateError::validation(
            "strategy",
            format!("missing required fields: {}", missing.join(", ")),
        ))
    }
}

pub fn validate_pair(from: &str, to: &str) -> Result<(), TradeMateError> {
    require("from currency", from)?;
    require("to currency", to)?;
    Ok(())
}

pub fn validate_user_update(update: &UserUpdate) -> Result<(), TradeMateError> {
    require("first name", &update.first_name)?;
    require("last name", &update.last_name)?;
    require("mobile", &update.mobile)?;
    if update.mobile.len() != 10 || !update.mobile.chars().all(|c| c.is_ascii_digit()) {
        return Err(TradeMateError::validation(
            "mobile",
            "must be a 10-digit phone number",
        ));
    }
    require("address line 1", &update.address_line1)?;
    require("city", &update.city)?;
    require("postal code", &update.postal_code)?;
    require("country", &update.country)?;
    if !update.initial_capital.is_finite() || update.initial_capital < 0.0 {
        return Err(TradeMateError::validation(
            "initial capital",
            "must be a non-negative number",
        ));
    }
    Ok(())
}
