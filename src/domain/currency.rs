//! Currency pair records.

use serde::{Deserialize, Serialize};

/// A tradeable currency pair, e.g. EUR/USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPair {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub from: String,
    pub to: String,
}

impl CurrencyPair {
    /// Build a pair with both codes normalized to uppercase.
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            id: None,
            from: from.trim().to_uppercase(),
            to: to.trim().to_uppercase(),
        }
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.from, self.to)
    }
}
