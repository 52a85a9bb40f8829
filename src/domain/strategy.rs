//! Strategy playbook records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named trading plan with descriptive tags and historical stats.
///
/// `win_rate` and `total_trades` are maintained server-side; the client
/// never recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub description: String,
    /// Markets the strategy applies to (forex, stocks, ...). Nullable on the wire.
    #[serde(default)]
    pub market_type: Option<Vec<String>>,
    /// Conditions the strategy expects (trending, ranging, ...). Nullable on the wire.
    #[serde(default)]
    pub market_condition: Option<Vec<String>>,
    pub risk_level: String,
    #[serde(default)]
    pub win_rate: f64,
    #[serde(default)]
    pub total_trades: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_rate: Option<u8>,
}

impl Strategy {
    /// All badge tags shown for the strategy, deduplicated, type first.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = vec![self.kind.clone()];
        for group in [&self.market_type, &self.market_condition] {
            if let Some(values) = group {
                for value in values {
                    if !tags.contains(value) {
                        tags.push(value.clone());
                    }
                }
            }
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Strategy {
        Strategy {
            id: Some(1),
            name: "London Breakout".into(),
            kind: "Breakout Trading".into(),
            comment: Some("works best on Mondays".into()),
            description: "Trade the first hour of the London session".into(),
            market_type: Some(vec!["Forex".into()]),
            market_condition: Some(vec!["Volatile".into(), "Forex".into()]),
            risk_level: "Medium".into(),
            win_rate: 61.5,
            total_trades: 42,
            last_modified_date: None,
            user_id: Some(9),
            star_rate: Some(4),
        }
    }

    #[test]
    fn tags_deduplicate_across_groups() {
        let tags = sample().tags();
        assert_eq!(tags, vec!["Breakout Trading", "Forex", "Volatile"]);
    }

    #[test]
    fn deserializes_null_tag_arrays() {
        let json = r#"{
            "id": 3, "name": "Scalp", "type": "Scalping",
            "description": "quick in and out",
            "marketType": null, "marketCondition": null,
            "riskLevel": "High", "winRate": 48.0, "totalTrades": 310,
            "userId": 9
        }"#;
        let strategy: Strategy = serde_json::from_str(json).unwrap();
        assert_eq!(strategy.market_type, None);
        assert_eq!(strategy.market_condition, None);
        assert_eq!(strategy.tags(), vec!["Scalping"]);
    }

    #[test]
    fn serializes_type_field_name() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"type\":\"Breakout Trading\""));
        assert!(json.contains("\"riskLevel\":\"Medium\""));
    }
}
