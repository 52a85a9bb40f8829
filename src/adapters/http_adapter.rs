//! Blocking HTTP adapter for the Trade Mate REST API.
//!
//! Responses arrive in a `{success, message, data}` envelope; only the
//! `data` payload is surfaced to callers. 401 responses map to
//! [`TradeMateError::Unauthorized`] so the CLI can tell an expired token
//! apart from other API failures.

use std::time::Duration;

use log::debug;
use reqwest::Method;
use reqwest::blocking::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::currency::CurrencyPair;
use crate::domain::error::TradeMateError;
use crate::domain::stats::{EquityInterval, EquityPoint, StrategyStats, TradeStats};
use crate::domain::strategy::Strategy;
use crate::domain::trade::Trade;
use crate::domain::user::{User, UserUpdate};
use crate::ports::api_port::ApiPort;

/// Connection settings from the `[api]` config section.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Path prefix prepended to every endpoint, e.g. `/api/v1`.
    pub prefix: String,
    pub timeout_secs: u64,
}

pub struct HttpApiAdapter {
    client: Client,
    base: String,
    token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

/// Unwrap an API response body. On 2xx the `data` payload is decoded into
/// `T`; 401 becomes `Unauthorized` and any other status becomes `Api`,
/// carrying the server's `message` when one is present.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, TradeMateError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Envelope>(body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    "no response body".to_string()
                } else {
                    body.trim().to_string()
                }
            });
        return Err(if status == 401 {
            TradeMateError::Unauthorized { message }
        } else {
            TradeMateError::Api { status, message }
        });
    }

    let envelope: Envelope = if body.trim().is_empty() {
        Envelope::default()
    } else {
        serde_json::from_str(body).map_err(|e| TradeMateError::Decode {
            reason: e.to_string(),
        })?
    };
    serde_json::from_value(envelope.data.unwrap_or(serde_json::Value::Null)).map_err(|e| {
        TradeMateError::Decode {
            reason: e.to_string(),
        }
    })
}

impl HttpApiAdapter {
    pub fn new(config: &ApiConfig, token: Option<String>) -> Result<Self, TradeMateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TradeMateError::Transport {
                reason: e.to_string(),
            })?;
        let base = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            config.prefix
        );
        Ok(Self {
            client,
            base,
            token,
        })
    }

    fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, TradeMateError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base, path);
        debug!("{method} {url}");

        let mut request = self.client.request(method, &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().map_err(|e| TradeMateError::Transport {
            reason: e.to_string(),
        })?;
        let status = response.status().as_u16();
        let text = response.text().map_err(|e| TradeMateError::Transport {
            reason: e.to_string(),
        })?;
        debug!("{url} -> {status} ({} bytes)", text.len());

        decode_envelope(status, &text)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, TradeMateError> {
        self.send::<T, ()>(Method::GET, path, None)
    }

    fn delete(&self, path: &str) -> Result<(), TradeMateError> {
        self.send::<(), ()>(Method::DELETE, path, None)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenPayload {
    token: String,
}

impl ApiPort for HttpApiAdapter {
    fn login(&self, email: &str, password: &str) -> Result<String, TradeMateError> {
        let payload: TokenPayload = self.send(
            Method::POST,
            "/auth/login",
            Some(&Credentials { email, password }),
        )?;
        Ok(payload.token)
    }

    fn register(&self, email: &str, password: &str) -> Result<(), TradeMateError> {
        self.send(
            Method::POST,
            "/auth/register",
            Some(&Credentials { email, password }),
        )
    }

    fn current_user(&self) -> Result<User, TradeMateError> {
        self.get("/users/me")
    }

    fn update_user(&self, update: &UserUpdate) -> Result<User, TradeMateError> {
        self.send(Method::PATCH, "/users", Some(update))
    }

    fn list_trades(&self) -> Result<Vec<Trade>, TradeMateError> {
        self.get("/trades/user")
    }

    fn create_trade(&self, trade: &Trade) -> Result<Trade, TradeMateError> {
        self.send(Method::POST, "/trades", Some(trade))
    }

    fn update_trade(&self, id: i64, trade: &Trade) -> Result<Trade, TradeMateError> {
        self.send(Method::PUT, &format!("/trades/{id}"), Some(trade))
    }

    fn delete_trade(&self, id: i64) -> Result<(), TradeMateError> {
        self.delete(&format!("/trades/{id}"))
    }

    fn trade_stats(&self) -> Result<TradeStats, TradeMateError> {
        self.get("/trades/users/trade-stats")
    }

    fn equity_curve(&self, interval: EquityInterval) -> Result<Vec<EquityPoint>, TradeMateError> {
        self.get(&format!(
            "/trades/users/trade-stats/equity/{}",
            interval.path_segment()
        ))
    }

    fn list_strategies(&self) -> Result<Vec<Strategy>, TradeMateError> {
        self.get("/strategies/user")
    }

    fn create_strategy(&self, strategy: &Strategy) -> Result<Strategy, TradeMateError> {
        self.send(Method::POST, "/strategies", Some(strategy))
    }

    fn update_strategy(&self, id: i64, strategy: &Strategy) -> Result<Strategy, TradeMateError> {
        self.send(Method::PUT, &format!("/strategies/{id}"), Some(strategy))
    }

    fn delete_strategy(&self, id: i64) -> Result<(), TradeMateError> {
        self.delete(&format!("/strategies/{id}"))
    }

    fn strategy_trades(&self, strategy_id: i64) -> Result<Vec<Trade>, TradeMateError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            strategy_id: i64,
        }
        self.send(
            Method::POST,
            "/strategies/trades-list",
            Some(&Body { strategy_id }),
        )
    }

    fn strategy_stats(
        &self,
        user_id: i64,
        strategy_id: i64,
    ) -> Result<StrategyStats, TradeMateError> {
        self.get(&format!(
            "/strategies/strategy-stats/{user_id}/{strategy_id}"
        ))
    }

    fn list_pairs(&self) -> Result<Vec<CurrencyPair>, TradeMateError> {
        self.get("/currencies/user/currency-pairs")
    }

    fn create_pair(&self, pair: &CurrencyPair) -> Result<CurrencyPair, TradeMateError> {
        self.send(Method::POST, "/currencies", Some(pair))
    }

    fn delete_pair(&self, id: i64) -> Result<(), TradeMateError> {
        self.delete(&format!("/currencies/{id}"))
    }
}
