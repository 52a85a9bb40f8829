//! Session persistence port trait.

use serde::{Deserialize, Serialize};

use crate::domain::error::TradeMateError;

/// Locally persisted login state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token returned by the login endpoint.
    pub token: String,
    /// Account balance cached from the last dashboard fetch, used to
    /// pre-fill the risk calculators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_balance: Option<f64>,
}

pub trait SessionPort {
    /// Load the stored session, `None` when no one is logged in.
    fn load(&self) -> Result<Option<Session>, TradeMateError>;

    fn save(&self, session: &Session) -> Result<(), TradeMateError>;

    fn clear(&self) -> Result<(), TradeMateError>;
}
