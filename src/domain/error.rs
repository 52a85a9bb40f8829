//! Domain error types.

/// Top-level error type for trademate.
#[derive(Debug, thiserror::Error)]
pub enum TradeMateError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("request failed: {reason}")]
    Transport { reason: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed API response: {reason}")]
    Decode { reason: String },

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("not logged in (run `trademate login` first)")]
    NotLoggedIn,

    #[error("authentication failed: {message}")]
    Unauthorized { message: String },

    #[error("export error: {reason}")]
    Export { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TradeMateError {
    /// Shorthand for a field-level validation failure.
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        TradeMateError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<&TradeMateError> for std::process::ExitCode {
    fn from(err: &TradeMateError) -> Self {
        let code: u8 = match err {
            TradeMateError::Io(_) | TradeMateError::Export { .. } => 1,
            TradeMateError::ConfigParse { .. }
            | TradeMateError::ConfigMissing { .. }
            | TradeMateError::ConfigInvalid { .. } => 2,
            TradeMateError::Transport { .. }
            | TradeMateError::Api { .. }
            | TradeMateError::Decode { .. } => 3,
            TradeMateError::Validation { .. } => 4,
            TradeMateError::NotLoggedIn | TradeMateError::Unauthorized { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
