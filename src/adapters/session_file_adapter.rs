//! JSON file session adapter.
//!
//! Persists the login token (and cached balance) between invocations,
//! one JSON document per file.

use std::fs;
use std::path::PathBuf;

use log::debug;

use crate::domain::error::TradeMateError;
use crate::ports::session_port::{Session, SessionPort};

pub struct SessionFileAdapter {
    path: PathBuf,
}

impl SessionFileAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionPort for SessionFileAdapter {
    fn load(&self) -> Result<Option<Session>, TradeMateError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session = serde_json::from_str(&content).map_err(|e| TradeMateError::Decode {
            reason: format!("session file {}: {e}", self.path.display()),
        })?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<(), TradeMateError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(session).map_err(|e| {
            TradeMateError::Decode {
                reason: e.to_string(),
            }
        })?;
        fs::write(&self.path, content)?;
        debug!("session saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), TradeMateError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
