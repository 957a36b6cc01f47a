use serde::{Deserialize, Serialize};
use std::fmt;

use crate::log_level::LogLevel;

/// Credentials for the remote storage service.
///
/// Each property has exactly one storage slot, read by its getter and written
/// by its setter. Nothing is validated.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    username: String,
    password: String,
    #[serde(default)]
    log_level: LogLevel,
}

impl Account {
    /// Create an account from its credentials
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        log_level: LogLevel,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            log_level,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Verbosity requested for this account's diagnostics.
    ///
    /// Stored only; pass it to [`crate::diagnostics::init`] to apply it.
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_log_level(&mut self, value: LogLevel) {
        self.log_level = value;
    }
}

// Keep the password out of logs and panic messages
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("log_level", &self.log_level)
            .finish()
    }
}
