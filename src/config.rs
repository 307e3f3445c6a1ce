// Connection settings: API base URL and basic-auth credentials. Values
// come from command line flags or the environment; anything still
// missing is asked for interactively before the client is built.

use crate::prompt::Prompter;
use anyhow::Result;
use thiserror::Error;

pub const URL_VAR: &str = "API_URL";
pub const USER_VAR: &str = "API_USER";
pub const PASS_VAR: &str = "API_PASS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Carries the first empty variable; the message names all three.
    #[error("API_URL, API_USER, and API_PASS must be set.")]
    Missing(&'static str),
}

/// Everything the client needs to talk to the API. Built once at startup
/// and lent to the client.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

// Keep the password out of debug logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

impl Config {
    pub fn new(base_url: &str, username: &str, password: &str) -> Self {
        Config {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Fill in whatever was not supplied up front. URL and username are
    /// read as plain text, the password masked. An aborted prompt leaves
    /// the value empty, which `validate` then rejects.
    pub fn resolve<P: Prompter>(
        url: Option<String>,
        username: Option<String>,
        password: Option<String>,
        prompter: &mut P,
    ) -> Result<Config> {
        let url = match url.filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => prompter.text("Enter your API URL:", None)?.unwrap_or_default(),
        };
        let username = match username.filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => prompter
                .text("Enter your API Username:", None)?
                .unwrap_or_default(),
        };
        let password = match password.filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => prompter
                .password("Enter your API Password:")?
                .unwrap_or_default(),
        };
        Ok(Config::new(&url, &username, &password))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Missing(URL_VAR));
        }
        if self.username.is_empty() {
            return Err(ConfigError::Missing(USER_VAR));
        }
        if self.password.is_empty() {
            return Err(ConfigError::Missing(PASS_VAR));
        }
        Ok(())
    }
}
