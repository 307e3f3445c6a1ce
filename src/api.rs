// API client module: a small blocking HTTP client for the tournament
// endpoints under `<base>/api/tournaments`. Every call uses basic auth and
// a fixed timeout. Failures are reported to the user right here and turned
// into `None`, so the menu code only has to check for a value.

use crate::config::Config;
use crate::model::{Created, Deleted, Tournament, TournamentSummary};
use crate::output;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Upper bound for a single request, connect through body.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest slice of an error body echoed back to the user.
const BODY_EXCERPT_LEN: usize = 500;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a 4xx/5xx status.
    #[error("{status} {reason}")]
    Http {
        status: u16,
        reason: String,
        body: String,
    },
    #[error("request timed out after {}s", .0.as_secs_f32())]
    Timeout(Duration),
    #[error("{0}")]
    Connection(#[source] reqwest::Error),
    #[error("unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Show the error to the user the same way for every operation.
    pub fn report(&self) {
        match self {
            ApiError::Http { body, .. } => {
                output::print_error("API Error", &self.to_string());
                output::print_info(&format!("Details: {}", excerpt(body)));
            }
            ApiError::Timeout(_) | ApiError::Connection(_) => {
                output::print_error("Connection Error", &self.to_string());
            }
            ApiError::Decode(_) => output::print_error("API Error", &self.to_string()),
        }
    }
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// CRUD operations on tournaments. Each method reports its own failure and
/// returns `None`; a `Some` is always a successful response, even when the
/// payload is empty (an empty list, or the `Deleted` marker).
pub trait TournamentApi {
    fn list(&self) -> Option<Vec<TournamentSummary>>;
    fn get(&self, id: i64) -> Option<Tournament>;
    fn create(&self, data: &Tournament) -> Option<Created>;
    /// Full replacement. Returns whatever the server acknowledges with.
    fn update(&self, id: i64, data: &Tournament) -> Option<serde_json::Value>;
    fn delete(&self, id: i64) -> Option<Deleted>;
}

/// Blocking client holding the reqwest client, the base URL of the API
/// and the credentials sent with every request.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
    timeout: Duration,
}

impl ApiClient {
    /// Build a client from validated settings. Empty credentials are
    /// rejected here so no request is ever sent without them.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    /// Same as `new` with a different per-request timeout.
    pub fn with_timeout(config: &Config, timeout: Duration) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: config.base_url.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.base_url, endpoint)
    }

    /// Send one request and decode the body as `T`. A 204 or an empty
    /// 2xx body decodes from JSON `null`.
    pub fn request<T, B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(endpoint);
        debug!("{} {}", method, url);

        let mut req = self
            .client
            .request(method, &url)
            .basic_auth(&self.username, Some(&self.password));
        if let Some(b) = body {
            req = req.json(b);
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Talking to the API...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let res = req.send();
        spinner.finish_and_clear();

        let res = res.map_err(|e| self.transport_error(e))?;
        let status = res.status();
        let text = res.text().map_err(|e| self.transport_error(e))?;
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                body: text,
            });
        }
        if status == reqwest::StatusCode::NO_CONTENT || text.trim().is_empty() {
            return Ok(serde_json::from_str("null")?);
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout(self.timeout)
        } else {
            ApiError::Connection(err)
        }
    }

    /// Turn a failed call into the `None` sentinel after telling the user.
    fn recover<T>(&self, what: &str, res: Result<T, ApiError>) -> Option<T> {
        match res {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("{} failed: {}", what, e);
                e.report();
                None
            }
        }
    }
}

impl TournamentApi for ApiClient {
    fn list(&self) -> Option<Vec<TournamentSummary>> {
        let res = self.request(Method::GET, "tournaments", None::<&()>);
        self.recover("list tournaments", res)
    }

    fn get(&self, id: i64) -> Option<Tournament> {
        let res = self.request(Method::GET, &format!("tournaments/{id}"), None::<&()>);
        self.recover("fetch tournament", res)
    }

    fn create(&self, data: &Tournament) -> Option<Created> {
        let res = self.request(Method::POST, "tournaments", Some(data));
        self.recover("create tournament", res)
    }

    fn update(&self, id: i64, data: &Tournament) -> Option<serde_json::Value> {
        let res = self.request(Method::PUT, &format!("tournaments/{id}"), Some(data));
        self.recover("update tournament", res)
    }

    fn delete(&self, id: i64) -> Option<Deleted> {
        // Only the status matters; whatever body came back is discarded.
        let res = self
            .request::<serde_json::Value, ()>(Method::DELETE, &format!("tournaments/{id}"), None)
            .map(|_| Deleted);
        self.recover("delete tournament", res)
    }
}
