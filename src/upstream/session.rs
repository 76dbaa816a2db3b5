use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::config::{FALLBACK_TOKEN, TOKEN_HEADER};

#[derive(Debug, Error)]
enum BootstrapError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("bootstrap response has no `x-mas` field")]
    MissingField,
}

/// Process-wide session token for the upstream API.
///
/// Fetched from the bootstrap service on first use and reused for the rest
/// of the process lifetime — including the fallback value stored when the
/// bootstrap call fails, so a failed bootstrap is never retried.
pub struct SessionToken {
    bootstrap_url: String,
    value: OnceCell<String>,
}

impl SessionToken {
    pub fn new(bootstrap_url: String) -> Self {
        Self {
            bootstrap_url,
            value: OnceCell::new(),
        }
    }

    /// The memoized token, fetching it on first use. Never fails: bootstrap
    /// problems are logged and absorbed into the fallback credential.
    pub async fn ensure(&self, http: &Client) -> &str {
        self.value
            .get_or_init(|| async {
                match bootstrap(http, &self.bootstrap_url).await {
                    Ok(token) => {
                        info!("session token sync success");
                        token
                    }
                    Err(err) => {
                        warn!("failed to fetch session token: {}, using fallback", err);
                        FALLBACK_TOKEN.to_string()
                    }
                }
            })
            .await
    }
}

async fn bootstrap(http: &Client, url: &str) -> Result<String, BootstrapError> {
    let body = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    body.get(TOKEN_HEADER)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(BootstrapError::MissingField)
}
