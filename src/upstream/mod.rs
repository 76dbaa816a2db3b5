// Upstream API access: session bootstrap, response cache, cached fetcher.

pub mod cache;
pub mod session;

use reqwest::{header, Client};
use serde_json::Value;
use tracing::debug;

use crate::config::{Config, TOKEN_HEADER, UPSTREAM_TIMEOUT, UPSTREAM_USER_AGENT};
use cache::ResponseCache;
use session::SessionToken;

/// HTTP client for the upstream football-statistics API with a time-bounded
/// response cache in front of it.
pub struct UpstreamClient {
    http: Client,
    base_url: String,
    token: SessionToken,
    cache: ResponseCache,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(UPSTREAM_USER_AGENT)
            .default_headers(headers)
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
            token: SessionToken::new(config.bootstrap_url.clone()),
            cache: ResponseCache::new(config.cache_ttl),
        })
    }

    /// Raw player payload for `id`, served from the cache when fresh.
    ///
    /// On a miss the session token is ensured, one upstream GET is issued,
    /// and the result overwrites the cache entry. Transport and non-2xx
    /// errors propagate; the cache is left untouched by a failed fetch.
    /// The id is interpolated into the request path as-is.
    pub async fn fetch_player(&self, id: &str) -> reqwest::Result<Value> {
        let path = format!("playerData?id={}", id);

        if let Some(payload) = self.cache.get(&path) {
            debug!("cache hit for {}", path);
            return Ok(payload);
        }

        let token = self.token.ensure(&self.http).await;

        let payload = self
            .http
            .get(format!("{}/{}", self.base_url, path))
            .header(TOKEN_HEADER, token)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        self.cache.insert(&path, payload.clone());
        Ok(payload)
    }
}
