use crate::config::Config;
use crate::shape::ProfileMode;
use crate::upstream::UpstreamClient;

/// Shared per-process state handed to every request handler.
pub struct AppState {
    pub upstream: UpstreamClient,
    pub mode: ProfileMode,
    pub image_base_url: String,
}

impl AppState {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        Ok(Self {
            upstream: UpstreamClient::new(config)?,
            mode: config.mode,
            image_base_url: config.image_base_url.clone(),
        })
    }
}
