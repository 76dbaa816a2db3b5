use std::time::Duration;

use crate::shape::ProfileMode;

/// Base URL of the upstream football-statistics API.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://www.fotmob.com/api";

/// Bootstrap service that hands out the current `x-mas` session token.
pub const DEFAULT_BOOTSTRAP_URL: &str = "http://46.101.91.154:6006/";

/// Host serving player photos and team logos.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://images.fotmob.com/image_resources";

/// How long a cached upstream payload stays fresh.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

/// Upper bound for a single upstream call.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// The upstream API only answers to its own mobile client.
pub const UPSTREAM_USER_AGENT: &str = "FotMob-Android-App/1000.2.148";

/// Header carrying the session token on upstream requests.
pub const TOKEN_HEADER: &str = "x-mas";

/// Credential used when the bootstrap service cannot be reached.
pub const FALLBACK_TOKEN: &str = "default-fallback";

/// Service configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub upstream_base_url: String,
    pub bootstrap_url: String,
    pub image_base_url: String,
    pub cache_ttl: Duration,
    pub mode: ProfileMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            bootstrap_url: DEFAULT_BOOTSTRAP_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            mode: ProfileMode::default(),
        }
    }
}

impl Config {
    /// Build a config from the environment, falling back to the production
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            upstream_base_url: std::env::var("UPSTREAM_BASE_URL")
                .unwrap_or(defaults.upstream_base_url),
            bootstrap_url: std::env::var("BOOTSTRAP_URL").unwrap_or(defaults.bootstrap_url),
            image_base_url: std::env::var("IMAGE_BASE_URL").unwrap_or(defaults.image_base_url),
            cache_ttl: std::env::var("CACHE_TTL_SECS")
                .ok()
                .map(|v| {
                    v.parse()
                        .map(Duration::from_secs)
                        .expect("CACHE_TTL_SECS is not in the correct format")
                })
                .unwrap_or(defaults.cache_ttl),
            mode: std::env::var("PROFILE_MODE")
                .ok()
                .map(|v| {
                    v.parse()
                        .expect("PROFILE_MODE must be raw, profile, or card")
                })
                .unwrap_or(defaults.mode),
        }
    }
}
