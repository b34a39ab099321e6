#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_RANKING_ENDPOINT: &str =
    "https://api.steampowered.com/ISteamChartsService/GetMostPlayedGames/v1/";
pub const DEFAULT_DETAILS_ENDPOINT: &str = "https://store.steampowered.com/api/appdetails";
pub const DEFAULT_PLAYER_COUNT_ENDPOINT: &str =
    "https://api.steampowered.com/ISteamUserStats/GetNumberOfCurrentPlayers/v1/";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TOP_N: usize = 10;
/// `/top5` never returns more entries than this.
pub const MAX_TOP_N: usize = 10;

/// Settings resolved once at startup and shared read-only by every request.
#[derive(Clone)]
pub struct ServiceConfig {
    pub api_key: String,
    pub host: String,
    pub port: u16,
    pub ranking_endpoint: String,
    pub details_endpoint: String,
    pub player_count_endpoint: String,
    pub top_n: usize,
    /// `None` keeps reqwest's transport defaults.
    pub request_timeout_secs: Option<u64>,
}

impl ServiceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            ranking_endpoint: DEFAULT_RANKING_ENDPOINT.to_string(),
            details_endpoint: DEFAULT_DETAILS_ENDPOINT.to_string(),
            player_count_endpoint: DEFAULT_PLAYER_COUNT_ENDPOINT.to_string(),
            top_n: DEFAULT_TOP_N,
            request_timeout_secs: None,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("ranking_endpoint", &self.ranking_endpoint)
            .field("details_endpoint", &self.details_endpoint)
            .field("player_count_endpoint", &self.player_count_endpoint)
            .field("top_n", &self.top_n)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl ConfigProvider for ServiceConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn ranking_endpoint(&self) -> &str {
        &self.ranking_endpoint
    }

    fn details_endpoint(&self) -> &str {
        &self.details_endpoint
    }

    fn player_count_endpoint(&self) -> &str {
        &self.player_count_endpoint
    }

    fn top_n(&self) -> usize {
        self.top_n
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_url("ranking_endpoint", &self.ranking_endpoint)?;
        validate_url("details_endpoint", &self.details_endpoint)?;
        validate_url("player_count_endpoint", &self.player_count_endpoint)?;
        validate_non_empty_string("host", &self.host)?;
        validate_range("top_n", self.top_n, 1, MAX_TOP_N)?;
        if let Some(secs) = self.request_timeout_secs {
            validate_range("request_timeout_secs", secs, 1, 300)?;
        }

        // Upstream stubs may not need a key, so an empty one is only worth a warning.
        if validate_non_empty_string("api_key", &self.api_key).is_err() {
            tracing::warn!("STEAM_API_KEY is empty; Steam Web API calls will likely be rejected");
        }

        tracing::debug!("Service configuration validation passed");
        Ok(())
    }
}
