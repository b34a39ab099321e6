use super::{
    ServiceConfig, DEFAULT_DETAILS_ENDPOINT, DEFAULT_HOST, DEFAULT_PLAYER_COUNT_ENDPOINT,
    DEFAULT_PORT, DEFAULT_RANKING_ENDPOINT, DEFAULT_TOP_N,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "steam-top-games")]
#[command(about = "Serves the most played Steam games enriched with live player counts")]
pub struct CliConfig {
    #[arg(long, env = "STEAM_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "RANKING_ENDPOINT", default_value = DEFAULT_RANKING_ENDPOINT)]
    pub ranking_endpoint: String,

    #[arg(long, env = "DETAILS_ENDPOINT", default_value = DEFAULT_DETAILS_ENDPOINT)]
    pub details_endpoint: String,

    #[arg(long, env = "PLAYER_COUNT_ENDPOINT", default_value = DEFAULT_PLAYER_COUNT_ENDPOINT)]
    pub player_count_endpoint: String,

    #[arg(long, env = "TOP_N", default_value_t = DEFAULT_TOP_N, help = "Ranked games to enrich (1-10)")]
    pub top_n: usize,

    #[arg(long, env = "REQUEST_TIMEOUT_SECS", help = "Per-call upstream timeout")]
    pub request_timeout_secs: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, env = "JSON_LOGS", help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Call after the logger is up so the missing-port warning is visible.
    pub fn into_service_config(self) -> ServiceConfig {
        ServiceConfig {
            api_key: self.api_key,
            host: self.host,
            port: resolve_port(self.port),
            ranking_endpoint: self.ranking_endpoint,
            details_endpoint: self.details_endpoint,
            player_count_endpoint: self.player_count_endpoint,
            top_n: self.top_n,
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}

fn resolve_port(port: Option<u16>) -> u16 {
    match port {
        Some(port) => port,
        None => {
            tracing::warn!("PORT is not set, falling back to {}", DEFAULT_PORT);
            DEFAULT_PORT
        }
    }
}
