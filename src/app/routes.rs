use crate::adapters::SteamClient;
use crate::app::error::ApiError;
use crate::config::ServiceConfig;
use crate::core::TopGamesAggregator;
use crate::domain::model::EnrichedItem;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub type SteamAggregator = TopGamesAggregator<SteamClient<ServiceConfig>>;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<SteamAggregator>,
}

impl AppState {
    pub fn from_config(config: ServiceConfig) -> Result<Self> {
        let client = SteamClient::from_config(config)?;
        let top_n = client.config().top_n();
        Ok(Self {
            aggregator: Arc::new(TopGamesAggregator::new(client, top_n)),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/top5", get(top_games))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn top_games(
    State(state): State<AppState>,
) -> std::result::Result<Json<Vec<EnrichedItem>>, ApiError> {
    let games = state.aggregator.top_games().await?;
    Ok(Json(games))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
