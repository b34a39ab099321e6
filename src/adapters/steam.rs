use crate::config::ServiceConfig;
use crate::domain::model::{ItemDetails, RankedItem};
use crate::domain::ports::{ConfigProvider, DetailsProvider, PlayerCountProvider, RankingProvider};
use crate::utils::error::{AggregatorError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct MostPlayedResponse {
    response: MostPlayedBody,
}

#[derive(Debug, Deserialize)]
struct MostPlayedBody {
    #[serde(default)]
    ranks: Vec<RankedItem>,
}

#[derive(Debug, Deserialize)]
struct AppDetailsEntry {
    #[serde(default)]
    data: Option<ItemDetails>,
}

#[derive(Debug, Deserialize)]
struct PlayerCountResponse {
    response: PlayerCountBody,
}

#[derive(Debug, Deserialize)]
struct PlayerCountBody {
    // Steam omits the field for unknown apps.
    #[serde(default)]
    player_count: u64,
}

/// reqwest-backed client for the three Steam endpoints the aggregator reads.
pub struct SteamClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> SteamClient<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} responded with status {}", endpoint, status);

        if !status.is_success() {
            return Err(AggregatorError::UpstreamStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl SteamClient<ServiceConfig> {
    pub fn from_config(config: ServiceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self::with_client(config, client))
    }
}

#[async_trait]
impl<C: ConfigProvider> RankingProvider for SteamClient<C> {
    async fn most_played(&self) -> Result<Vec<RankedItem>> {
        let request = self
            .client
            .get(self.config.ranking_endpoint())
            .query(&[("key", self.config.api_key())]);

        let ranking: MostPlayedResponse = self.get_json("ranking", request).await?;
        Ok(ranking.response.ranks)
    }
}

#[async_trait]
impl<C: ConfigProvider> DetailsProvider for SteamClient<C> {
    async fn details(&self, appid: u32) -> Result<Option<ItemDetails>> {
        let request = self
            .client
            .get(self.config.details_endpoint())
            .query(&[("appids", appid)]);

        let mut body: serde_json::Value = self.get_json("details", request).await?;

        // Exactly one id is queried, so only that key is decoded.
        let entry = match body.get_mut(appid.to_string()) {
            Some(entry) => entry.take(),
            None => return Ok(None),
        };
        let entry: AppDetailsEntry = serde_json::from_value(entry)?;
        Ok(entry.data)
    }
}

#[async_trait]
impl<C: ConfigProvider> PlayerCountProvider for SteamClient<C> {
    async fn player_count(&self, appid: u32) -> Result<u64> {
        let appid = appid.to_string();
        let request = self
            .client
            .get(self.config.player_count_endpoint())
            .query(&[("appid", appid.as_str()), ("key", self.config.api_key())]);

        let count: PlayerCountResponse = self.get_json("player count", request).await?;
        Ok(count.response.player_count)
    }
}
