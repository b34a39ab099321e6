use crate::domain::model::{ItemDetails, RankedItem};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait RankingProvider: Send + Sync {
    async fn most_played(&self) -> Result<Vec<RankedItem>>;
}

#[async_trait]
pub trait DetailsProvider: Send + Sync {
    /// `Ok(None)` when the upstream answered but has no usable entry for `appid`.
    async fn details(&self, appid: u32) -> Result<Option<ItemDetails>>;
}

#[async_trait]
pub trait PlayerCountProvider: Send + Sync {
    async fn player_count(&self, appid: u32) -> Result<u64>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn ranking_endpoint(&self) -> &str;
    fn details_endpoint(&self) -> &str;
    fn player_count_endpoint(&self) -> &str;
    fn top_n(&self) -> usize;
}
