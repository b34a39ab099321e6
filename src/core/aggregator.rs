use crate::config::MAX_TOP_N;
use crate::domain::model::EnrichedItem;
use crate::domain::ports::{DetailsProvider, PlayerCountProvider, RankingProvider};
use crate::utils::error::Result;

/// Builds the top games list: ranking, then details and live count per game.
///
/// Upstream calls are issued one at a time. Only a ranking failure aborts;
/// a failed details lookup drops that game and a failed count reads as zero.
pub struct TopGamesAggregator<P> {
    provider: P,
    top_n: usize,
}

impl<P> TopGamesAggregator<P>
where
    P: RankingProvider + DetailsProvider + PlayerCountProvider,
{
    /// `top_n` is capped at [`MAX_TOP_N`].
    pub fn new(provider: P, top_n: usize) -> Self {
        Self {
            provider,
            top_n: top_n.min(MAX_TOP_N),
        }
    }

    pub async fn top_games(&self) -> Result<Vec<EnrichedItem>> {
        let ranks = self.provider.most_played().await?;
        tracing::debug!("Ranking returned {} games", ranks.len());

        let mut games = Vec::with_capacity(self.top_n.min(ranks.len()));

        for rank in ranks.iter().take(self.top_n) {
            let details = match self.provider.details(rank.appid).await {
                Ok(Some(details)) if !details.name.is_empty() => details,
                Ok(_) => {
                    tracing::warn!("No usable details for AppID {}, skipping", rank.appid);
                    continue;
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch details for AppID {}: {}", rank.appid, e);
                    continue;
                }
            };

            let current_players = match self.provider.player_count(rank.appid).await {
                Ok(count) => count,
                Err(e) => {
                    tracing::warn!(
                        "Failed to fetch player count for AppID {}: {}",
                        rank.appid,
                        e
                    );
                    0
                }
            };

            games.push(EnrichedItem::new(details, current_players));
        }

        sort_by_current_players(&mut games);
        tracing::info!("Aggregated {} games", games.len());
        Ok(games)
    }
}

/// Descending by live count. Stable, so ties keep ranking order.
pub fn sort_by_current_players(games: &mut [EnrichedItem]) {
    games.sort_by(|a, b| b.current_players.cmp(&a.current_players));
}
