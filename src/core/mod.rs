pub mod aggregator;

pub use crate::domain::model::{EnrichedItem, ItemDetails, RankedItem};
pub use crate::domain::ports::{ConfigProvider, DetailsProvider, PlayerCountProvider, RankingProvider};
pub use crate::utils::error::Result;
pub use aggregator::TopGamesAggregator;
