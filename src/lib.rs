pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::SteamClient;
pub use app::{create_router, serve, AppState};
pub use config::ServiceConfig;
pub use core::TopGamesAggregator;
pub use domain::model::EnrichedItem;
pub use utils::error::{AggregatorError, Result};
