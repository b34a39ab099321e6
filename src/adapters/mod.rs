// Adapters layer: concrete implementations of the domain ports.

pub mod steam;

pub use steam::SteamClient;
