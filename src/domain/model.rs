use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a game as handed out by the ranking provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedItem {
    pub appid: u32,
}

/// Store metadata for one game. Missing or `null` fields decode as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ItemDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steam_appid: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub header_image: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of the `/top5` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedItem {
    pub name: String,
    pub steam_appid: u32,
    pub header_image: String,
    pub current_players: u64,
}

impl EnrichedItem {
    pub fn new(details: ItemDetails, current_players: u64) -> Self {
        Self {
            name: details.name,
            steam_appid: details.steam_appid,
            header_image: details.header_image,
            current_players,
        }
    }
}
