mod dom;
mod parser;
pub mod scraper;
pub mod types;

pub use scraper::SteamClient;
pub use types::{Game, SteamScraperError};

pub(crate) const SEARCH_URL: &str =
    "http://store.steampowered.com/search/results?sort_by=_ASC&page=1&term=";
pub(crate) const STEAM_API_URL: &str = "https://store.steampowered.com/api/appdetails?appids=";

/// Default number of search results returned by [`SteamClient::search_games_default`].
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
