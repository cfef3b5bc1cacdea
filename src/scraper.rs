use std::time::Duration;

use crate::parser::{parse_app_details, parse_search_results};
use crate::types::{Game, SteamScraperError};
use crate::{DEFAULT_SEARCH_LIMIT, SEARCH_URL, STEAM_API_URL};

use reqwest::Client;

/// Client for the Steam storefront search page and the appdetails API.
///
/// Stateless beyond the underlying connection handling: every method issues
/// one GET, parses the body, and returns an owned result. Calls are
/// independent and may run concurrently.
#[derive(Debug, Clone)]
pub struct SteamClient {
    client: Client,
    search_url: String,
    api_url: String,
}

impl SteamClient {
    pub fn new() -> Result<Self, SteamScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| SteamScraperError::wrap("Failed to build HTTP client", e))?;

        Ok(Self {
            client,
            search_url: SEARCH_URL.to_string(),
            api_url: STEAM_API_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_endpoints(search_url: &str, api_url: &str) -> Self {
        Self {
            client: Client::new(),
            search_url: search_url.to_string(),
            api_url: api_url.to_string(),
        }
    }

    /// Searches the storefront by free-text query, returning up to `limit`
    /// results in page order. No matches is an empty list, not an error;
    /// a `limit` of zero returns an empty list without issuing a request.
    pub async fn search_games(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Game>, SteamScraperError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let url = format!("{}{}", self.search_url, urlencoding::encode(query));
        log::debug!("GET {url}");

        let html = self
            .fetch_text(&url)
            .await
            .map_err(|e| SteamScraperError::wrap("Failed to fetch game information", e))?;

        Ok(parse_search_results(&html, limit))
    }

    /// [`search_games`](Self::search_games) with [`DEFAULT_SEARCH_LIMIT`].
    pub async fn search_games_default(&self, query: &str) -> Result<Vec<Game>, SteamScraperError> {
        self.search_games(query, DEFAULT_SEARCH_LIMIT).await
    }

    /// Looks a game up by its numeric appid. `Ok(None)` means the storefront
    /// does not know the id or refuses to detail it; the returned record's
    /// `appid` always echoes the requested id.
    pub async fn get_game_by_id(&self, appid: u32) -> Result<Option<Game>, SteamScraperError> {
        let url = format!("{}{}", self.api_url, appid);
        log::debug!("GET {url}");

        let body = self
            .fetch_text(&url)
            .await
            .map_err(|e| SteamScraperError::wrap("Steam API request failed", e))?;

        parse_app_details(&body, appid)
            .map_err(|e| SteamScraperError::wrap("Failed to fetch game by ID", e))
    }

    /// Returns the first search result for `query`, if any.
    #[deprecated(note = "use search_games with a limit of 1")]
    pub async fn get_first_game(&self, query: &str) -> Result<Option<Game>, SteamScraperError> {
        match self.search_games(query, 1).await {
            Ok(games) => Ok(games.into_iter().next()),
            Err(e) => Err(SteamScraperError::wrap("Failed to fetch first game", e)),
        }
    }

    async fn fetch_text(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}
