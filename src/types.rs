use serde::{Deserialize, Serialize};

/// Normalized game record produced by both the search and appdetails paths.
///
/// Missing data degrades to defaults instead of failing the whole call:
/// `title` and `release` fall back to empty strings, `price` to a sentinel,
/// `image` and `appid` to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub release: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appid: Option<u32>,
}

/// Single error kind for every transport or extraction failure.
///
/// The message carries an operation-specific prefix so callers can tell
/// which request failed from the message alone; the underlying failure
/// stays available through [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SteamScraperError {
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SteamScraperError {
    pub(crate) fn wrap<E>(prefix: &str, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: format!("{prefix}: {cause}"),
            cause: Some(Box::new(cause)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One entry of the appdetails response, keyed by stringified appid.
/// An absent `success` flag reads as a failed lookup.
#[derive(Debug, Deserialize)]
pub(crate) struct AppDetailsEntry {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<AppDetails>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppDetails {
    pub name: String,
    #[serde(default)]
    pub header_image: String,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub release_date: Option<ReleaseDate>,
    #[serde(default)]
    pub price_overview: Option<PriceOverview>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReleaseDate {
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PriceOverview {
    #[serde(default)]
    pub final_formatted: Option<String>,
}
