use std::collections::HashMap;
use std::sync::LazyLock;

use crate::dom::{DocumentView, ElementView, HtmlDocument};
use crate::types::{AppDetailsEntry, Game};

use regex::Regex;

static RE_APP_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/app/(\d+)").expect("invalid regex: app href"));

pub(crate) const PRICE_UNAVAILABLE: &str = "Price not available";
pub(crate) const PRICE_FREE: &str = "Free";
pub(crate) const PRICE_NOT_FOR_PURCHASE: &str = "Not available for purchase";

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts up to `limit` result rows from a storefront search page, in
/// document order. Rows with missing fields are kept, not dropped; a page
/// with no result rows yields an empty list.
pub(crate) fn parse_search_results(html: &str, limit: usize) -> Vec<Game> {
    let document = HtmlDocument::parse(html);
    extract_search_rows(&document, limit)
}

fn extract_search_rows<D: DocumentView>(document: &D, limit: usize) -> Vec<Game> {
    document
        .find_all(".search_result_row")
        .iter()
        .take(limit)
        .map(extract_row)
        .collect()
}

fn extract_row<E: ElementView>(row: &E) -> Game {
    let appid = extract_appid(row);
    if appid.is_none() {
        log::warn!("search result row carries no extractable appid");
    }

    Game {
        title: row
            .find(".title")
            .map(|e| e.text().trim().to_string())
            .unwrap_or_default(),
        release: row
            .find(".search_released")
            .map(|e| e.text().trim().to_string())
            .unwrap_or_default(),
        price: extract_price(row),
        image: row.find("img").and_then(|e| e.attribute("src")),
        appid,
    }
}

/// The data attribute is authoritative; the product link path is the
/// fallback. A row with neither yields `None` rather than an error.
fn extract_appid<E: ElementView>(row: &E) -> Option<u32> {
    if let Some(id) = row.attribute("data-ds-appid").and_then(|v| v.parse().ok()) {
        return Some(id);
    }

    row.attribute("href")
        .and_then(|href| RE_APP_HREF.captures(&href).and_then(|caps| caps[1].parse().ok()))
}

fn extract_price<E: ElementView>(row: &E) -> String {
    let mut price = row
        .find(".search_price")
        .map(|e| normalize_whitespace(&e.text()))
        .unwrap_or_default();

    if price.is_empty() {
        price = row
            .find(".search_price_discount_combined")
            .map(|e| normalize_whitespace(&e.text()))
            .unwrap_or_default();
    }

    if price.is_empty() {
        PRICE_UNAVAILABLE.to_string()
    } else {
        price
    }
}

/// Maps an appdetails response body to a record. `Ok(None)` covers the
/// ordinary not-found outcomes: key absent, `success` false, or no payload.
/// The returned `appid` echoes the requested id, never the payload's own.
pub(crate) fn parse_app_details(body: &str, appid: u32) -> Result<Option<Game>, serde_json::Error> {
    let response: HashMap<String, AppDetailsEntry> = serde_json::from_str(body)?;

    let Some(entry) = response.get(&appid.to_string()) else {
        return Ok(None);
    };
    if !entry.success {
        return Ok(None);
    }
    let Some(data) = &entry.data else {
        return Ok(None);
    };

    // The free flag wins even when a formatted price is present.
    let price = if data.is_free {
        PRICE_FREE.to_string()
    } else if let Some(formatted) = data
        .price_overview
        .as_ref()
        .and_then(|p| p.final_formatted.clone())
    {
        formatted
    } else {
        PRICE_NOT_FOR_PURCHASE.to_string()
    };

    Ok(Some(Game {
        title: data.name.clone(),
        price,
        release: data
            .release_date
            .as_ref()
            .map(|r| r.date.clone())
            .unwrap_or_default(),
        // This path reports a missing image as Some(""), unlike the search
        // path which leaves the field out entirely. Kept as-is.
        image: Some(data.header_image.clone()),
        appid: Some(appid),
    }))
}
