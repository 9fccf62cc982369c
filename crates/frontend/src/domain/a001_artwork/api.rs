use super::ui::list::selection::IdCollector;
use crate::shared::api_utils::{artworks_url, ApiError};
use artworks_contracts::catalog::{ArtworkListResponse, PageQuery};
use gloo_net::http::Request;

/// Получить одну страницу каталога
pub async fn fetch_artworks(page: u32, limit: u32) -> Result<ArtworkListResponse, ApiError> {
    let url = artworks_url(&PageQuery { page, limit })?;
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<ArtworkListResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Collect the first `needed` ids of the catalog, fetching pages of
/// `limit` records one after another starting from page 1.
pub async fn collect_first_ids(
    needed: usize,
    limit: u32,
    total: u64,
) -> Result<Vec<u64>, ApiError> {
    let mut collector = IdCollector::new(needed, limit, total);
    while let Some(page) = collector.next_page() {
        let resp = fetch_artworks(page, limit).await?;
        collector.absorb(&resp.ids());
    }
    Ok(collector.finish())
}
