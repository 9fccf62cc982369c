//! Catalog API endpoint configuration and request errors.

use artworks_contracts::catalog::PageQuery;
use thiserror::Error;

/// Base URL of the public catalog API
pub const CATALOG_BASE: &str = "https://api.artic.edu/api/v1";

/// Errors of a single catalog request
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build query string: {0}")]
    Query(#[from] serde_qs::Error),

    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Build a full catalog URL from a path
///
/// # Example
/// ```ignore
/// let url = catalog_url("/artworks");
/// ```
pub fn catalog_url(path: &str) -> String {
    format!("{}{}", CATALOG_BASE, path)
}

/// URL of one page of the artworks list
pub fn artworks_url(query: &PageQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query)?;
    Ok(format!("{}?{}", catalog_url("/artworks"), qs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artworks_url() {
        let url = artworks_url(&PageQuery { page: 3, limit: 25 }).unwrap();
        assert_eq!(url, "https://api.artic.edu/api/v1/artworks?page=3&limit=25");
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(ApiError::Status(503).to_string(), "HTTP error: 503");
    }
}
