use serde::{Deserialize, Serialize};

/// Artwork record as returned by `GET /artworks`
///
/// Only the columns shown in the table are kept; everything else in the
/// payload is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworkDto {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
}

impl ArtworkDto {
    pub fn title_or_default(&self) -> String {
        self.title.clone().unwrap_or_default()
    }

    /// Artist line, or `"N/A"` when the catalog has none
    pub fn artist_or_default(&self) -> String {
        non_empty(self.artist_display.as_deref()).unwrap_or("N/A").to_string()
    }

    /// Place of origin, or `"Unknown"` when the catalog has none
    pub fn origin_or_default(&self) -> String {
        non_empty(self.place_of_origin.as_deref())
            .unwrap_or("Unknown")
            .to_string()
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

/// `pagination` block of a list response. Only `total` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkListResponse {
    pub data: Vec<ArtworkDto>,
    pub pagination: Pagination,
}

impl ArtworkListResponse {
    pub fn ids(&self) -> Vec<u64> {
        self.data.iter().map(|a| a.id).collect()
    }
}

/// Query string of a list request (1-based page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "pagination": {
            "total": 129884,
            "limit": 2,
            "offset": 0,
            "total_pages": 64942,
            "current_page": 1,
            "next_url": "https://api.artic.edu/api/v1/artworks?page=2&limit=2"
        },
        "data": [
            {
                "id": 27992,
                "title": "A Sunday on La Grande Jatte - 1884",
                "artist_display": "Georges Seurat\nFrench, 1859-1891",
                "place_of_origin": "France",
                "date_display": "1884-86"
            },
            {
                "id": 4,
                "title": "Priest and Boy",
                "artist_display": "",
                "place_of_origin": null
            }
        ],
        "info": { "version": "1.13" }
    }"#;

    #[test]
    fn test_parse_list_response() {
        let resp: ArtworkListResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(resp.pagination.total, 129884);
        assert_eq!(resp.pagination.current_page, Some(1));
        assert_eq!(resp.ids(), vec![27992, 4]);
        assert_eq!(resp.data[0].place_of_origin.as_deref(), Some("France"));
    }

    #[test]
    fn test_display_fallbacks() {
        let resp: ArtworkListResponse = serde_json::from_str(SAMPLE).unwrap();
        let second = &resp.data[1];
        assert_eq!(second.artist_or_default(), "N/A");
        assert_eq!(second.origin_or_default(), "Unknown");
        assert_eq!(second.title_or_default(), "Priest and Boy");

        let first = &resp.data[0];
        assert_eq!(first.origin_or_default(), "France");
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let a: ArtworkDto = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(a.title, None);
        assert_eq!(a.title_or_default(), "");
        assert_eq!(a.artist_or_default(), "N/A");
    }

    #[test]
    fn test_pagination_requires_total() {
        let p = serde_json::from_str::<Pagination>(r#"{"limit": 5}"#);
        assert!(p.is_err());
    }
}
