pub mod dto;

pub use dto::{ArtworkDto, ArtworkListResponse, PageQuery, Pagination};
