use crate::models::google_books::{Volume, VolumesResponse};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const NO_DESCRIPTION: &str = "No description available";

/// A volume normalized for display. Built per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub description: String,
    pub thumbnail: String,
}

impl From<Volume> for BookSummary {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info;

        let authors = match info.authors {
            Some(authors) if !authors.is_empty() => authors,
            _ => vec![UNKNOWN_AUTHOR.to_string()],
        };

        // An empty description counts as missing.
        let description = info
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        let thumbnail = info
            .image_links
            .and_then(|links| links.thumbnail)
            .unwrap_or_default();

        BookSummary {
            id: volume.id,
            title: info.title,
            authors,
            description,
            thumbnail,
        }
    }
}

/// Maps every upstream item, in upstream order.
pub fn map_volumes(response: VolumesResponse) -> Vec<BookSummary> {
    response
        .items
        .unwrap_or_default()
        .into_iter()
        .map(BookSummary::from)
        .collect()
}
