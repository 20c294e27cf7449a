use serde::Deserialize;

/// Body of a `GET /books/v1/volumes` response.
///
/// Only the fields the search page reads are modelled. `items` is omitted by
/// the API entirely when nothing matches.
#[derive(Debug, Deserialize, Default)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub id: Option<String>,
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}
