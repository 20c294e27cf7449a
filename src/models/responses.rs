use crate::models::book::BookSummary;
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "book-search";

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            status: "running".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchResponse {
    pub books: Vec<BookSummary>,
}
