use crate::models::book::{map_volumes, BookSummary};
use crate::services::google_books::{SearchError, VolumeSource};
use tracing::{error, info, warn};

#[derive(Debug, Default)]
pub struct SearchParams {
    pub query: Option<String>,
}

impl SearchParams {
    /// Takes the first `query` pair; later repeats are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let query = pairs
            .into_iter()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| value);
        Self { query }
    }
}

/// Returns the raw `query` value, or `None` when it is missing or empty.
/// The value is not trimmed or otherwise touched.
pub fn resolve_query(params: &SearchParams) -> Option<&str> {
    params.query.as_deref().filter(|q| !q.is_empty())
}

/// Runs one upstream search and maps the result. Every failure is returned
/// to the caller with its classification intact.
pub async fn fetch_books(
    source: &(dyn VolumeSource + Send + Sync),
    query: &str,
) -> Result<Vec<BookSummary>, SearchError> {
    let response = source.search_volumes(query).await?;
    Ok(map_volumes(response))
}

/// Resolves the query and searches upstream.
///
/// This is the only place search failures are swallowed: a missing query,
/// a transport error, a non-success status and a malformed payload all come
/// back as an empty list, so the page can always be rendered. The failure
/// class is logged and not surfaced.
pub async fn search_books(
    source: &(dyn VolumeSource + Send + Sync),
    params: &SearchParams,
) -> Vec<BookSummary> {
    let Some(query) = resolve_query(params) else {
        return Vec::new();
    };

    info!("Search query: {}", query);

    match fetch_books(source, query).await {
        Ok(books) => {
            info!("Found {} books for '{}'", books.len(), query);
            books
        }
        Err(SearchError::Status(status)) => {
            warn!("Error fetching books for '{}': upstream status {}", query, status);
            Vec::new()
        }
        Err(e @ SearchError::Transport(_)) => {
            warn!("Error fetching books for '{}': {}", query, e);
            Vec::new()
        }
        Err(e @ SearchError::Decode(_)) => {
            error!("Could not read upstream response for '{}': {}", query, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::google_books::VolumesResponse;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Reply {
        Json(&'static str),
        Status(StatusCode),
        Transport,
    }

    struct FakeSource {
        reply: Reply,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl VolumeSource for FakeSource {
        async fn search_volumes(&self, _query: &str) -> Result<VolumesResponse, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Reply::Json(body) => Ok(serde_json::from_str(body)?),
                Reply::Status(status) => Err(SearchError::Status(*status)),
                // A relative URL fails inside reqwest before any socket is opened.
                Reply::Transport => Err(reqwest::Client::new()
                    .get("not-a-url")
                    .send()
                    .await
                    .unwrap_err()
                    .into()),
            }
        }
    }

    fn params(query: Option<&str>) -> SearchParams {
        SearchParams {
            query: query.map(str::to_string),
        }
    }

    #[test]
    fn resolve_query_passes_value_through_verbatim() {
        assert_eq!(resolve_query(&params(Some("  Dune & C++ "))), Some("  Dune & C++ "));
    }

    #[test]
    fn first_query_pair_wins() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("query".to_string(), "dune".to_string()),
            ("query".to_string(), "x".to_string()),
        ];
        let params = SearchParams::from_pairs(pairs);
        assert_eq!(resolve_query(&params), Some("dune"));
    }

    #[test]
    fn empty_first_query_pair_is_absent() {
        let pairs = vec![
            ("query".to_string(), String::new()),
            ("query".to_string(), "dune".to_string()),
        ];
        assert_eq!(resolve_query(&SearchParams::from_pairs(pairs)), None);
    }

    #[test]
    fn resolve_query_treats_missing_and_empty_as_absent() {
        assert_eq!(resolve_query(&params(None)), None);
        assert_eq!(resolve_query(&params(Some(""))), None);
    }

    #[tokio::test]
    async fn absent_query_never_calls_upstream() {
        let source = FakeSource::new(Reply::Json(r#"{"items":[]}"#));

        assert!(search_books(&source, &params(None)).await.is_empty());
        assert!(search_books(&source, &params(Some(""))).await.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failure_status_yields_empty_list() {
        let source = FakeSource::new(Reply::Status(StatusCode::INTERNAL_SERVER_ERROR));

        assert!(search_books(&source, &params(Some("dune"))).await.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transport_failure_yields_empty_list() {
        let source = FakeSource::new(Reply::Transport);

        let err = fetch_books(&source, "dune").await.unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
        assert!(search_books(&source, &params(Some("dune"))).await.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn malformed_payload_is_classified_then_contained() {
        let source = FakeSource::new(Reply::Json("<html>not json</html>"));

        let err = fetch_books(&source, "dune").await.unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
        assert!(search_books(&source, &params(Some("dune"))).await.is_empty());
    }

    #[tokio::test]
    async fn successful_search_maps_items() {
        let source = FakeSource::new(Reply::Json(
            r#"{"items":[{"id":"abc123","volumeInfo":{"title":"Dune","authors":["Frank Herbert"]}}]}"#,
        ));

        let books = search_books(&source, &params(Some("dune"))).await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title.as_deref(), Some("Dune"));
        assert_eq!(books[0].description, "No description available");
    }
}
