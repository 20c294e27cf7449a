use crate::models::responses::SearchResponse;
use crate::services::search::{resolve_query, search_books, SearchParams};
use crate::utils::html::render_page;
use crate::Source;
use axum::{
    extract::{Query, State},
    response::{Html, Json},
};

type Pairs = Option<Query<Vec<(String, String)>>>;

// Parameters are read as ordered pairs so a repeated `query` keeps its first
// value. A query string that does not decode is treated like no query at all.
fn params_from(pairs: Pairs) -> SearchParams {
    pairs
        .map(|Query(pairs)| SearchParams::from_pairs(pairs))
        .unwrap_or_default()
}

pub async fn search_page(
    State(source): State<Source>,
    pairs: Pairs,
) -> Html<String> {
    let params = params_from(pairs);
    let books = search_books(source.as_ref(), &params).await;
    Html(render_page(resolve_query(&params), &books))
}

pub async fn search_api(
    State(source): State<Source>,
    pairs: Pairs,
) -> Json<SearchResponse> {
    let params = params_from(pairs);
    let books = search_books(source.as_ref(), &params).await;
    Json(SearchResponse { books })
}
