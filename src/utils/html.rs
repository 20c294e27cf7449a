use crate::models::book::BookSummary;
use crate::utils::text::{escape_html, preview};
use std::fmt::Write;

pub const NO_RESULTS_MESSAGE: &str = "No books found. Try searching for something else.";

const STYLE: &str = "\
body{margin:0;min-height:100vh;background:#f3f4f6;font-family:sans-serif;display:flex;flex-direction:column;align-items:center}\
h1{font-size:2.25rem;color:#1f2937;margin-top:2rem}\
form{margin-top:1.5rem;width:100%;max-width:32rem;display:flex}\
form input{flex:1;padding:.75rem;border:1px solid #d1d5db;border-radius:.375rem 0 0 .375rem}\
form button{padding:.75rem;background:#3b82f6;color:#fff;font-weight:600;border:0;border-radius:0 .375rem .375rem 0}\
.book-list{margin-top:2.5rem;display:grid;grid-template-columns:repeat(auto-fill,minmax(18rem,1fr));gap:1.5rem;width:100%;max-width:72rem;padding:0 1rem;box-sizing:border-box}\
.card{background:#fff;box-shadow:0 4px 6px rgba(0,0,0,.1);border-radius:.5rem;display:flex;flex-direction:column;align-items:center;padding:1rem}\
.cover{width:8rem;height:12rem;object-fit:cover;margin-bottom:1rem}\
.cover.blank{background:#e5e7eb}\
.authors{font-size:.875rem;color:#4b5563}\
.description{font-size:.875rem;color:#6b7280;margin-top:.5rem}\
.empty{color:#6b7280;font-size:1.125rem}";

/// Renders the whole search page for `query` and its results.
pub fn render_page(query: Option<&str>, books: &[BookSummary]) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        "<!DOCTYPE html>\
<html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
<title>Search for Books</title><style>{STYLE}</style></head><body>\
<h1>Search for Books</h1>\
<form method=\"get\">\
<input type=\"text\" name=\"query\" value=\"{}\" placeholder=\"Enter book title or author\">\
<button type=\"submit\">Search</button>\
</form>\
<div class=\"book-list\">",
        escape_html(query.unwrap_or_default())
    );

    if books.is_empty() {
        let _ = write!(html, "<p class=\"empty\">{NO_RESULTS_MESSAGE}</p>");
    } else {
        for book in books {
            render_card(&mut html, book);
        }
    }

    html.push_str("</div></body></html>");
    html
}

fn render_card(html: &mut String, book: &BookSummary) {
    let title = escape_html(book.title.as_deref().unwrap_or_default());

    html.push_str("<div class=\"card\">");
    if book.thumbnail.is_empty() {
        html.push_str("<div class=\"cover blank\"></div>");
    } else {
        let _ = write!(
            html,
            "<img class=\"cover\" src=\"{}\" alt=\"{}\">",
            escape_html(&book.thumbnail),
            title
        );
    }
    let _ = write!(
        html,
        "<h3>{}</h3><p class=\"authors\">{}</p><p class=\"description\">{}</p></div>",
        title,
        escape_html(&book.authors.join(", ")),
        escape_html(&preview(&book.description))
    );
}
