pub mod google_books;
pub mod search;
