pub mod book;
pub mod google_books;
pub mod responses;
