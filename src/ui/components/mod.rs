pub mod app;
pub mod book_search;

pub use app::App;
pub use book_search::*;
