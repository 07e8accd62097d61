mod card;
mod form;
mod grid;
mod page;
mod status;

pub use card::BookCard;
pub use form::SearchForm;
pub use grid::BookGrid;
pub use page::BookSearchPage;
pub use status::SearchStatus;
