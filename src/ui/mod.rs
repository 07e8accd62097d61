pub mod app;
pub mod app_context;
pub mod components;
pub mod search_context;

pub use app::*;
pub use app_context::{use_app_context, AppContext};
pub use components::*;
pub use search_context::{BookSearchContext, BookSearchContextProvider};

// Re-export constants from app module
pub use app::{MAIN_CSS, TAILWIND_CSS};
