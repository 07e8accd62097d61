use crate::config;
use crate::open_library::BookSearch;
use dioxus::prelude::*;
use std::sync::Arc;

/// Services handed to the UI at launch
#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub book_search: Arc<dyn BookSearch>,
}

/// Hook to access the app context from components
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}
