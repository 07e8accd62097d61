use crate::open_library::{BookSearch, LinkBases};
use crate::search::{run_search, SearchSession};
use crate::ui::app_context::use_app_context;
use dioxus::core::Task;
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// Search page state shared by the form, status line and result grid
#[derive(Clone)]
pub struct BookSearchContext {
    session: Signal<SearchSession>,
    in_flight: Signal<Option<Task>>,
    book_search: Arc<dyn BookSearch>,
}

impl BookSearchContext {
    pub fn new(book_search: Arc<dyn BookSearch>, links: LinkBases) -> Self {
        Self {
            session: Signal::new(SearchSession::new(links)),
            in_flight: Signal::new(None),
            book_search,
        }
    }

    pub fn session(&self) -> Signal<SearchSession> {
        self.session
    }

    pub fn set_query(&self, query: String) {
        let mut session = self.session;
        session.write().set_query(query);
    }

    /// Start a search for the current query. An empty query is ignored; an
    /// earlier search that is still running is cancelled.
    pub fn search(&self) {
        let mut session = self.session;
        let Some(request) = session.write().begin_search() else {
            return;
        };

        let mut in_flight = self.in_flight;
        if let Some(previous) = in_flight.write().take() {
            debug!("Cancelling superseded search before #{}", request.id);
            previous.cancel();
        }

        let book_search = self.book_search.clone();
        let task = spawn(async move {
            let outcome = run_search(book_search.as_ref(), &request).await;
            session.write().resolve(request.id, outcome);
        });

        in_flight.set(Some(task));
    }
}

/// Provider component to make the search context available to the page
#[component]
pub fn BookSearchContextProvider(children: Element) -> Element {
    let app_context = use_app_context();

    use_context_provider(move || {
        BookSearchContext::new(app_context.book_search.clone(), app_context.config.links())
    });

    rsx! {
        {children}
    }
}
