use crate::search::{ResultsView, LOADING_MESSAGE};
use crate::ui::search_context::BookSearchContext;
use dioxus::prelude::*;

/// Loading indicator and error line above the results
#[component]
pub fn SearchStatus() -> Element {
    let search_ctx = use_context::<BookSearchContext>();

    let (loading, error) = {
        let session = search_ctx.session();
        let session = session.read();
        let view = ResultsView::from_state(session.state());
        (view.loading, view.error.map(str::to_string))
    };

    rsx! {
        if loading {
            p { class: "text-gray-600", "{LOADING_MESSAGE}" }
        }
        if let Some(error) = error {
            p { class: "text-red-600", "{error}" }
        }
    }
}
