use super::card::BookCard;
use crate::open_library::BookRecord;
use crate::search::{ResultsView, EMPTY_MESSAGE};
use crate::ui::search_context::BookSearchContext;
use dioxus::prelude::*;

/// Result cards, or the empty-state message when there is nothing to show
#[component]
pub fn BookGrid() -> Element {
    let search_ctx = use_context::<BookSearchContext>();

    let (show_empty_message, cards) = {
        let session = search_ctx.session();
        let session = session.read();
        let view = ResultsView::from_state(session.state());
        let cards: Vec<(String, BookRecord)> = view
            .cards
            .iter()
            .enumerate()
            .map(|(index, book)| (card_key(&book.key, index), book.clone()))
            .collect();
        (view.show_empty_message, cards)
    };

    rsx! {
        div { class: "results mt-4 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
            if show_empty_message {
                p { class: "col-span-full", "{EMPTY_MESSAGE}" }
            }
            for (key, book) in cards {
                BookCard { key: "{key}", book: book }
            }
        }
    }
}

// Open Library always sends a key, but a missing one must not collapse cards.
fn card_key(key: &str, index: usize) -> String {
    if key.is_empty() {
        format!("doc-{}", index)
    } else {
        key.to_string()
    }
}
