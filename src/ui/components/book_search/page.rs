use super::{form::SearchForm, grid::BookGrid, status::SearchStatus};
use dioxus::prelude::*;

/// Main book search page that orchestrates the search UI components
#[component]
pub fn BookSearchPage() -> Element {
    rsx! {
        div { class: "page-gradient min-h-screen flex justify-center items-center",
            div { class: "container bg-white bg-opacity-80 p-6 rounded-3xl shadow-xl max-w-2xl w-full text-center",
                header { class: "mb-6",
                    h1 { class: "text-4xl text-pink-600 font-bold", "📚 Book Finder" }
                    p { class: "text-xl text-gray-600 mt-4",
                        "Search for your favorite books and discover new ones!"
                    }
                }

                SearchForm {}
                SearchStatus {}
                BookGrid {}
            }
        }
    }
}
