use crate::ui::search_context::BookSearchContext;
use dioxus::prelude::*;

/// Title input and search button
#[component]
pub fn SearchForm() -> Element {
    let search_ctx = use_context::<BookSearchContext>();
    let query = search_ctx.session().read().query().to_string();

    rsx! {
        div { class: "search-bar mb-6 flex justify-center gap-4",
            input {
                r#type: "text",
                class: "p-4 text-xl border-2 border-pink-600 rounded-full shadow-md w-3/4 focus:outline-none focus:ring-2 focus:ring-pink-400",
                placeholder: "Enter a book title...",
                value: "{query}",
                oninput: {
                    let search_ctx = search_ctx.clone();
                    move |event: FormEvent| {
                        search_ctx.set_query(event.value());
                    }
                },
                onkeydown: {
                    let search_ctx = search_ctx.clone();
                    move |event: KeyboardEvent| {
                        if submits_search(&event.key()) {
                            search_ctx.search();
                        }
                    }
                },
            }
            button {
                class: "search-button px-8 py-4 text-xl text-white rounded-full shadow-md",
                onclick: {
                    let search_ctx = search_ctx.clone();
                    move |_| search_ctx.search()
                },
                "🔍 Search"
            }
        }
    }
}

fn submits_search(key: &Key) -> bool {
    *key == Key::Enter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_enter_submits() {
        assert!(submits_search(&Key::Enter));
        assert!(!submits_search(&Key::Character("d".to_string())));
        assert!(!submits_search(&Key::Tab));
    }
}
