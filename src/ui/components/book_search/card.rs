use crate::open_library::BookRecord;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct BookCardProps {
    pub book: BookRecord,
}

/// One result; the whole card links to the Open Library page in a new window.
#[component]
pub fn BookCard(props: BookCardProps) -> Element {
    let book = &props.book;

    rsx! {
        a {
            class: "book-card bg-white p-4 rounded-xl shadow-md",
            href: "{book.detail_url}",
            target: "_blank",
            rel: "noopener noreferrer",
            img {
                class: "w-full h-48 object-cover rounded-lg mb-4",
                src: "{book.cover_url}",
                alt: "{book.title}",
            }
            h3 { class: "text-lg font-semibold text-gray-800", "{book.title}" }
            p { class: "text-gray-600",
                strong { "Author:" }
                " {book.authors}"
            }
            p { class: "text-gray-500",
                strong { "Year:" }
                " {book.year}"
            }
        }
    }
}
