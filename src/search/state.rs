use crate::open_library::BookRecord;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const ERROR_MESSAGE: &str = "Error fetching books. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No results found. Try a different title!";

/// Where the page is in the search lifecycle. Exactly one variant is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    /// A request is in flight. Results of the last success stay on screen until it settles.
    Loading { previous: Vec<BookRecord> },
    Success(Vec<BookRecord>),
    Failure(String),
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SearchState::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// Records currently displayed
    pub fn results(&self) -> &[BookRecord] {
        match self {
            SearchState::Success(records) => records,
            SearchState::Loading { previous } => previous,
            SearchState::Idle | SearchState::Failure(_) => &[],
        }
    }

    /// Enter `Loading`, dropping any error but carrying over visible results.
    pub(crate) fn start_loading(&mut self) {
        let previous = match std::mem::take(self) {
            SearchState::Success(records) => records,
            SearchState::Loading { previous } => previous,
            SearchState::Idle | SearchState::Failure(_) => Vec::new(),
        };
        *self = SearchState::Loading { previous };
    }
}

/// What the results area shows for a given state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultsView<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub show_empty_message: bool,
    pub cards: &'a [BookRecord],
}

impl<'a> ResultsView<'a> {
    pub fn from_state(state: &'a SearchState) -> Self {
        let loading = state.is_loading();
        let error = state.error();
        let cards = state.results();

        Self {
            loading,
            error,
            show_empty_message: cards.is_empty() && !loading && error.is_none(),
            cards,
        }
    }
}
