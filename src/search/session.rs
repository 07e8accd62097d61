use super::state::{SearchState, ERROR_MESSAGE};
use crate::open_library::{BookRecord, BookSearch, LinkBases, OpenLibraryError, SearchDoc};
use tracing::{debug, info, warn};

/// Maximum number of cards shown for one search
pub const MAX_RESULTS: usize = 12;

pub type SearchOutcome = Result<Vec<SearchDoc>, OpenLibraryError>;

/// A search that has been started and is waiting for its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

/// Query text plus search state for one page.
///
/// Every started search gets a new id; only the outcome of the most recent id
/// is applied, so a slow response can never overwrite a newer one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    query: String,
    state: SearchState,
    latest_request: u64,
    links: LinkBases,
}

impl SearchSession {
    pub fn new(links: LinkBases) -> Self {
        Self {
            links,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// Stored verbatim, no trimming.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Start a search for the current query, or `None` when the query is empty.
    /// Whitespace is a real query and is sent as typed.
    pub fn begin_search(&mut self) -> Option<SearchRequest> {
        if self.query.is_empty() {
            debug!("Ignoring search with empty query");
            return None;
        }

        self.latest_request += 1;
        self.state.start_loading();

        Some(SearchRequest {
            id: self.latest_request,
            query: self.query.clone(),
        })
    }

    /// Apply the outcome of request `id`. Returns `false` if a newer search has
    /// started since, in which case nothing changes.
    pub fn resolve(&mut self, id: u64, outcome: SearchOutcome) -> bool {
        if id != self.latest_request {
            debug!(
                "Dropping stale search #{} (latest is #{})",
                id, self.latest_request
            );
            return false;
        }

        self.state = match outcome {
            Ok(docs) => {
                let records: Vec<BookRecord> = docs
                    .into_iter()
                    .take(MAX_RESULTS)
                    .map(|doc| BookRecord::from_doc(doc, &self.links))
                    .collect();
                SearchState::Success(records)
            }
            Err(e) => {
                warn!("Search #{} failed: {}", id, e);
                SearchState::Failure(ERROR_MESSAGE.to_string())
            }
        };

        true
    }
}

/// Perform the network half of a search.
pub async fn run_search<S>(search: &S, request: &SearchRequest) -> SearchOutcome
where
    S: BookSearch + ?Sized,
{
    info!("🔍 Searching books #{}: '{}'", request.id, request.query);

    let outcome = search.search_by_title(&request.query).await;

    if let Ok(docs) = &outcome {
        info!("✓ Search #{} returned {} doc(s)", request.id, docs.len());
    }

    outcome
}
