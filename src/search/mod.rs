pub mod session;
pub mod state;

pub use session::{run_search, SearchOutcome, SearchRequest, SearchSession, MAX_RESULTS};
pub use state::{ResultsView, SearchState, EMPTY_MESSAGE, ERROR_MESSAGE, LOADING_MESSAGE};
