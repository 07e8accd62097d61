// Test support utilities for both unit and integration tests

use crate::open_library::{BookSearch, OpenLibraryError, SearchDoc, SearchResponse};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted result for one call to [`MockBookSearch`]
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Docs(Vec<SearchDoc>),
    /// Non-success HTTP status
    Status(u16),
    /// Body that is not a valid search response
    MalformedBody,
    /// A response that never arrives
    Pending,
}

/// Mock title search for testing
///
/// Returns queued outcomes in order and records every query it receives.
/// Once the queue is drained it answers with an empty result list.
#[derive(Default)]
pub struct MockBookSearch {
    outcomes: Mutex<VecDeque<MockOutcome>>,
    queries: Mutex<Vec<String>>,
}

impl MockBookSearch {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, outcome: MockOutcome) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BookSearch for MockBookSearch {
    async fn search_by_title(&self, title: &str) -> Result<Vec<SearchDoc>, OpenLibraryError> {
        self.queries.lock().unwrap().push(title.to_string());

        let outcome = self.outcomes.lock().unwrap().pop_front();
        match outcome {
            None => Ok(Vec::new()),
            Some(MockOutcome::Docs(docs)) => Ok(docs),
            Some(MockOutcome::Status(code)) => Err(OpenLibraryError::Status(
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            )),
            Some(MockOutcome::MalformedBody) => {
                let error = serde_json::from_str::<SearchResponse>("<html>").unwrap_err();
                Err(OpenLibraryError::Deserialize(error))
            }
            Some(MockOutcome::Pending) => std::future::pending().await,
        }
    }
}

/// Docs with the given titles, keyed `/works/OL{n}W` in order.
pub fn docs_with_titles(titles: &[&str]) -> Vec<SearchDoc> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| SearchDoc {
            key: Some(format!("/works/OL{}W", i + 1)),
            title: Some(title.to_string()),
            ..SearchDoc::default()
        })
        .collect()
}
