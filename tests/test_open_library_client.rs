mod support;

use axum::http::StatusCode;
use book_finder::open_library::{BookSearch, OpenLibraryClient, OpenLibraryError};
use book_finder::search::{run_search, ResultsView, SearchSession, ERROR_MESSAGE, MAX_RESULTS};
use book_finder::config::Config;

use crate::support::{search_body, tracing_init, StubSearchServer};

fn client_for(server: &StubSearchServer) -> OpenLibraryClient {
    OpenLibraryClient::new(server.base_url.clone()).unwrap()
}

#[tokio::test]
async fn test_search_returns_docs_in_order() {
    tracing_init();

    let server = StubSearchServer::start(
        StatusCode::OK,
        search_body(&["Dune", "Dune Messiah", "Children of Dune"]),
    )
    .await;

    let docs = client_for(&server).search_by_title("dune").await.unwrap();

    let titles: Vec<_> = docs.iter().filter_map(|d| d.title.as_deref()).collect();
    assert_eq!(titles, vec!["Dune", "Dune Messiah", "Children of Dune"]);
    assert_eq!(server.queries(), vec!["title=dune".to_string()]);
}

#[tokio::test]
async fn test_query_is_percent_encoded() {
    tracing_init();

    let server = StubSearchServer::start(StatusCode::OK, search_body(&[])).await;

    client_for(&server)
        .search_by_title("the lord & the rings")
        .await
        .unwrap();

    assert_eq!(
        server.queries(),
        vec!["title=the%20lord%20%26%20the%20rings".to_string()]
    );
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    tracing_init();

    let server = StubSearchServer::start(StatusCode::INTERNAL_SERVER_ERROR, "oops").await;

    let result = client_for(&server).search_by_title("dune").await;
    match result {
        Err(OpenLibraryError::Status(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    tracing_init();

    let server = StubSearchServer::start(StatusCode::OK, "<html>not json</html>").await;
    let result = client_for(&server).search_by_title("dune").await;
    assert!(matches!(result, Err(OpenLibraryError::Deserialize(_))));

    let server = StubSearchServer::start(StatusCode::OK, r#"{"numFound": 0}"#).await;
    let result = client_for(&server).search_by_title("dune").await;
    assert!(matches!(result, Err(OpenLibraryError::Deserialize(_))));
}

#[tokio::test]
async fn test_connection_failure_is_an_error() {
    tracing_init();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OpenLibraryClient::new(format!("http://{}", addr)).unwrap();
    let result = client.search_by_title("dune").await;
    assert!(matches!(result, Err(OpenLibraryError::Request(_))));
}

#[tokio::test]
async fn test_full_search_caps_results_and_links_to_configured_site() {
    tracing_init();

    let titles: Vec<String> = (1..=30).map(|i| format!("Volume {}", i)).collect();
    let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    let server = StubSearchServer::start(StatusCode::OK, search_body(&title_refs)).await;

    let config = Config {
        api_base_url: server.base_url.clone(),
        ..Config::default()
    };
    let client = client_for(&server);
    let mut session = SearchSession::new(config.links());

    session.set_query("volume".to_string());
    let request = session.begin_search().unwrap();
    let outcome = run_search(&client, &request).await;
    assert!(session.resolve(request.id, outcome));

    let view = ResultsView::from_state(session.state());
    assert!(!view.loading);
    assert_eq!(view.cards.len(), MAX_RESULTS);
    assert_eq!(view.cards[0].title, "Volume 1");
    assert_eq!(view.cards[11].title, "Volume 12");
    assert_eq!(
        view.cards[0].detail_url,
        format!("{}/works/OL1W", server.base_url)
    );
    assert_eq!(
        view.cards[0].cover_url,
        "https://covers.openlibrary.org/b/id/12345-M.jpg"
    );
    assert_eq!(server.queries().len(), 1);
}

#[tokio::test]
async fn test_full_search_failure_shows_fixed_message() {
    tracing_init();

    let server = StubSearchServer::start(StatusCode::SERVICE_UNAVAILABLE, "").await;
    let client = client_for(&server);
    let mut session = SearchSession::default();

    session.set_query("dune".to_string());
    let request = session.begin_search().unwrap();
    assert!(session.state().is_loading());

    let outcome = run_search(&client, &request).await;
    session.resolve(request.id, outcome);

    let view = ResultsView::from_state(session.state());
    assert!(!view.loading);
    assert_eq!(view.error, Some(ERROR_MESSAGE));
    assert!(view.cards.is_empty());
    assert!(!view.show_empty_message);
}

#[tokio::test]
async fn test_whitespace_query_is_sent_as_typed() {
    tracing_init();

    let server = StubSearchServer::start(StatusCode::OK, search_body(&[])).await;
    let client = client_for(&server);
    let mut session = SearchSession::default();

    session.set_query("  ".to_string());
    let request = session.begin_search().unwrap();
    let outcome = run_search(&client, &request).await;
    session.resolve(request.id, outcome);

    assert_eq!(server.queries(), vec!["title=%20%20".to_string()]);
    assert!(ResultsView::from_state(session.state()).show_empty_message);
}

#[tokio::test]
async fn test_one_malformed_doc_keeps_the_others() {
    tracing_init();

    let body = r#"{"numFound": 3, "docs": [
        {"key": "/works/OL1W", "title": "Dune", "author_name": ["Frank Herbert"], "first_publish_year": 1965},
        {"key": "/works/OL2W", "title": 42, "author_name": [null], "first_publish_year": 1965.0, "cover_i": [1]},
        {"key": "/works/OL3W", "title": "Emma"}
    ]}"#;
    let server = StubSearchServer::start(StatusCode::OK, body).await;
    let client = client_for(&server);
    let mut session = SearchSession::default();

    session.set_query("dune".to_string());
    let request = session.begin_search().unwrap();
    let outcome = run_search(&client, &request).await;
    session.resolve(request.id, outcome);

    let view = ResultsView::from_state(session.state());
    assert_eq!(view.error, None);

    let titles: Vec<&str> = view.cards.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "42", "Emma"]);
    assert_eq!(view.cards[1].authors, "Unknown Author");
    assert_eq!(view.cards[1].year, "1965");
    assert_eq!(
        view.cards[1].cover_url,
        "https://via.placeholder.com/150?text=No+Cover"
    );
}
