use book_finder::config::Config;
use book_finder::open_library::OpenLibraryClient;
use book_finder::ui::{make_config, App};
use book_finder::AppContext;
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match OpenLibraryClient::new(config.api_base_url.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting Book Finder");

    let app_context = AppContext {
        config,
        book_search: Arc::new(client),
    };

    dioxus::LaunchBuilder::new()
        .with_cfg(make_config())
        .with_context(app_context)
        .launch(App);
}
