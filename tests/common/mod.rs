#![allow(dead_code)]

use reqwest::Client;
use server::config::Config;

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}

/// Serve the app on an ephemeral port and return its base URL.
pub async fn spawn_server() -> String {
    spawn_server_with(Config::default()).await
}

pub async fn spawn_server_with(config: Config) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, server::app(config))
            .await
            .expect("Test server error");
    });

    format!("http://{addr}")
}

/// Build a URL for an API endpoint.
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}
