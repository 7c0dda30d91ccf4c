//! Shared helpers for the in-process mock server tests.

use std::path::PathBuf;

use jenkinsctl_config::JenkinsConfig;

/// Serves `app` on an ephemeral local port and returns its base URL.
pub(crate) async fn serve(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Configuration pointing at a mock server.
pub(crate) fn test_config(server: &str) -> JenkinsConfig {
    JenkinsConfig {
        server: server.to_string(),
        user: "admin".to_string(),
        token: "token".to_string(),
        source: PathBuf::from("test-config.json"),
    }
}
