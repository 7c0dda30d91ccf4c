//! Connection bootstrap and server information.

use std::fmt;
use std::time::Duration;

use jenkinsctl_config::JenkinsConfig;
use jenkinsctl_requests::ApiClient;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::prelude::*;

/// Deadline applied to every request. The underlying transport has no
/// default timeout of its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Response header carrying the server version.
const VERSION_HEADER: &str = "X-Jenkins";

/// Authenticated handle to one Jenkins server.
///
/// A value of this type is proof that the liveness call succeeded: it
/// can only be obtained through [`Jenkins::init`]. The handle lives for
/// one CLI invocation and is passed by reference into command handlers.
pub struct Jenkins {
    api: ApiClient,
    /// Resolved server URL.
    pub server: String,
    /// Authenticated user.
    pub user: String,
    /// Server version reported by the liveness call.
    pub version: String,
}

/// Connection summary for console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    /// Authenticated user.
    pub user: String,
    /// Resolved server URL.
    pub server: String,
    /// Server version.
    pub version: String,
}

impl Jenkins {
    /// Connects to the server described by `config` and verifies that
    /// it is reachable with the configured credentials.
    pub async fn init(config: &JenkinsConfig) -> Result<Self> {
        Self::init_with_timeout(config, DEFAULT_TIMEOUT).await
    }

    /// Same as [`Jenkins::init`] with an explicit request deadline.
    pub async fn init_with_timeout(config: &JenkinsConfig, timeout: Duration) -> Result<Self> {
        let api = ApiClient::with_basic_auth(&config.server, &config.user, &config.token, timeout)?;
        let mut jenkins = Self {
            api,
            server: config.server.clone(),
            user: config.user.clone(),
            version: String::new(),
        };

        let response = jenkins.get("api/json", "server").await?;
        jenkins.version = response
            .headers()
            .get(VERSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        info!("connected to {} as {}", jenkins.server, jenkins.user);
        Ok(jenkins)
    }

    /// Connection information captured by the liveness call.
    pub fn server_info(&self) -> ServerInfo {
        ServerInfo {
            user: self.user.clone(),
            server: self.server.clone(),
            version: self.version.clone(),
        }
    }

    pub(crate) async fn get(&self, endpoint: &str, what: &str) -> Result<Response> {
        debug!("GET {endpoint}");
        let response = self
            .api
            .get(endpoint)
            .await
            .map_err(|err| self.transport_error(err))?;
        self.check_status(response, what)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, what: &str) -> Result<T> {
        let response = self.get(endpoint, what).await?;
        let text = response
            .text()
            .await
            .map_err(jenkinsctl_requests::error::Error::from)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub(crate) async fn get_text(&self, endpoint: &str, what: &str) -> Result<String> {
        let response = self.get(endpoint, what).await?;
        Ok(response
            .text()
            .await
            .map_err(jenkinsctl_requests::error::Error::from)?)
    }

    pub(crate) async fn post(
        &self,
        endpoint: &str,
        content_type: &'static str,
        body: String,
        what: &str,
    ) -> Result<Response> {
        debug!("POST {endpoint}");
        let response = self
            .api
            .post(endpoint, content_type, body)
            .await
            .map_err(|err| self.transport_error(err))?;
        self.check_status(response, what)
    }

    pub(crate) async fn post_form(
        &self,
        endpoint: &str,
        form: &[(&str, &str)],
        what: &str,
    ) -> Result<Response> {
        debug!("POST {endpoint}");
        let response = self
            .api
            .post_form(endpoint, form)
            .await
            .map_err(|err| self.transport_error(err))?;
        self.check_status(response, what)
    }

    pub(crate) async fn post_empty(&self, endpoint: &str, what: &str) -> Result<Response> {
        debug!("POST {endpoint}");
        let response = self
            .api
            .post_empty(endpoint)
            .await
            .map_err(|err| self.transport_error(err))?;
        self.check_status(response, what)
    }

    /// Connect-level failures surface the server URL; everything else
    /// propagates as the transport error it was.
    fn transport_error(&self, err: jenkinsctl_requests::error::Error) -> Error {
        match err {
            jenkinsctl_requests::error::Error::Request(err)
                if err.is_connect() || err.is_timeout() =>
            {
                Error::Unreachable {
                    server: self.server.clone(),
                    source: err,
                }
            }
            other => Error::Transport(other),
        }
    }

    fn check_status(&self, response: Response, what: &str) -> Result<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(Error::Unauthorized),
            StatusCode::NOT_FOUND => Err(Error::NotFound(what.to_string())),
            status => Err(Error::RequestFailed {
                status,
                url: response.url().to_string(),
            }),
        }
    }
}

impl fmt::Display for ServerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Connected with: {}", self.user)?;
        writeln!(f, "Server: {}", self.server)?;
        write!(f, "Version: {}", self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{serve, test_config};
    use axum::Json;
    use axum::http::StatusCode;
    use axum::routing::get;

    fn liveness_router() -> axum::Router {
        axum::Router::new().route(
            "/api/json",
            get(|| async {
                (
                    [(VERSION_HEADER, "2.452.1")],
                    Json(serde_json::json!({"mode": "NORMAL", "views": []})),
                )
            }),
        )
    }

    #[tokio::test]
    async fn init_captures_server_info() {
        let server = serve(liveness_router()).await;
        let config = test_config(&server);

        let jenkins = Jenkins::init(&config).await.unwrap();
        let info = jenkins.server_info();
        assert_eq!(info.user, "admin");
        assert_eq!(info.server, server);
        assert_eq!(info.version, "2.452.1");
    }

    #[tokio::test]
    async fn init_without_version_header_reports_unknown() {
        let app = axum::Router::new().route(
            "/api/json",
            get(|| async { Json(serde_json::json!({"views": []})) }),
        );
        let server = serve(app).await;

        let jenkins = Jenkins::init(&test_config(&server)).await.unwrap();
        assert_eq!(jenkins.version, "unknown");
    }

    #[tokio::test]
    async fn init_maps_rejected_credentials_to_unauthorized() {
        let app = axum::Router::new()
            .route("/api/json", get(|| async { StatusCode::UNAUTHORIZED }));
        let server = serve(app).await;

        match Jenkins::init(&test_config(&server)).await {
            Err(Error::Unauthorized) => {}
            other => panic!("expected Unauthorized, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn init_maps_forbidden_to_unauthorized() {
        let app =
            axum::Router::new().route("/api/json", get(|| async { StatusCode::FORBIDDEN }));
        let server = serve(app).await;

        match Jenkins::init(&test_config(&server)).await {
            Err(Error::Unauthorized) => {}
            other => panic!("expected Unauthorized, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn init_maps_dead_port_to_unreachable() {
        // Bind and immediately drop a listener so the port is free.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        match Jenkins::init(&test_config(&server)).await {
            Err(Error::Unreachable { server: reported, .. }) => assert_eq!(reported, server),
            other => panic!("expected Unreachable, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn unexpected_status_is_request_failed() {
        let app = axum::Router::new()
            .route("/api/json", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let server = serve(app).await;

        match Jenkins::init(&test_config(&server)).await {
            Err(Error::RequestFailed { status, .. }) => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected RequestFailed, got {:?}", other.err()),
        }
    }

    #[test]
    fn server_info_display() {
        let info = ServerInfo {
            user: "admin".to_string(),
            server: "http://jenkins.example.com".to_string(),
            version: "2.452.1".to_string(),
        };
        let rendered = info.to_string();
        assert!(rendered.contains("Connected with: admin"));
        assert!(rendered.contains("Server: http://jenkins.example.com"));
        assert!(rendered.contains("Version: 2.452.1"));
    }
}
