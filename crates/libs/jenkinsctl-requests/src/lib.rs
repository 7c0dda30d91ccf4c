//! HTTP client library for making API requests.
//!
//! A thin, checked wrapper around reqwest for talking to one remote
//! server: a single client, basic credentials applied to every request,
//! and a fixed request deadline.
//!
//! # Examples
//!
//! ```rust,no_run
//! use jenkinsctl_requests::ApiClient;
//! use std::time::Duration;
//!
//! # async fn example() -> jenkinsctl_requests::prelude::Result<()> {
//! let client = ApiClient::with_basic_auth(
//!     "https://jenkins.example.com",
//!     "admin",
//!     "token",
//!     Duration::from_secs(30),
//! )?;
//! let response = client.get("api/json").await?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::{Body, RequestBuilder, Response};
use serde::Serialize;
use url::Url;

pub mod error;
pub mod prelude;

use prelude::*;

/// HTTP client for making API requests against one server.
pub struct ApiClient {
    url: Url,
    user: Option<String>,
    token: Option<String>,
    client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client bound to the given base URL.
    ///
    /// The URL is validated eagerly and every request sent through the
    /// client carries the given deadline.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(url)?;
        let client = reqwest::ClientBuilder::new().timeout(timeout).build()?;
        Ok(Self {
            url,
            user: None,
            token: None,
            client,
        })
    }

    /// Creates a new client authenticating every request with basic
    /// credentials.
    pub fn with_basic_auth(
        url: &str,
        user: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let mut client = Self::new(url, timeout)?;
        client.user = Some(user.into());
        client.token = Some(token.into());
        Ok(client)
    }

    /// Constructs the full URL for an endpoint.
    fn path(&self, endpoint: &str) -> Result<Url> {
        let base = self.url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{endpoint}"))?)
    }

    fn authenticated(&self, builder: RequestBuilder) -> RequestBuilder {
        match (&self.user, &self.token) {
            (Some(user), Some(token)) => builder.basic_auth(user, Some(token)),
            _ => builder,
        }
    }

    /// Makes a GET request to the specified endpoint.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = self.path(endpoint)?;
        Ok(self.authenticated(self.client.get(url)).send().await?)
    }

    /// Makes a POST request with the given content type and body.
    pub async fn post<T: Into<Body>>(
        &self,
        endpoint: &str,
        content_type: &'static str,
        body: T,
    ) -> Result<Response> {
        let url = self.path(endpoint)?;
        Ok(self
            .authenticated(self.client.post(url))
            .header("content-type", content_type)
            .body(body)
            .send()
            .await?)
    }

    /// Makes a POST request with a form-encoded body.
    pub async fn post_form<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        form: &T,
    ) -> Result<Response> {
        let url = self.path(endpoint)?;
        Ok(self
            .authenticated(self.client.post(url))
            .form(form)
            .send()
            .await?)
    }

    /// Makes a POST request without a body.
    pub async fn post_empty(&self, endpoint: &str) -> Result<Response> {
        let url = self.path(endpoint)?;
        Ok(self.authenticated(self.client.post(url)).send().await?)
    }
}
