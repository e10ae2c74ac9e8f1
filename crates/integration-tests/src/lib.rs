//! Integration tests for the TAKZY17 storefront.
//!
//! Requests go straight into the axum router with `tower::ServiceExt::oneshot`,
//! so no server or network is needed:
//!
//! ```bash
//! cargo test -p takzy-integration-tests
//! ```
//!
//! [`TestContext`] plays the part of a browser. It keeps the session cookie
//! between requests, so a sequence of calls behaves like one visitor.

use std::path::PathBuf;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, HeaderValue, Method, Request, StatusCode, header},
};
use takzy_core::Catalog;
use takzy_storefront::{app, config::StorefrontConfig, state::AppState};
use tokio::task::JoinSet;
use tower::ServiceExt;

/// A single visitor talking to an in-process storefront.
pub struct TestContext {
    app: Router,
    cookie: Option<HeaderValue>,
}

/// Response with the body already read into a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Header value as a string, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Redirect target of a 3xx response.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header(header::LOCATION.as_str())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Storefront with the sample catalog and default configuration.
    #[must_use]
    pub fn new() -> Self {
        let config = StorefrontConfig {
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../storefront/static"),
            ..StorefrontConfig::default()
        };
        Self {
            app: app(AppState::new(config, Catalog::sample())),
            cookie: None,
        }
    }

    /// Another visitor on the same server, with no session yet.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    /// Whether the server has issued a session cookie to this visitor.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, Body::empty(), None).await
    }

    /// Send a GET request with extra headers.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn get_with_headers(&mut self, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
        self.send(Method::GET, uri, Body::empty(), Some(headers)).await
    }

    /// Send a url-encoded form POST.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        let headers = [(
            header::CONTENT_TYPE.as_str(),
            "application/x-www-form-urlencoded",
        )];
        self.send(Method::POST, uri, Body::from(form.to_string()), Some(&headers))
            .await
    }

    /// Post `/cart/add` for `product_id`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn add_to_cart(&mut self, product_id: i32) -> TestResponse {
        self.post_form("/cart/add", &format!("product_id={product_id}"))
            .await
    }

    /// Post `/cart/remove` for `product_id`.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn remove_from_cart(&mut self, product_id: i32) -> TestResponse {
        self.post_form("/cart/remove", &format!("product_id={product_id}"))
            .await
    }

    /// Send the same form POST `times` times at once, all with this
    /// visitor's current cookie, and return the statuses.
    ///
    /// The cookie is not updated from these responses.
    ///
    /// # Panics
    ///
    /// Panics if a request cannot be built or a task panics.
    #[allow(clippy::expect_used)]
    pub async fn post_form_concurrently(
        &self,
        uri: &str,
        form: &str,
        times: usize,
    ) -> Vec<StatusCode> {
        let mut tasks = JoinSet::new();
        for _ in 0..times {
            let mut builder = Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            if let Some(cookie) = &self.cookie {
                builder = builder.header(header::COOKIE, cookie.clone());
            }
            let request = builder
                .body(Body::from(form.to_string()))
                .expect("valid request");

            let app = self.app.clone();
            tasks.spawn(async move {
                app.oneshot(request)
                    .await
                    .expect("router is infallible")
                    .status()
            });
        }

        let mut statuses = Vec::with_capacity(times);
        while let Some(status) = tasks.join_next().await {
            statuses.push(status.expect("request task"));
        }
        statuses
    }

    #[allow(clippy::expect_used)]
    async fn send(
        &mut self,
        method: Method,
        uri: &str,
        body: Body,
        headers: Option<&[(&str, &str)]>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie.clone());
        }
        for (name, value) in headers.unwrap_or_default() {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(body).expect("valid request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        // Keep only the `name=value` pair of the session cookie
        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            && let Some(pair) = set_cookie.split(';').next()
        {
            self.cookie = Some(HeaderValue::from_str(pair).expect("cookie is a valid header"));
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
