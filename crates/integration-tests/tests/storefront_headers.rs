//! Integration tests for the middleware stack.

use takzy_integration_tests::TestContext;

#[tokio::test]
async fn test_security_headers_on_pages() {
    let mut ctx = TestContext::new();
    let resp = ctx.get("/").await;

    assert_eq!(resp.header("x-frame-options"), Some("DENY"));
    assert_eq!(resp.header("x-content-type-options"), Some("nosniff"));
    assert_eq!(resp.header("referrer-policy"), Some("no-referrer"));
    assert_eq!(resp.header("cache-control"), Some("no-store, max-age=0"));
    let csp = resp.header("content-security-policy").unwrap_or_default();
    assert!(csp.contains("img-src 'self' https://cdn.poehali.dev"));
    assert!(csp.contains("script-src 'none'"));
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let mut ctx = TestContext::new();
    let resp = ctx.get("/health").await;

    let id = resp.header("x-request-id").unwrap_or_default();
    assert_eq!(id.len(), 36, "expected a UUID, got {id:?}");
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let mut ctx = TestContext::new();
    let resp = ctx
        .get_with_headers("/health", &[("x-request-id", "upstream-42")])
        .await;

    assert_eq!(resp.header("x-request-id"), Some("upstream-42"));
}

#[tokio::test]
async fn test_oversized_request_id_is_replaced() {
    let mut ctx = TestContext::new();
    let long = "a".repeat(200);
    let resp = ctx
        .get_with_headers("/health", &[("x-request-id", long.as_str())])
        .await;

    let id = resp.header("x-request-id").unwrap_or_default();
    assert_ne!(id, long);
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_session_cookie_attributes() {
    let mut ctx = TestContext::new();
    let resp = ctx.get("/").await;

    let cookie = resp.header("set-cookie").unwrap_or_default();
    assert!(cookie.starts_with("takzy_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("Secure"));
}
