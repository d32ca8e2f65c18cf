use super::*;

use axum::body::{Body, to_bytes};
use axum::http::header::HOST;
use axum::http::{Request, Uri};
use tower::ServiceExt;

const BODY_LIMIT: usize = 1024 * 1024;

async fn echo_uri(uri: Uri) -> String {
    uri.to_string()
}

fn echo_app() -> Router {
    with_host_rewrite(Router::new().fallback(echo_uri), Arc::new(SiteConfig::default()))
}

fn site_app() -> Router {
    let options = LeptosOptions::builder().output_name("reavsuite").site_root("target/site").build();
    app(options, Arc::new(SiteConfig::default()))
}

async fn fetch(router: Router, host: &str, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).header(HOST, host).body(Body::empty()).unwrap();
    let res = router.oneshot(req).await.unwrap();
    let status = res.status();
    let body = to_bytes(res.into_body(), BODY_LIMIT).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

// =============================================================================
// rewrite in front of routing
// =============================================================================

#[tokio::test]
async fn app_subdomain_root_reaches_the_app_path() {
    let (status, body) = fetch(echo_app(), "app.reavsuite.com", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "/app");
}

#[tokio::test]
async fn app_subdomain_keeps_query_string() {
    let (_, body) = fetch(echo_app(), "app.reavsuite.com", "/dashboard?a=1").await;
    assert_eq!(body, "/app/dashboard?a=1");
}

#[tokio::test]
async fn main_domain_is_untouched() {
    let (_, body) = fetch(echo_app(), "www.reavsuite.com", "/x").await;
    assert_eq!(body, "/x");
}

#[tokio::test]
async fn auth_api_is_untouched_on_app_subdomain() {
    let (_, body) = fetch(echo_app(), "app.reavsuite.com", "/api/auth/callback?code=1").await;
    assert_eq!(body, "/api/auth/callback?code=1");
}

#[tokio::test]
async fn static_asset_on_app_subdomain_is_untouched() {
    let (_, body) = fetch(echo_app(), "app.reavsuite.com", "/favicon.ico").await;
    assert_eq!(body, "/favicon.ico");
}

// =============================================================================
// full site router
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok_on_every_host() {
    for host in ["reavsuite.com", "app.reavsuite.com", "app.localhost:3000"] {
        let (status, body) = fetch(site_app(), host, "/healthz").await;
        assert_eq!(status, StatusCode::OK, "{host}");
        assert!(body.is_empty(), "{host}: {body}");
    }
}

#[tokio::test]
async fn app_subdomain_root_renders_app_page() {
    let (status, body) = fetch(site_app(), "app.reavsuite.com", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"class="app-home""#), "{body}");
    assert!(body.contains(r#"data-site-section="app""#), "{body}");
}

#[tokio::test]
async fn app_subdomain_deep_link_renders_app_page() {
    let (status, body) = fetch(site_app(), "app.reavsuite.com", "/dashboard?a=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"class="app-home""#), "{body}");
    assert!(body.contains(r#"data-site-section="app""#), "{body}");
}

#[tokio::test]
async fn local_dev_app_host_renders_app_page() {
    let (status, body) = fetch(site_app(), "app.localhost:3000", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"class="app-home""#), "{body}");
}

#[tokio::test]
async fn main_domain_app_slash_renders_app_page_as_landing_section() {
    let (status, body) = fetch(site_app(), "reavsuite.com", "/app/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"class="app-home""#), "{body}");
    assert!(body.contains(r#"data-site-section="landing""#), "{body}");
}

#[tokio::test]
async fn main_domain_root_is_the_landing_section() {
    let (status, body) = fetch(site_app(), "reavsuite.com", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-site-section="landing""#), "{body}");
    assert!(!body.contains(r#"class="app-home""#), "{body}");
}
