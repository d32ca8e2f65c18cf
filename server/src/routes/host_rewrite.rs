//! Subdomain routing: serve `app.<domain>` from the `/app` path prefix.
//!
//! DESIGN
//! ======
//! Runs as middleware in front of the router so the rewritten URI is what
//! route matching sees. The rewrite is internal; clients keep the original
//! URL, so rewritten requests carry a `SiteSection::App` extension that the
//! render copies into the page for hydration. Static assets and the Leptos
//! asset mount are not considered at all, and auth API calls are always
//! passed through untouched.

#[cfg(test)]
#[path = "host_rewrite_test.rs"]
mod host_rewrite_test;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::HOST;
use axum::http::uri::{PathAndQuery, Uri};
use axum::middleware::Next;
use axum::response::Response;
use client::util::site::SiteSection;

use crate::config::SiteConfig;

/// Leptos serves WASM/JS/CSS bundles from here.
pub const FRAMEWORK_ASSET_PREFIX: &str = "/pkg";

const APP_PREFIX: &str = "/app";

/// Outcome of [`route`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    PassThrough,
    /// Replace the path and query with this value.
    Rewrite(String),
}

/// Whether the middleware ignores `path` entirely: files with an extension
/// and framework asset paths. Anything starting with `/api` or `/trpc` is
/// always considered.
#[must_use]
pub fn is_excluded(path: &str) -> bool {
    if path.starts_with("/api") || path.starts_with("/trpc") {
        return false;
    }
    if path == FRAMEWORK_ASSET_PREFIX || path.starts_with("/pkg/") {
        return true;
    }
    has_file_extension(path.trim_start_matches('/'))
}

// `name.ext` where ext is word characters and name is non-empty.
fn has_file_extension(rest: &str) -> bool {
    match rest.rfind('.') {
        Some(dot) if dot > 0 => {
            let ext = &rest[dot + 1..];
            !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// `path` plus `?query`, omitting the separator when the query is empty.
#[must_use]
pub fn path_and_query(path: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{path}?{q}"),
        _ => path.to_owned(),
    }
}

/// Decide whether a request for `host` + `path` + `query` is rewritten.
#[must_use]
pub fn route(host: &str, path: &str, query: Option<&str>, config: &SiteConfig) -> RouteDecision {
    if path.starts_with(&config.auth_api_prefix) {
        return RouteDecision::PassThrough;
    }
    if !config.is_app_host(host) {
        return RouteDecision::PassThrough;
    }
    let target = path_and_query(path, query);
    if target == "/" {
        RouteDecision::Rewrite(format!("{APP_PREFIX}/"))
    } else {
        RouteDecision::Rewrite(format!("{APP_PREFIX}{target}"))
    }
}

fn request_host(req: &Request) -> Option<String> {
    if let Some(host) = req.headers().get(HOST).and_then(|v| v.to_str().ok()) {
        return Some(host.to_owned());
    }
    let uri = req.uri();
    let host = uri.host()?;
    Some(match uri.port_u16() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    })
}

fn with_path_and_query(uri: &Uri, target: &str) -> Result<Uri, axum::http::Error> {
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(target)?);
    Ok(Uri::from_parts(parts)?)
}

/// Axum middleware applying [`route`] to every considered request.
pub async fn rewrite_request(State(config): State<Arc<SiteConfig>>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    if is_excluded(&path) {
        return next.run(req).await;
    }
    let Some(host) = request_host(&req) else {
        return next.run(req).await;
    };

    if let RouteDecision::Rewrite(target) = route(&host, &path, req.uri().query(), &config) {
        match with_path_and_query(req.uri(), &target) {
            Ok(uri) => {
                tracing::debug!(%host, from = %req.uri(), to = %uri, "host rewrite");
                *req.uri_mut() = uri;
                req.extensions_mut().insert(SiteSection::App);
            }
            Err(e) => tracing::warn!(%host, %target, error = %e, "host rewrite produced an invalid uri"),
        }
    }

    next.run(req).await
}
