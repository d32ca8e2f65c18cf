//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches Leptos SSR rendering and the Leptos asset mount under one Axum
//! router and puts the host-rewrite middleware in front of it so
//! `app.<domain>` requests are routed to `/app`. The health probe sits
//! outside the rewrite and answers on every host.

pub mod host_rewrite;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

/// Routes that do not render through Leptos.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR frontend plus static assets, behind the host rewrite.
pub fn app(leptos_options: LeptosOptions, config: Arc<SiteConfig>) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS bundles; anything else under the site root (favicon,
    // robots.txt) falls through to the directory service.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let site = leptos_router
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&site_root_path))
        .layer(CompressionLayer::new());

    base_routes().merge(with_host_rewrite(site, config)).layer(TraceLayer::new_for_http())
}

/// Run the host rewrite, then trailing-slash trimming, before `router`
/// matches the request.
///
/// `Router::layer` middleware runs after routing, so the wrapped router is
/// mounted as the fallback of an otherwise empty router instead. Trimming
/// lets `/app/` reach the `/app` page route.
pub fn with_host_rewrite(router: Router, config: Arc<SiteConfig>) -> Router {
    let rewrite = axum::middleware::from_fn_with_state(config, host_rewrite::rewrite_request);
    let trimmed = NormalizePathLayer::trim_trailing_slash().layer(router);
    Router::new().fallback_service(rewrite.layer(trimmed))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
