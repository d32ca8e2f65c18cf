//! Which part of the site a page load belongs to.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server rewrites `app.<domain>` requests to `/app/...` before routing,
//! but the browser keeps the URL the visitor typed. The server records the
//! decision on the request as a [`SiteSection`], the HTML shell writes it to
//! the `<html>` element, and the client reads it back before mounting its
//! routes, so the server render and hydration match the same route.
//!
//! Host normalization lives here so the server's rewrite rule and the client
//! agree on what counts as the app host.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// `<html>` attribute carrying the section chosen by the server.
pub const SECTION_ATTRIBUTE: &str = "data-site-section";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SiteSection {
    /// The marketing site on the bare (or `www.`) domain.
    #[default]
    Landing,
    /// Served from `app.<domain>`, rewritten under `/app` on the server.
    App,
}

impl SiteSection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::App => "app",
        }
    }

    /// Unknown values read as `Landing`.
    #[must_use]
    pub fn from_attribute(value: &str) -> Self {
        match value.trim() {
            "app" => Self::App,
            _ => Self::Landing,
        }
    }
}

/// Map `*.localhost:<dev_port>` onto `base_domain`, lowercase, and drop a
/// leading `www.` label.
#[must_use]
pub fn normalize_host(host: &str, base_domain: &str, dev_port: u16) -> String {
    let host = host.trim().to_ascii_lowercase();
    let host = host.replacen(&format!(".localhost:{dev_port}"), &format!(".{base_domain}"), 1);
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_owned(),
        None => host,
    }
}

/// Whether `host` addresses `app.<base_domain>` once normalized.
#[must_use]
pub fn is_app_host(host: &str, base_domain: &str, dev_port: u16) -> bool {
    normalize_host(host, base_domain, dev_port) == format!("app.{base_domain}")
}

/// Section of the current render.
///
/// Server: the marker the host rewrite left in the request extensions.
/// Browser: the attribute the server wrote into the shell.
pub fn current_section() -> SiteSection {
    #[cfg(feature = "hydrate")]
    {
        section_from_document()
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        leptos::prelude::use_context::<axum::http::request::Parts>()
            .and_then(|parts| parts.extensions.get::<SiteSection>().copied())
            .unwrap_or_default()
    }
    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    {
        SiteSection::default()
    }
}

#[cfg(feature = "hydrate")]
fn section_from_document() -> SiteSection {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(SECTION_ATTRIBUTE))
        .map_or_else(SiteSection::default, |value| SiteSection::from_attribute(&value))
}
