//! Placeholder for the `app.` subdomain.
//!
//! The server rewrites `app.<domain>/<path>` to `/app/<path>`, which lands
//! here until the product itself ships.

#[cfg(test)]
#[path = "app_home_test.rs"]
mod app_home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::site::{SiteSection, current_section};

/// Path prefix the server adds to `app.` subdomain requests.
pub const APP_PATH_PREFIX: &str = "/app";

/// The path the visitor asked for. Only the server render of an `app.`
/// request sees the rewritten `/app` prefix; the browser URL never has it.
pub(crate) fn visible_path(pathname: &str, server_rewritten: bool) -> String {
    if !server_rewritten {
        return pathname.to_owned();
    }
    match pathname.strip_prefix(APP_PATH_PREFIX) {
        Some("") => "/".to_owned(),
        Some(rest) if rest.starts_with('/') => rest.to_owned(),
        _ => pathname.to_owned(),
    }
}

#[component]
pub fn AppHomePage() -> impl IntoView {
    let server_rewritten = cfg!(not(feature = "hydrate")) && current_section() == SiteSection::App;
    let pathname = use_location().pathname;
    let requested = move || visible_path(&pathname.get(), server_rewritten);

    view! {
        <main class="app-home">
            <h1 class="app-home__title">"ReaVSuite"</h1>
            <p class="app-home__subtitle">"The app is not open yet."</p>
            <p class="app-home__path">
                "Requested: "
                <code>{requested}</code>
            </p>
        </main>
    }
}
