//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_switcher::ThemeSwitcher;
use crate::components::toaster::Toaster;
use crate::pages::{app_home::AppHomePage, coming_soon::ComingSoonPage};
use crate::state::query_cache::query_cache;
use crate::state::toast::ToastState;
use crate::util::site::{SiteSection, current_section};
use crate::util::theme::install_theme;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Carries the request's site section so hydration mounts the same routes.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let section = current_section();
    view! {
        <!DOCTYPE html>
        <html lang="en" data-site-section=section.as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared query cache, toast state, and theme context, and
/// mounts the theme switcher and toast surface once for every page.
///
/// `app.` subdomain loads match every path to the app page: the server sees
/// the rewritten `/app/...` URI while the browser keeps the original one.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cache = query_cache();
    #[cfg(feature = "hydrate")]
    crate::state::query_cache::install_garbage_collection(cache.clone());
    provide_context(cache);
    provide_context(RwSignal::new(ToastState::default()));
    install_theme();

    view! {
        <Stylesheet id="leptos" href="/pkg/reavsuite.css"/>
        <Title text="ReaVSuite"/>

        <Router>
            {match current_section() {
                SiteSection::Landing => view! {
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=ComingSoonPage/>
                        <Route path=StaticSegment("app") view=AppHomePage/>
                        <Route path=(StaticSegment("app"), WildcardSegment("rest")) view=AppHomePage/>
                    </Routes>
                }
                .into_any(),
                SiteSection::App => view! {
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=AppHomePage/>
                        <Route path=WildcardSegment("rest") view=AppHomePage/>
                    </Routes>
                }
                .into_any(),
            }}
        </Router>

        <Toaster/>
        <ThemeSwitcher/>
    }
}
