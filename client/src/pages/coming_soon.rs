//! Public "coming soon" landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered at `/`. Content stays hidden until the theme's first resolution
//! has run so visitors never see a flash of the wrong mode. The signup form
//! only checks the address locally and answers with a toast; nothing is sent
//! to a backend.

#[cfg(test)]
#[path = "coming_soon_test.rs"]
mod coming_soon_test;

use leptos::prelude::*;

use crate::components::icons::{GithubIcon, LinkedinIcon, MoonIcon, SunIcon, TwitterIcon};
use crate::components::toaster::notify;
use crate::state::theme::ThemePreference;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::reveal;
use crate::util::theme::use_theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SocialNetwork {
    Github,
    Twitter,
    Linkedin,
}

impl SocialNetwork {
    const ALL: [Self; 3] = [Self::Github, Self::Twitter, Self::Linkedin];

    fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Twitter => "Twitter",
            Self::Linkedin => "LinkedIn",
        }
    }

    fn icon(self) -> AnyView {
        match self {
            Self::Github => view! { <GithubIcon/> }.into_any(),
            Self::Twitter => view! { <TwitterIcon/> }.into_any(),
            Self::Linkedin => view! { <LinkedinIcon/> }.into_any(),
        }
    }
}

/// Loose syntactic check: `local@domain.tld`, no whitespace, one `@`.
pub(crate) fn is_plausible_email(input: &str) -> bool {
    let value = input.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Toast shown after pressing "Notify Me".
pub(crate) fn signup_feedback(input: &str) -> (ToastKind, &'static str) {
    if input.trim().is_empty() {
        (ToastKind::Error, "Enter an email first.")
    } else if is_plausible_email(input) {
        (ToastKind::Success, "Thanks! We'll let you know when we launch.")
    } else {
        (ToastKind::Error, "That doesn't look like an email address.")
    }
}

#[component]
pub fn ComingSoonPage() -> impl IntoView {
    let theme = use_theme();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());

    let on_notify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (kind, message) = signup_feedback(&email.get_untracked());
        if kind == ToastKind::Success {
            email.set(String::new());
        }
        notify(toasts, kind, message);
    };

    let on_quick_toggle = move |_: leptos::ev::MouseEvent| {
        let next = theme.preference_untracked().quick_toggle();
        theme.set_preference(next);
    };

    view! {
        <Show when=move || theme.is_ready()>
            <main class="coming-soon">
                <header class="coming-soon__header reveal reveal--down" style=reveal::HEADER.style()>
                    <h1 class="coming-soon__title reveal reveal--pop" style=reveal::TITLE.style()>
                        "ReaVSuite"
                    </h1>
                    <p class="coming-soon__subtitle reveal" style=reveal::SUBTITLE.style()>
                        "Something amazing is coming soon..."
                    </p>
                </header>

                <form class="coming-soon__signup reveal reveal--up" style=reveal::SIGNUP.style() on:submit=on_notify>
                    <input
                        class="coming-soon__email"
                        type="email"
                        placeholder="Enter your email for updates"
                        aria-label="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">
                        "Notify Me"
                    </button>
                </form>

                <nav class="coming-soon__social reveal" style=reveal::SOCIAL.style() aria-label="Social">
                    {SocialNetwork::ALL
                        .into_iter()
                        .map(|network| {
                            view! {
                                <button type="button" class="btn btn--outline btn--icon" aria-label=network.label()>
                                    {network.icon()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="coming-soon__quick-toggle reveal" style=reveal::QUICK_TOGGLE.style()>
                    <button
                        type="button"
                        class="btn btn--ghost btn--icon"
                        title="Toggle dark mode"
                        on:click=on_quick_toggle
                    >
                        {move || {
                            if theme.preference() == ThemePreference::Dark {
                                view! { <SunIcon/> }.into_any()
                            } else {
                                view! { <MoonIcon/> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </main>
        </Show>
    }
}
