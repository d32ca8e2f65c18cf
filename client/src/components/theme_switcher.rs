//! Floating three-way theme switcher (dark / system / light).
//!
//! The highlighted option always mirrors the stored preference, not the
//! rendered mode: `system` stays highlighted while it resolves to dark.

#[cfg(test)]
#[path = "theme_switcher_test.rs"]
mod theme_switcher_test;

use leptos::prelude::*;

use crate::components::icons::{MonitorIcon, MoonIcon, SunIcon};
use crate::state::theme::ThemePreference;
use crate::util::reveal;
use crate::util::theme::use_theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SwitcherOption {
    pub preference: ThemePreference,
    pub active: bool,
}

/// Options in display order with exactly one marked active.
#[must_use]
pub fn switcher_options(current: ThemePreference) -> [SwitcherOption; 3] {
    ThemePreference::ALL.map(|preference| SwitcherOption { preference, active: preference == current })
}

fn option_class(active: bool) -> &'static str {
    if active { "theme-switcher__option theme-switcher__option--active" } else { "theme-switcher__option" }
}

fn option_icon(preference: ThemePreference) -> AnyView {
    match preference {
        ThemePreference::Dark => view! { <MoonIcon/> }.into_any(),
        ThemePreference::System => view! { <MonitorIcon/> }.into_any(),
        ThemePreference::Light => view! { <SunIcon/> }.into_any(),
    }
}

#[component]
pub fn ThemeSwitcher() -> impl IntoView {
    let theme = use_theme();

    view! {
        <Show when=move || theme.is_ready()>
            <div class="theme-switcher reveal reveal--up" style=reveal::SWITCHER.style()>
                <div class="theme-switcher__track" role="group" aria-label="Theme">
                    // Keyed on the active flag so only the two changed buttons re-render.
                    <For
                        each=move || switcher_options(theme.preference())
                        key=|option| *option
                        children=move |option: SwitcherOption| {
                            let preference = option.preference;
                            view! {
                                <button
                                    type="button"
                                    class=option_class(option.active)
                                    aria-pressed=if option.active { "true" } else { "false" }
                                    title=preference.as_str()
                                    on:click=move |_| theme.set_preference(preference)
                                >
                                    {option_icon(preference)}
                                    <span class="sr-only">{preference.as_str()}</span>
                                </button>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
