//! Reactive theme wiring shared by the app root and the switcher controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `install_theme` is called once from `App`. It loads the persisted
//! preference after hydration, runs the first resolution, and only then flips
//! `ready` so theme-dependent content never renders with the wrong mode.
//! While the preference is `system` an OS color-scheme listener is attached;
//! it is detached when the preference changes or the owner is cleaned up.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::state::theme::{ThemeController, ThemePreference, ThemeStore};
use crate::util::dark_mode::{self, DocumentRoot};
use crate::util::storage::BrowserStorage;

type BrowserThemeController = ThemeController<BrowserStorage, DocumentRoot>;

thread_local! {
    // Only populated in the browser; effects never run during SSR.
    static CONTROLLER: RefCell<Option<BrowserThemeController>> = const { RefCell::new(None) };
}

/// Context handle for reading and changing the theme preference.
#[derive(Clone, Copy, Debug)]
pub struct ThemeHandle {
    preference: RwSignal<ThemePreference>,
    ready: RwSignal<bool>,
}

impl ThemeHandle {
    /// Stored preference (tracked).
    pub fn preference(&self) -> ThemePreference {
        self.preference.get()
    }

    pub fn preference_untracked(&self) -> ThemePreference {
        self.preference.get_untracked()
    }

    /// Whether the first resolution has been applied (tracked).
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    /// Persist `next` and re-apply the effective mode.
    pub fn set_preference(&self, next: ThemePreference) {
        let applied = CONTROLLER.with_borrow_mut(|controller| {
            controller.as_mut().map(|c| c.set_preference(next))
        });
        #[cfg(feature = "hydrate")]
        log::debug!("theme preference set to {next} (mode {applied:?})");
        if applied.is_none() {
            self.preference.set(next);
        }
    }

    #[cfg(feature = "hydrate")]
    fn os_signal_changed(self, os_prefers_dark: bool) {
        let acted = CONTROLLER.with_borrow_mut(|controller| {
            controller.as_mut().is_some_and(|c| c.os_signal_changed(os_prefers_dark))
        });
        log::debug!("os color scheme changed (dark: {os_prefers_dark}, applied: {acted})");
    }
}

/// Whether the OS listener should be attached.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn follows_os_signal(ready: bool, preference: ThemePreference) -> bool {
    ready && preference == ThemePreference::System
}

/// Provide the theme context and install its effects.
pub fn install_theme() -> ThemeHandle {
    let handle = ThemeHandle { preference: RwSignal::new(ThemePreference::default()), ready: RwSignal::new(false) };
    provide_context(handle);

    Effect::new(move || {
        if handle.ready.get_untracked() {
            return;
        }
        let mut store = ThemeStore::load(BrowserStorage);
        let initial = store.preference();
        let preference = handle.preference;
        store.subscribe(move |next| preference.set(next));

        let controller = ThemeController::mount(store, DocumentRoot, dark_mode::os_prefers_dark());
        #[cfg(feature = "hydrate")]
        log::debug!("theme resolved on mount: {:?}", controller.resolved());
        CONTROLLER.with_borrow_mut(|slot| *slot = Some(controller));

        preference.set(initial);
        handle.ready.set(true);
    });

    #[cfg(feature = "hydrate")]
    {
        let listener = StoredValue::new_local(None::<dark_mode::ColorSchemeListener>);
        Effect::new(move || {
            if !follows_os_signal(handle.ready.get(), handle.preference.get()) {
                listener.set_value(None);
                return;
            }
            if listener.with_value(Option::is_none) {
                listener.set_value(dark_mode::ColorSchemeListener::attach(move |dark| {
                    handle.os_signal_changed(dark);
                }));
            }
        });
        on_cleanup(move || {
            listener.set_value(None);
            CONTROLLER.with_borrow_mut(|slot| *slot = None);
        });
    }

    handle
}

/// The handle installed by `App`.
pub fn use_theme() -> ThemeHandle {
    expect_context::<ThemeHandle>()
}
