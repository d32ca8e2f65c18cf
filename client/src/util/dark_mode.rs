//! Browser bindings for the color-scheme media query and the `<html>` marker.
//!
//! Reads the OS `prefers-color-scheme` signal, applies the `light` / `dark`
//! class on the document element, and subscribes to OS changes. Requires a
//! browser environment; SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{EffectiveMode, ModeTarget};

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Whether the OS currently asks for a dark color scheme.
pub fn os_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// The `<html>` element's class list.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl ModeTarget for DocumentRoot {
    fn apply_mode(&mut self, mode: EffectiveMode) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
                return;
            };
            let classes = el.class_list();
            let _ = classes.remove_2(EffectiveMode::Light.class_name(), EffectiveMode::Dark.class_name());
            let _ = classes.add_1(mode.class_name());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
        }
    }
}

/// Live `change` listener on the dark color-scheme media query.
///
/// Dropping the listener detaches it; no callback runs afterwards.
#[cfg(feature = "hydrate")]
pub struct ColorSchemeListener {
    query: web_sys::MediaQueryList,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

#[cfg(feature = "hydrate")]
impl ColorSchemeListener {
    /// Attach `on_change`, called with `true` when the OS switches to dark.
    /// Returns `None` when media queries are unavailable.
    pub fn attach(mut on_change: impl FnMut(bool) + 'static) -> Option<Self> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let query = web_sys::window()?.match_media(DARK_QUERY).ok().flatten()?;
        let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::wrap(Box::new(
            move |ev: web_sys::MediaQueryListEvent| on_change(ev.matches()),
        ));
        query
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { query, callback })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ColorSchemeListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}
