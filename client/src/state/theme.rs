//! Theme preference, its persisted store, and mode resolution.
//!
//! DESIGN
//! ======
//! The user picks a `ThemePreference` (light, dark, or system). The visible
//! `EffectiveMode` is derived from it and, for `system`, from the OS
//! `prefers-color-scheme` signal. `ThemeStore` owns the preference and
//! persists it on every write; `ThemeController` owns the store plus the
//! document target and keeps exactly one mode marker applied.
//!
//! Everything here is plain Rust so it runs identically in SSR, the browser,
//! and unit tests. Browser bindings live in `util::dark_mode`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Storage key for the persisted preference record.
pub const STORAGE_KEY: &str = "theme-storage";

/// Schema version written alongside the preference.
pub const STORAGE_VERSION: u32 = 0;

// =============================================================================
// PREFERENCE / MODE
// =============================================================================

/// The user's chosen theme setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Switcher display order.
    pub const ALL: [Self; 3] = [Self::Dark, Self::System, Self::Light];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Target of the single-button light/dark toggle: `dark` flips to `light`,
    /// anything else (including `system`) flips to `dark`.
    #[must_use]
    pub fn quick_toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light | Self::System => Self::Dark,
        }
    }

    /// Resolve against the OS color-scheme signal.
    #[must_use]
    pub fn resolve(self, os_prefers_dark: bool) -> EffectiveMode {
        match self {
            Self::Light => EffectiveMode::Light,
            Self::Dark => EffectiveMode::Dark,
            Self::System if os_prefers_dark => EffectiveMode::Dark,
            Self::System => EffectiveMode::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemePreference(pub String);

impl fmt::Display for UnknownThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme preference: {:?}", self.0)
    }
}

impl std::error::Error for UnknownThemePreference {}

impl FromStr for ThemePreference {
    type Err = UnknownThemePreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(UnknownThemePreference(other.to_owned())),
        }
    }
}

/// The rendered visual mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectiveMode {
    Light,
    Dark,
}

impl EffectiveMode {
    /// Marker class applied to the document root.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolver state: the preference together with the mode it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
    SystemLight,
    SystemDark,
}

impl ResolvedTheme {
    #[must_use]
    pub fn new(preference: ThemePreference, os_prefers_dark: bool) -> Self {
        match (preference, preference.resolve(os_prefers_dark)) {
            (ThemePreference::Light, _) => Self::Light,
            (ThemePreference::Dark, _) => Self::Dark,
            (ThemePreference::System, EffectiveMode::Dark) => Self::SystemDark,
            (ThemePreference::System, EffectiveMode::Light) => Self::SystemLight,
        }
    }

    #[must_use]
    pub fn preference(self) -> ThemePreference {
        match self {
            Self::Light => ThemePreference::Light,
            Self::Dark => ThemePreference::Dark,
            Self::SystemLight | Self::SystemDark => ThemePreference::System,
        }
    }

    #[must_use]
    pub fn mode(self) -> EffectiveMode {
        match self {
            Self::Light | Self::SystemLight => EffectiveMode::Light,
            Self::Dark | Self::SystemDark => EffectiveMode::Dark,
        }
    }
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct PersistedTheme {
    state: PersistedThemeState,
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedThemeState {
    theme: ThemePreference,
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(ThemePreference)>;

/// Persisted, change-notifying holder of the theme preference.
pub struct ThemeStore<S> {
    storage: S,
    preference: ThemePreference,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Load the persisted preference. Missing, malformed, or other-version
    /// records start at `system`.
    pub fn load(storage: S) -> Self {
        let preference = load_json::<PersistedTheme>(&storage, STORAGE_KEY)
            .filter(|record| record.version == STORAGE_VERSION)
            .map(|record| record.state.theme)
            .unwrap_or_default();
        Self { storage, preference, subscribers: Vec::new(), next_subscription: 0 }
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Overwrite, persist, and notify subscribers.
    pub fn set_preference(&mut self, next: ThemePreference) {
        self.preference = next;
        let record = PersistedTheme { state: PersistedThemeState { theme: next }, version: STORAGE_VERSION };
        save_json(&self.storage, STORAGE_KEY, &record);
        for (_, subscriber) in &self.subscribers {
            subscriber(next);
        }
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(ThemePreference) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S> fmt::Debug for ThemeStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("preference", &self.preference)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// RESOLVER
// =============================================================================

/// Something that carries the mode marker (the `<html>` element in the browser).
pub trait ModeTarget {
    /// Remove the other marker, then apply `mode`.
    fn apply_mode(&mut self, mode: EffectiveMode);
}

/// In-memory class list, used for SSR and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    #[must_use]
    pub fn new(classes: &[&str]) -> Self {
        Self { classes: classes.iter().map(|c| (*c).to_owned()).collect() }
    }

    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.classes
    }
}

impl ModeTarget for ClassList {
    fn apply_mode(&mut self, mode: EffectiveMode) {
        self.classes.retain(|c| c != EffectiveMode::Light.class_name() && c != EffectiveMode::Dark.class_name());
        self.classes.push(mode.class_name().to_owned());
    }
}

/// Applies the effective mode for the stored preference and the OS signal.
pub struct ThemeController<S, T> {
    store: ThemeStore<S>,
    target: T,
    os_prefers_dark: bool,
    resolved: ResolvedTheme,
}

impl<S: KeyValueStore, T: ModeTarget> ThemeController<S, T> {
    /// Take ownership of the store and target and run the first resolution.
    pub fn mount(store: ThemeStore<S>, target: T, os_prefers_dark: bool) -> Self {
        let resolved = ResolvedTheme::new(store.preference(), os_prefers_dark);
        let mut controller = Self { store, target, os_prefers_dark, resolved };
        controller.apply_effective_mode();
        controller
    }

    /// Re-resolve and write the mode to the target. Idempotent.
    pub fn apply_effective_mode(&mut self) -> EffectiveMode {
        self.resolved = ResolvedTheme::new(self.store.preference(), self.os_prefers_dark);
        let mode = self.resolved.mode();
        self.target.apply_mode(mode);
        mode
    }

    pub fn set_preference(&mut self, next: ThemePreference) -> EffectiveMode {
        self.store.set_preference(next);
        self.apply_effective_mode()
    }

    /// OS color-scheme change callback. Acts only while the stored preference
    /// is still `system`; returns whether the mode was re-applied.
    pub fn os_signal_changed(&mut self, os_prefers_dark: bool) -> bool {
        self.os_prefers_dark = os_prefers_dark;
        if self.store.preference() != ThemePreference::System {
            return false;
        }
        self.apply_effective_mode();
        true
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.store.preference()
    }

    #[must_use]
    pub fn resolved(&self) -> ResolvedTheme {
        self.resolved
    }

    #[must_use]
    pub fn effective_mode(&self) -> EffectiveMode {
        self.resolved.mode()
    }

    pub fn store_mut(&mut self) -> &mut ThemeStore<S> {
        &mut self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }
}
