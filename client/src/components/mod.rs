//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and read/write shared state from Leptos
//! context providers installed by `app::App`.

pub mod icons;
pub mod theme_switcher;
pub mod toaster;
