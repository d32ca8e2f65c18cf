//! Client state models.
//!
//! DESIGN
//! ======
//! Plain Rust types with no reactive dependencies; the app root wraps them in
//! signals or context so they stay testable without a browser.

pub mod query_cache;
pub mod theme;
pub mod toast;
