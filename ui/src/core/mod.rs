//! Platform-agnostic state and helpers behind the navigation components.
//!
//! Nothing in here renders; the types are plain data so they can be unit
//! tested without a Dioxus runtime.

pub mod config;
pub mod handoff;
pub mod locale;
pub mod nav_state;
pub mod query_cache;
pub mod route;
pub mod timing;
pub mod toast;
