//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `courses`, `groups`, etc.) so
//! individual components can depend on small focused models. Row
//! builders are pure functions from fetched entities to cell data, so
//! a container always mirrors the last successful fetch exactly.

pub mod assignments;
pub mod auth;
pub mod composer;
pub mod courses;
pub mod dialog;
pub mod groups;
pub mod ui;
