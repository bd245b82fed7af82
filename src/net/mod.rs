//! Network layer: wire types and typed REST endpoint functions.

pub mod api;
pub mod types;
