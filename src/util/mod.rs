//! Browser interop helpers.

pub mod alert;
