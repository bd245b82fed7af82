//! Reusable UI fragments shared by the student and teacher pages.

pub mod dialog_shell;
pub mod member_table;
pub mod roster_upload;
