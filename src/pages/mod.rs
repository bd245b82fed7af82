//! Page components, one canonical component per page.

pub mod home;
pub mod student;
pub mod teacher;
