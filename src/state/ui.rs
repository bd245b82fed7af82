#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which list the teacher page is showing. The original page kept both
/// tables in the DOM and toggled visibility; here the active tab drives
/// which one renders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeacherTab {
    #[default]
    Courses,
    Assignments,
}
