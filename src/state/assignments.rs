#[cfg(test)]
#[path = "assignments_test.rs"]
mod assignments_test;

use crate::net::types::{Assignment, AssignmentPatch, EntityRef, NewAssignment, ResourceKind};

/// Expand a date input value to the midnight-UTC timestamp the API
/// expects for deadlines.
pub fn deadline_at_midnight(date: &str) -> String {
    format!("{date}T00:00:00Z")
}

/// One row of the teacher's assignment list.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentRow {
    pub course_title: String,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub grade_ratio: String,
    /// Reference bound to the row's edit button.
    pub details: EntityRef,
}

/// Build one assignment row. The owning course's title is fetched
/// separately (the assignment payload only carries the course URL).
pub fn assignment_row(assignment: &Assignment, course_title: &str) -> AssignmentRow {
    AssignmentRow {
        course_title: course_title.to_owned(),
        title: assignment.title.clone(),
        description: assignment.description.clone(),
        deadline: assignment.deadline.clone(),
        grade_ratio: assignment.grade_ratio.clone(),
        details: EntityRef::from_url(ResourceKind::Assignment, assignment.url.clone()),
    }
}

/// View model of the assignment edit dialog. The form starts blank on
/// every open; save patches all three fields with whatever was typed.
#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentDetail {
    pub id: i64,
    pub title: String,
    pub form: AssignmentForm,
}

impl From<Assignment> for AssignmentDetail {
    fn from(a: Assignment) -> Self {
        Self { id: a.id, title: a.title, form: AssignmentForm::default() }
    }
}

/// Editable deadline/description/ratio fields, kept as input strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssignmentForm {
    pub deadline_date: String,
    pub description: String,
    pub grade_ratio: String,
}

impl AssignmentForm {
    pub fn to_patch(&self) -> AssignmentPatch {
        AssignmentPatch {
            deadline: deadline_at_midnight(&self.deadline_date),
            description: self.description.clone(),
            grade_ratio: self.grade_ratio.clone(),
        }
    }
}

/// Fields of the new-assignment dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewAssignmentForm {
    pub title: String,
    pub deadline_date: String,
    pub description: String,
    pub grade_ratio: String,
}

impl NewAssignmentForm {
    /// Save body for `POST /api/assignments/`; `course_url` is the
    /// freshly fetched owning course's URL.
    pub fn to_body(&self, course_url: &str) -> NewAssignment {
        NewAssignment {
            course: course_url.to_owned(),
            title: self.title.clone(),
            deadline: deadline_at_midnight(&self.deadline_date),
            description: self.description.clone(),
            grade_ratio: self.grade_ratio.clone(),
        }
    }
}
