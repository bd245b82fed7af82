#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::types::{Course, EntityRef, NewCourse, ResourceKind};

/// Display label for a course's term, e.g. year 2023 + semester "A"
/// renders as "2023A".
pub fn term_label(year: i32, semester: &str) -> String {
    format!("{year}{semester}")
}

/// One row of a course list table.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseRow {
    pub title: String,
    pub term: String,
    pub description: String,
    /// Course id, used by row actions that address by id (roster upload).
    pub id: i64,
    /// Reference bound to the row's details button.
    pub details: EntityRef,
}

/// Build course table rows. Pure; the caller replaces its previous rows
/// wholesale so the table mirrors exactly this fetch.
pub fn course_rows(courses: &[Course]) -> Vec<CourseRow> {
    courses
        .iter()
        .map(|c| CourseRow {
            title: c.title.clone(),
            term: term_label(c.year, &c.semester),
            description: c.description.clone(),
            id: c.id,
            details: EntityRef::from_url(ResourceKind::Course, c.url.clone()),
        })
        .collect()
}

/// View model of the course detail dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseDetail {
    pub id: i64,
    pub title: String,
    pub term: String,
    pub description: String,
    /// Editable group-configuration fields (teacher view only).
    pub config: CourseConfigForm,
}

impl From<Course> for CourseDetail {
    fn from(c: Course) -> Self {
        Self {
            id: c.id,
            title: c.title,
            term: term_label(c.year, &c.semester),
            config: CourseConfigForm {
                description: c.description.clone(),
                min_group_size: c.min_group_size.to_string(),
                max_group_size: c.max_group_size.to_string(),
            },
            description: c.description,
        }
    }
}

/// Editable description and group-size bounds, kept as input strings
/// until submission.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseConfigForm {
    pub description: String,
    pub min_group_size: String,
    pub max_group_size: String,
}

impl CourseConfigForm {
    pub fn to_patch(&self) -> crate::net::types::CourseConfigPatch {
        crate::net::types::CourseConfigPatch {
            description: self.description.clone(),
            min_group_size: self.min_group_size.clone(),
            max_group_size: self.max_group_size.clone(),
        }
    }
}

/// Fields of the new-course dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewCourseForm {
    pub title: String,
    pub year: String,
    pub semester: String,
    pub description: String,
}

impl NewCourseForm {
    pub fn to_body(&self) -> NewCourse {
        NewCourse {
            title: self.title.clone(),
            year: self.year.clone(),
            semester: self.semester.clone(),
            description: self.description.clone(),
        }
    }
}
