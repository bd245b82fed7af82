//! Wire types for the grading REST API.
//!
//! The server speaks the hyperlinked contract: every entity carries its
//! own absolute `url` alongside a numeric `id`, and references to other
//! entities are absolute URLs. Fields the server trims for permission
//! reasons (a student's school id and class as seen by a non-privileged
//! viewer) are modeled as `Option`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The four addressable resource families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Course,
    Group,
    Student,
    Assignment,
}

impl ResourceKind {
    /// Collection segment under `/api/`.
    pub fn collection(self) -> &'static str {
        match self {
            Self::Course => "courses",
            Self::Group => "groups",
            Self::Student => "students",
            Self::Assignment => "assignments",
        }
    }
}

/// Either half of the API's dual addressing scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Locator {
    Id(i64),
    Url(String),
}

/// A typed reference to one resource, carried by event bindings instead
/// of identifiers spliced into inline handler markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRef {
    pub kind: ResourceKind,
    pub locator: Locator,
}

impl EntityRef {
    pub fn course(id: i64) -> Self {
        Self { kind: ResourceKind::Course, locator: Locator::Id(id) }
    }

    pub fn group(id: i64) -> Self {
        Self { kind: ResourceKind::Group, locator: Locator::Id(id) }
    }

    pub fn assignment(id: i64) -> Self {
        Self { kind: ResourceKind::Assignment, locator: Locator::Id(id) }
    }

    pub fn from_url(kind: ResourceKind, url: impl Into<String>) -> Self {
        Self { kind, locator: Locator::Url(url.into()) }
    }

    /// Request URL for this resource. Server-supplied URLs pass through
    /// untouched; numeric ids resolve against the collection route.
    pub fn href(&self) -> String {
        match &self.locator {
            Locator::Url(url) => url.clone(),
            Locator::Id(id) => format!("/api/{}/{id}/", self.kind.collection()),
        }
    }
}

/// Which side of a course relationship to list: courses the caller is
/// taking (student) or giving (instructor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseRole {
    Taking,
    Giving,
}

impl CourseRole {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Taking => "/api/courses/taking/",
            Self::Giving => "/api/courses/giving/",
        }
    }
}

/// A course as listed by `/api/courses/{taking|giving}/` or fetched by URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub url: String,
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub semester: String,
    #[serde(default)]
    pub description: String,
    pub min_group_size: u32,
    pub max_group_size: u32,
}

/// A student group within a course. `leader` and `members` are student URLs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub url: String,
    pub id: i64,
    pub number: String,
    pub name: String,
    #[serde(default)]
    pub contact: String,
    pub leader: String,
    #[serde(default)]
    pub members: Vec<String>,
}

/// A student profile. `s_id` and `s_class` are absent when the server
/// trims them for the requesting user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub url: String,
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub s_id: Option<String>,
    #[serde(default)]
    pub s_class: Option<String>,
}

/// An administrative class, referenced from student profiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub url: String,
    pub class_id: String,
}

/// One enrollment record from `/api/courses/{id}/takes/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Takes {
    pub url: String,
    pub id: i64,
    pub student: String,
    pub course: String,
    #[serde(default)]
    pub grade: Option<String>,
}

/// A course assignment. `deadline` is an ISO-8601 timestamp string and
/// `grade_ratio` a decimal string, both passed through as the server
/// formats them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub url: String,
    pub id: i64,
    pub course: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: String,
    pub grade_ratio: String,
}

/// The calling user's role as reported by `/api/myself/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Instructor,
}

/// Response of `/api/myself/`: the caller's role and profile URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Myself {
    pub url: String,
    pub role: UserRole,
}

/// Body for `POST /api/courses/`.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewCourse {
    pub title: String,
    pub year: String,
    pub semester: String,
    pub description: String,
}

/// Partial body for `PATCH /api/courses/{id}/` (group configuration).
#[derive(Clone, Debug, Serialize)]
pub struct CourseConfigPatch {
    pub description: String,
    pub min_group_size: String,
    pub max_group_size: String,
}

/// Body for `POST /api/courses/{id}/add_group/`. `leader` and `members`
/// are student URLs.
#[derive(Clone, Debug, Serialize)]
pub struct NewGroup {
    pub name: String,
    pub leader: String,
    pub members: Vec<String>,
}

/// Body for `POST /api/assignments/`. `course` is a course URL.
#[derive(Clone, Debug, Serialize)]
pub struct NewAssignment {
    pub course: String,
    pub title: String,
    pub deadline: String,
    pub description: String,
    pub grade_ratio: String,
}

/// Partial body for `PATCH /api/assignments/{id}/`.
#[derive(Clone, Debug, Serialize)]
pub struct AssignmentPatch {
    pub deadline: String,
    pub description: String,
    pub grade_ratio: String,
}
