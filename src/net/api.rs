//! REST API helpers for communicating with the grading server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Read helpers return `Option` — a failed list or detail fetch logs to
//! the console and leaves the view empty, never crashing hydration.
//! Mutations return `Result<_, ApiError>` so callers can surface the
//! server's raw response text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Assignment, AssignmentPatch, Course, CourseConfigPatch, CourseRole, EntityRef, Group, Myself,
    NewAssignment, NewCourse, NewGroup, SchoolClass, Student, Takes,
};

/// Failure of one API call. Kinds are distinguished for logging but
/// handled uniformly: reads go empty, writes alert.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user. HTTP errors surface the server's raw
    /// response body, matching the original alert behavior.
    pub fn alert_text(&self) -> String {
        match self {
            Self::Status { body, .. } if !body.is_empty() => body.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Status { status, body }
}

/// GET `url` and decode a JSON body. Failures are logged and collapse
/// to `None`.
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = match gloo_net::http::Request::get(url).send().await {
        Ok(resp) => resp,
        Err(err) => {
            log::warn!("GET {url}: {err}");
            return None;
        }
    };
    if !resp.ok() {
        log::warn!("GET {url}: status {}", resp.status());
        return None;
    }
    match resp.json::<T>().await {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("GET {url}: {err}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_checked(req: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        Ok(resp)
    } else {
        Err(status_error(resp).await)
    }
}

/// Fetch the calling user's role and profile URL from `/api/myself/`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_myself() -> Option<Myself> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/myself/").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the student profile behind a server-supplied URL.
pub async fn fetch_student(href: &str) -> Option<Student> {
    #[cfg(feature = "hydrate")]
    {
        get_json(href).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
        None
    }
}

/// Fetch the administrative class behind a student's `s_class` URL.
pub async fn fetch_class(href: &str) -> Option<SchoolClass> {
    #[cfg(feature = "hydrate")]
    {
        get_json(href).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
        None
    }
}

/// List the caller's courses, taking or giving.
pub async fn fetch_courses(role: CourseRole) -> Option<Vec<Course>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(role.endpoint()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = role;
        None
    }
}

/// Fetch one course by reference.
pub async fn fetch_course(course: &EntityRef) -> Option<Course> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&course.href()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course;
        None
    }
}

/// List all groups of a course via `/api/courses/{id}/groups/`.
pub async fn fetch_course_groups(course_id: i64) -> Option<Vec<Group>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/courses/{course_id}/groups/")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        None
    }
}

/// List the groups of a course that contain a given student.
pub async fn fetch_groups_with_student(course_id: i64, student_id: i64) -> Option<Vec<Group>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/groups/?course={course_id}&has_student={student_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (course_id, student_id);
        None
    }
}

/// Fetch one group by reference.
pub async fn fetch_group(group: &EntityRef) -> Option<Group> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&group.href()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = group;
        None
    }
}

/// List enrollment records of a course via `/api/courses/{id}/takes/`.
pub async fn fetch_course_takes(course_id: i64) -> Option<Vec<Takes>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/courses/{course_id}/takes/")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        None
    }
}

/// List students of a course that are not yet in any group.
pub async fn fetch_ungrouped_students(course_id: i64) -> Option<Vec<Student>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/students/?course={course_id}&grouped=False")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        None
    }
}

/// List assignments of a course via `/api/assignments/?course=`.
pub async fn fetch_assignments(course_id: i64) -> Option<Vec<Assignment>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/assignments/?course={course_id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        None
    }
}

/// Fetch one assignment by reference.
pub async fn fetch_assignment(assignment: &EntityRef) -> Option<Assignment> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&assignment.href()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
        None
    }
}

/// Create a course via `POST /api/courses/`.
///
/// # Errors
///
/// Returns the server's error body on a non-success status.
pub async fn create_course(body: &NewCourse) -> Result<Course, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post("/api/courses/")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = send_checked(req).await?;
        resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Update a course's description and group-size bounds via
/// `PATCH /api/courses/{id}/`.
///
/// # Errors
///
/// Returns the server's error body on a non-success status.
pub async fn update_course_config(course_id: i64, body: &CourseConfigPatch) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::patch(&format!("/api/courses/{course_id}/"))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_checked(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (course_id, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a course.
///
/// # Errors
///
/// Returns the server's error body on a non-success status.
pub async fn delete_course(course: &EntityRef) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::delete(&course.href()).build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_checked(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a group via `POST /api/courses/{id}/add_group/`.
///
/// # Errors
///
/// Returns the server's error body on a non-success status.
pub async fn create_group(course_id: i64, body: &NewGroup) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&format!("/api/courses/{course_id}/add_group/"))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_checked(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (course_id, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a group.
///
/// # Errors
///
/// Returns the server's error body on a non-success status.
pub async fn delete_group(group: &EntityRef) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::delete(&group.href()).build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_checked(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = group;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an assignment via `POST /api/assignments/`.
///
/// # Errors
///
/// Returns the server's error body on a non-success status.
pub async fn create_assignment(body: &NewAssignment) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post("/api/assignments/")
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_checked(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Update an assignment via `PATCH /api/assignments/{id}/`.
///
/// # Errors
///
/// Returns the server's error body on a non-success status.
pub async fn update_assignment(assignment_id: i64, body: &AssignmentPatch) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::patch(&format!("/api/assignments/{assignment_id}/"))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_checked(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (assignment_id, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete an assignment.
///
/// # Errors
///
/// Returns the server's error body on a non-success status.
pub async fn delete_assignment(assignment_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::delete(&format!("/api/assignments/{assignment_id}/"))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_checked(req).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Upload a student-roster spreadsheet for a course. Standard multipart
/// form submission, no chunking or progress tracking.
///
/// # Errors
///
/// Returns the server's error body on a non-success status.
#[cfg(feature = "hydrate")]
pub async fn upload_roster(course_id: i64, file: &web_sys::File) -> Result<(), ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("form data".to_owned()))?;
    form.append_with_blob_and_filename("stuxls", file, &file.name())
        .map_err(|_| ApiError::Network("form data".to_owned()))?;
    let req = gloo_net::http::Request::post(&format!("stuxls/?course_id={course_id}"))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send_checked(req).await.map(|_| ())
}
