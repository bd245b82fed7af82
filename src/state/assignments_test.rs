use super::*;
use crate::net::types::Locator;

fn assignment(id: i64, title: &str) -> Assignment {
    Assignment {
        url: format!("http://testserver/api/assignments/{id}/"),
        id,
        course: "http://testserver/api/courses/1/".to_owned(),
        title: title.to_owned(),
        description: "weekly exercise".to_owned(),
        deadline: "2023-10-01T00:00:00Z".to_owned(),
        grade_ratio: "0.15".to_owned(),
    }
}

#[test]
fn deadline_expands_to_midnight_utc() {
    assert_eq!(deadline_at_midnight("2023-10-01"), "2023-10-01T00:00:00Z");
}

#[test]
fn row_combines_assignment_with_course_title() {
    let row = assignment_row(&assignment(3, "Homework 1"), "Algorithms");
    assert_eq!(row.course_title, "Algorithms");
    assert_eq!(row.title, "Homework 1");
    assert_eq!(row.deadline, "2023-10-01T00:00:00Z");
    assert_eq!(row.grade_ratio, "0.15");
    assert_eq!(
        row.details.locator,
        Locator::Url("http://testserver/api/assignments/3/".to_owned())
    );
}

#[test]
fn detail_opens_with_blank_form() {
    let detail = AssignmentDetail::from(assignment(3, "Homework 1"));
    assert_eq!(detail.id, 3);
    assert_eq!(detail.title, "Homework 1");
    assert_eq!(detail.form, AssignmentForm::default());
}

#[test]
fn edit_form_patch_expands_deadline() {
    let form = AssignmentForm {
        deadline_date: "2023-11-15".to_owned(),
        description: "extended".to_owned(),
        grade_ratio: "0.2".to_owned(),
    };
    let patch = form.to_patch();
    assert_eq!(patch.deadline, "2023-11-15T00:00:00Z");
    assert_eq!(patch.description, "extended");
    assert_eq!(patch.grade_ratio, "0.2");
}

#[test]
fn new_form_body_references_course_by_url() {
    let form = NewAssignmentForm {
        title: "Homework 2".to_owned(),
        deadline_date: "2023-12-01".to_owned(),
        description: String::new(),
        grade_ratio: "0.1".to_owned(),
    };
    let body = form.to_body("http://testserver/api/courses/1/");
    assert_eq!(body.course, "http://testserver/api/courses/1/");
    assert_eq!(body.deadline, "2023-12-01T00:00:00Z");
    assert_eq!(body.title, "Homework 2");
}
