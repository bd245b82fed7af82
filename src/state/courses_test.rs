use super::*;
use crate::net::types::Locator;

fn course(id: i64, title: &str) -> Course {
    Course {
        url: format!("http://testserver/api/courses/{id}/"),
        id,
        title: title.to_owned(),
        year: 2023,
        semester: "A".to_owned(),
        description: "...".to_owned(),
        min_group_size: 2,
        max_group_size: 5,
    }
}

#[test]
fn one_fetched_course_yields_one_row() {
    let rows = course_rows(&[course(1, "Algorithms")]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Algorithms");
    assert_eq!(rows[0].term, "2023A");
    assert_eq!(rows[0].description, "...");
    assert_eq!(
        rows[0].details.locator,
        Locator::Url("http://testserver/api/courses/1/".to_owned())
    );
}

#[test]
fn rows_match_fetch_count_and_order() {
    let fetched = [course(1, "Algorithms"), course(2, "Compilers"), course(7, "Networks")];
    let rows = course_rows(&fetched);
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
        ["Algorithms", "Compilers", "Networks"]
    );
}

#[test]
fn rerender_from_new_fetch_replaces_rows() {
    // Row building is pure: a second fetch result fully determines the
    // table, leaving no stale rows from the first.
    let first = course_rows(&[course(1, "Algorithms"), course(2, "Compilers")]);
    let second = course_rows(&[course(2, "Compilers")]);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].title, "Compilers");
}

#[test]
fn empty_fetch_yields_empty_table() {
    assert!(course_rows(&[]).is_empty());
}

#[test]
fn detail_carries_config_fields_as_input_strings() {
    let detail = CourseDetail::from(course(4, "Databases"));
    assert_eq!(detail.id, 4);
    assert_eq!(detail.term, "2023A");
    assert_eq!(detail.config.min_group_size, "2");
    assert_eq!(detail.config.max_group_size, "5");
    assert_eq!(detail.config.description, "...");
}

#[test]
fn config_form_patch_passes_fields_through() {
    let form = CourseConfigForm {
        description: "updated".to_owned(),
        min_group_size: "3".to_owned(),
        max_group_size: "6".to_owned(),
    };
    let patch = form.to_patch();
    assert_eq!(patch.description, "updated");
    assert_eq!(patch.min_group_size, "3");
    assert_eq!(patch.max_group_size, "6");
}
