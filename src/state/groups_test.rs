use super::*;
use crate::net::types::Locator;

fn student(id: i64, name: &str, s_id: Option<&str>) -> Student {
    Student {
        url: format!("http://testserver/api/students/{id}/"),
        id,
        name: name.to_owned(),
        s_id: s_id.map(str::to_owned),
        s_class: s_id.map(|_| "http://testserver/api/classes/9/".to_owned()),
    }
}

fn class() -> SchoolClass {
    SchoolClass {
        url: "http://testserver/api/classes/9/".to_owned(),
        class_id: "301".to_owned(),
    }
}

fn group(id: i64, name: &str) -> Group {
    Group {
        url: format!("http://testserver/api/groups/{id}/"),
        id,
        number: "G1".to_owned(),
        name: name.to_owned(),
        contact: "qq 12345".to_owned(),
        leader: "http://testserver/api/students/1/".to_owned(),
        members: vec!["http://testserver/api/students/2/".to_owned()],
    }
}

#[test]
fn member_row_with_full_permissions() {
    let row = member_row(&student(2, "Alice", Some("20230002")), Some(&class()));
    assert_eq!(row.s_id, "20230002");
    assert_eq!(row.name, "Alice");
    assert_eq!(row.class_id, "301");
}

#[test]
fn member_row_blank_cells_when_fields_trimmed() {
    let row = member_row(&student(3, "Bob", None), None);
    assert_eq!(row.s_id, "");
    assert_eq!(row.name, "Bob");
    assert_eq!(row.class_id, "");
}

#[test]
fn member_row_blank_cells_when_class_fetch_failed() {
    // s_id present but the class fetch came back empty: treated like a
    // trimmed profile rather than rendering a partial row.
    let row = member_row(&student(3, "Bob", Some("20230003")), None);
    assert_eq!(row.s_id, "");
    assert_eq!(row.class_id, "");
}

#[test]
fn group_row_binds_actions_to_group_id() {
    let row = group_row(&group(5, "team re"), "Alice");
    assert_eq!(row.number, "G1");
    assert_eq!(row.name, "team re");
    assert_eq!(row.leader, "Alice");
    assert_eq!(row.contact, "qq 12345");
    assert_eq!(row.group.locator, Locator::Id(5));
}

#[test]
fn membership_none_when_no_group_returned() {
    assert_eq!(classify_membership(vec![]), Membership::None);
}

#[test]
fn membership_one_extracts_the_group() {
    let m = classify_membership(vec![group(5, "team re")]);
    match m {
        Membership::One(g) => assert_eq!(g.id, 5),
        other => panic!("expected One, got {other:?}"),
    }
}

#[test]
fn membership_ambiguous_when_multiple_groups() {
    let m = classify_membership(vec![group(5, "a"), group(6, "b")]);
    assert_eq!(m, Membership::Ambiguous);
}
