use super::*;

// =============================================================
// EntityRef
// =============================================================

#[test]
fn id_ref_resolves_against_collection_route() {
    assert_eq!(EntityRef::course(4).href(), "/api/courses/4/");
    assert_eq!(EntityRef::group(7).href(), "/api/groups/7/");
    assert_eq!(EntityRef::assignment(12).href(), "/api/assignments/12/");
}

#[test]
fn url_ref_passes_through_untouched() {
    let detail = EntityRef::from_url(ResourceKind::Course, "http://testserver/api/courses/1/");
    assert_eq!(detail.href(), "http://testserver/api/courses/1/");
}

#[test]
fn resource_kinds_map_to_distinct_collections() {
    let kinds = [
        ResourceKind::Course,
        ResourceKind::Group,
        ResourceKind::Student,
        ResourceKind::Assignment,
    ];
    for (i, a) in kinds.iter().enumerate() {
        for (j, b) in kinds.iter().enumerate() {
            if i != j {
                assert_ne!(a.collection(), b.collection());
            }
        }
    }
}

// =============================================================
// CourseRole
// =============================================================

#[test]
fn course_role_endpoints() {
    assert_eq!(CourseRole::Taking.endpoint(), "/api/courses/taking/");
    assert_eq!(CourseRole::Giving.endpoint(), "/api/courses/giving/");
}

// =============================================================
// Wire decoding
// =============================================================

#[test]
fn course_decodes_hyperlinked_payload() {
    let json = r#"{
        "url": "http://testserver/api/courses/1/",
        "id": 1,
        "title": "Algorithms",
        "year": 2023,
        "semester": "A",
        "description": "...",
        "min_group_size": 2,
        "max_group_size": 5
    }"#;
    let course: Course = serde_json::from_str(json).unwrap();
    assert_eq!(course.title, "Algorithms");
    assert_eq!(course.year, 2023);
    assert_eq!(course.semester, "A");
}

#[test]
fn course_description_defaults_when_absent() {
    let json = r#"{
        "url": "http://testserver/api/courses/2/",
        "id": 2,
        "title": "Compilers",
        "year": 2023,
        "semester": "B",
        "min_group_size": 0,
        "max_group_size": 0
    }"#;
    let course: Course = serde_json::from_str(json).unwrap();
    assert_eq!(course.description, "");
}

#[test]
fn student_decodes_permission_trimmed_payload() {
    // A non-privileged viewer sees neither s_id nor s_class.
    let json = r#"{
        "url": "http://testserver/api/students/3/",
        "id": 3,
        "name": "Bob"
    }"#;
    let student: Student = serde_json::from_str(json).unwrap();
    assert!(student.s_id.is_none());
    assert!(student.s_class.is_none());
}

#[test]
fn group_members_default_to_empty() {
    let json = r#"{
        "url": "http://testserver/api/groups/5/",
        "id": 5,
        "number": "G1",
        "name": "team re",
        "leader": "http://testserver/api/students/1/"
    }"#;
    let group: Group = serde_json::from_str(json).unwrap();
    assert!(group.members.is_empty());
    assert_eq!(group.contact, "");
}
