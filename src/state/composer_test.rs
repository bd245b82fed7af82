use super::*;

fn students() -> Vec<Student> {
    (1..=4)
        .map(|id| Student {
            url: format!("http://testserver/api/students/{id}/"),
            id,
            name: format!("student {id}"),
            s_id: Some(format!("2023000{id}")),
            s_class: None,
        })
        .collect()
}

#[test]
fn seeding_excludes_the_composing_student() {
    let composer = GroupComposer::from_ungrouped(1, &students(), 2);
    assert_eq!(composer.course_id, 1);
    assert_eq!(composer.candidates.len(), 3);
    assert!(composer.candidates.iter().all(|c| c.id != 2));
    assert!(composer.pending.is_empty());
}

#[test]
fn pick_moves_exactly_one_candidate() {
    let mut composer = GroupComposer::from_ungrouped(1, &students(), 1);
    assert!(composer.pick(3));

    assert_eq!(composer.candidates.len(), 2);
    assert!(composer.candidates.iter().all(|c| c.id != 3));
    assert_eq!(composer.pending.len(), 1);
    assert_eq!(composer.pending[0].id, 3);
}

#[test]
fn pick_unknown_id_changes_nothing() {
    let mut composer = GroupComposer::from_ungrouped(1, &students(), 1);
    let before = composer.clone();
    assert!(!composer.pick(99));
    assert_eq!(composer, before);
}

#[test]
fn pick_then_unpick_restores_selector_round_trip() {
    let mut composer = GroupComposer::from_ungrouped(1, &students(), 1);
    let original: Vec<i64> = composer.candidates.iter().map(|c| c.id).collect();

    assert!(composer.pick(4));
    assert!(composer.unpick(4));

    let mut restored: Vec<i64> = composer.candidates.iter().map(|c| c.id).collect();
    restored.sort_unstable();
    let mut expected = original;
    expected.sort_unstable();
    assert_eq!(restored, expected);
    assert!(composer.pending.is_empty());
}

#[test]
fn unpick_without_pick_changes_nothing() {
    let mut composer = GroupComposer::from_ungrouped(1, &students(), 1);
    let before = composer.clone();
    assert!(!composer.unpick(3));
    assert_eq!(composer, before);
}

#[test]
fn save_body_carries_name_leader_and_member_urls() {
    let mut composer = GroupComposer::from_ungrouped(1, &students(), 1);
    composer.group_name = "team re".to_owned();
    composer.pick(2);
    composer.pick(4);

    let body = composer.to_body("http://testserver/api/students/1/");
    assert_eq!(body.name, "team re");
    assert_eq!(body.leader, "http://testserver/api/students/1/");
    assert_eq!(
        body.members,
        vec![
            "http://testserver/api/students/2/".to_owned(),
            "http://testserver/api/students/4/".to_owned(),
        ]
    );
}
