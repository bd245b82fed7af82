#[cfg(test)]
#[path = "groups_test.rs"]
mod groups_test;

use crate::net::types::{EntityRef, Group, SchoolClass, Student};

/// One row of a member table: school id, name, class id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberRow {
    pub s_id: String,
    pub name: String,
    pub class_id: String,
}

/// Build a member row from a fetched student and (if reachable) their
/// class. Students whose school id or class the server trimmed render
/// with blank cells, name only.
pub fn member_row(student: &Student, class: Option<&SchoolClass>) -> MemberRow {
    match (&student.s_id, class) {
        (Some(s_id), Some(class)) => MemberRow {
            s_id: s_id.clone(),
            name: student.name.clone(),
            class_id: class.class_id.clone(),
        },
        _ => MemberRow {
            s_id: String::new(),
            name: student.name.clone(),
            class_id: String::new(),
        },
    }
}

/// One row of the teacher's group list.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupRow {
    pub number: String,
    pub name: String,
    pub leader: String,
    pub contact: String,
    /// Reference bound to the row's members and delete buttons.
    pub group: EntityRef,
}

/// Build one group row. The leader's display name is fetched separately
/// (the group payload only carries the leader's URL).
pub fn group_row(group: &Group, leader_name: &str) -> GroupRow {
    GroupRow {
        number: group.number.clone(),
        name: group.name.clone(),
        leader: leader_name.to_owned(),
        contact: group.contact.clone(),
        group: EntityRef::group(group.id),
    }
}

/// The student's membership situation in one course, derived from
/// `/api/groups/?course=&has_student=`.
#[derive(Clone, Debug, PartialEq)]
pub enum Membership {
    /// Not in any group; free to compose one.
    None,
    /// In exactly one group.
    One(Group),
    /// Server returned more than one group; the view shows nothing.
    Ambiguous,
}

pub fn classify_membership(mut groups: Vec<Group>) -> Membership {
    match groups.len() {
        0 => Membership::None,
        1 => Membership::One(groups.remove(0)),
        _ => Membership::Ambiguous,
    }
}
