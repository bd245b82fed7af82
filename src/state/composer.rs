#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::net::types::{NewGroup, Student};

/// A student available for group composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub url: String,
}

/// Local model of the new-group dialog: a candidate selector and a
/// pending-members list. All moves are local; nothing reaches the
/// server until an explicit save.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupComposer {
    pub course_id: i64,
    pub group_name: String,
    pub candidates: Vec<Candidate>,
    pub pending: Vec<Candidate>,
}

impl GroupComposer {
    /// Seed the candidate selector from the course's ungrouped students,
    /// excluding the composing student (they become the leader).
    pub fn from_ungrouped(course_id: i64, students: &[Student], self_id: i64) -> Self {
        Self {
            course_id,
            group_name: String::new(),
            candidates: students
                .iter()
                .filter(|s| s.id != self_id)
                .map(|s| Candidate { id: s.id, name: s.name.clone(), url: s.url.clone() })
                .collect(),
            pending: Vec::new(),
        }
    }

    /// Move one candidate into the pending list. Returns `false` if no
    /// candidate has that id.
    pub fn pick(&mut self, id: i64) -> bool {
        let Some(pos) = self.candidates.iter().position(|c| c.id == id) else {
            return false;
        };
        let candidate = self.candidates.remove(pos);
        self.pending.push(candidate);
        true
    }

    /// Move one pending member back into the candidate selector.
    /// Returns `false` if no pending member has that id.
    pub fn unpick(&mut self, id: i64) -> bool {
        let Some(pos) = self.pending.iter().position(|c| c.id == id) else {
            return false;
        };
        let candidate = self.pending.remove(pos);
        self.candidates.push(candidate);
        true
    }

    /// Student URLs of the pending members, in picked order.
    pub fn member_urls(&self) -> Vec<String> {
        self.pending.iter().map(|c| c.url.clone()).collect()
    }

    /// Save body for `POST /api/courses/{id}/add_group/`.
    pub fn to_body(&self, leader_url: &str) -> NewGroup {
        NewGroup {
            name: self.group_name.clone(),
            leader: leader_url.to_owned(),
            members: self.member_urls(),
        }
    }
}
