//! The group record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named group of people.
///
/// The member set is the group-side half of the membership invariant
/// and is written only by the graph's membership operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Unique group name, assigned by the caller.
    pub name: String,

    /// Codes of the member persons.
    members: BTreeSet<String>,
}

impl Group {
    /// Creates a new group with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: BTreeSet::new(),
        }
    }

    /// Codes of the members, in ascending order.
    pub fn members(&self) -> &BTreeSet<String> {
        &self.members
    }

    /// Records a member. Idempotent.
    pub(crate) fn add_member(&mut self, code: &str) {
        self.members.insert(code.to_string());
    }
}
