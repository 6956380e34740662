//! The person record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A registered person.
///
/// Identity attributes are fixed at registration. Friend links are not
/// stored on the record; they are edges of the graph. The group set is
/// the person-side half of the membership invariant and is written only
/// by the graph's membership operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique account code, assigned by the caller.
    pub code: String,

    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Names of the groups this person belongs to.
    groups: BTreeSet<String>,
}

impl Person {
    /// Creates a new person record with no memberships.
    pub fn new(
        code: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            groups: BTreeSet::new(),
        }
    }

    /// Names of the groups this person belongs to, in ascending order.
    pub fn groups(&self) -> &BTreeSet<String> {
        &self.groups
    }

    /// Records membership in a group. Idempotent.
    pub(crate) fn join_group(&mut self, name: &str) {
        self.groups.insert(name.to_string());
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.code, self.first_name, self.last_name)
    }
}
