//! Core graph data structure.
//!
//! The SocialGraph wraps petgraph and adds registries for code and group
//! lookups. It's the central data structure that everything else works
//! with.

use crate::edge::{Friendship, FriendshipEdge};
use crate::error::{Result, SocialError};
use crate::group::Group;
use crate::person::Person;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef; // For edge_references
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Unique identifier for a person node in the graph.
pub type PersonId = NodeIndex;

/// The social relationship graph.
///
/// Persons are nodes, friendships are undirected edges, and groups live
/// in a side registry keyed by name. An undirected edge makes the
/// friendship visible from both ends in one insertion, so a reader can
/// never observe a one-directional edge.
///
/// All registries use ordered containers, so every derived sequence is
/// reproducible across runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct SocialGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: UnGraph<Person, Friendship>,

    /// Maps person codes to graph node indexes.
    pub(crate) code_index: BTreeMap<String, PersonId>,

    /// Maps group names to groups.
    pub(crate) groups: BTreeMap<String, Group>,
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            code_index: BTreeMap::new(),
            groups: BTreeMap::new(),
        }
    }

    /// Registers a new person under a unique code.
    pub fn register_person(
        &mut self,
        code: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<()> {
        let code = code.into();
        if self.code_index.contains_key(&code) {
            return Err(SocialError::DuplicateIdentity(code));
        }

        let index = self
            .graph
            .add_node(Person::new(code.as_str(), first_name, last_name));
        debug!("registered person: {}", code);
        self.code_index.insert(code, index);
        Ok(())
    }

    /// Gets a person by code.
    pub fn lookup(&self, code: &str) -> Result<&Person> {
        let index = self.index_of(code)?;
        // Nodes are never removed, so every indexed entry is live.
        Ok(&self.graph[index])
    }

    /// Iterates over all persons in registration order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.graph.node_weights()
    }

    /// Records a friendship between two registered persons.
    ///
    /// The edge is undirected: both persons see each other as friends
    /// as soon as the call returns. Adding an existing friendship is a
    /// no-op, as is pairing a person with themselves. Both codes are
    /// validated before anything is written.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> Result<()> {
        let index_a = self.index_of(a)?;
        let index_b = self.index_of(b)?;

        if index_a == index_b || self.graph.find_edge(index_a, index_b).is_some() {
            return Ok(());
        }

        self.graph.add_edge(index_a, index_b, Friendship);
        debug!("friendship added: {} <-> {}", a, b);
        Ok(())
    }

    /// Codes of the direct friends of a person, in ascending order.
    ///
    /// The result never contains the person's own code.
    pub fn friends_of(&self, code: &str) -> Result<BTreeSet<String>> {
        let index = self.index_of(code)?;
        Ok(self
            .graph
            .neighbors(index)
            .map(|neighbor| self.graph[neighbor].code.clone())
            .collect())
    }

    /// Whether two registered persons are friends.
    pub fn are_friends(&self, a: &str, b: &str) -> Result<bool> {
        let index_a = self.index_of(a)?;
        let index_b = self.index_of(b)?;
        Ok(self.graph.find_edge(index_a, index_b).is_some())
    }

    /// Codes of the friends-of-friends of a person.
    ///
    /// Walks each direct friend in ascending code order and collects
    /// that friend's friends in ascending code order. The person's own
    /// code is excluded. Direct friends reachable through another
    /// friend are not excluded: a direct friend can legitimately also
    /// be a friend-of-friend.
    ///
    /// Without `dedupe` the result keeps one entry per traversal hit,
    /// so a person reachable through two friends appears twice. With
    /// `dedupe` the result is collapsed to a sorted, duplicate-free
    /// sequence.
    pub fn second_degree_friends(&self, code: &str, dedupe: bool) -> Result<Vec<String>> {
        let index = self.index_of(code)?;

        let mut reached = Vec::new();
        for (_, friend) in self.sorted_neighbors(index) {
            for (candidate, _) in self.sorted_neighbors(friend) {
                if candidate != code {
                    reached.push(candidate.to_string());
                }
            }
        }

        if dedupe {
            reached.sort();
            reached.dedup();
        }
        Ok(reached)
    }

    /// Creates a new empty group with a unique name.
    pub fn create_group(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.groups.contains_key(&name) {
            return Err(SocialError::DuplicateGroup(name));
        }

        let group = Group::new(name.as_str());
        debug!("group created: {}", name);
        self.groups.insert(name, group);
        Ok(())
    }

    /// Adds a registered person to an existing group.
    ///
    /// The group's member set and the person's group set are updated in
    /// this one call; on failure neither side changes. Idempotent on
    /// repeat calls.
    pub fn add_membership(&mut self, code: &str, group_name: &str) -> Result<()> {
        let index = self.index_of(code)?;
        let group = self
            .groups
            .get_mut(group_name)
            .ok_or_else(|| SocialError::UnknownGroup(group_name.to_string()))?;

        group.add_member(code);
        self.graph[index].join_group(group_name);

        debug!("membership added: {} -> {}", code, group_name);
        Ok(())
    }

    /// Codes of the members of a group, in ascending order.
    pub fn members_of(&self, group_name: &str) -> Result<&BTreeSet<String>> {
        self.groups
            .get(group_name)
            .map(Group::members)
            .ok_or_else(|| SocialError::UnknownGroup(group_name.to_string()))
    }

    /// Names of all groups, in ascending order.
    ///
    /// Yields an empty vec when no groups exist, never an error.
    pub fn list_groups(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered persons.
    pub fn person_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of friendships.
    pub fn friendship_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns all friendships with both endpoint codes for export.
    pub fn friendship_edges(&self) -> Vec<FriendshipEdge> {
        self.graph
            .edge_references()
            .map(|edge_ref| FriendshipEdge {
                a: self.graph[edge_ref.source()].code.clone(),
                b: self.graph[edge_ref.target()].code.clone(),
            })
            .collect()
    }

    /// Gets the node index for a person code.
    pub(crate) fn index_of(&self, code: &str) -> Result<PersonId> {
        self.code_index
            .get(code)
            .copied()
            .ok_or_else(|| SocialError::UnknownIdentity(code.to_string()))
    }

    /// Adjacent nodes with their codes, in ascending code order.
    fn sorted_neighbors(&self, index: PersonId) -> Vec<(&str, PersonId)> {
        let mut neighbors: Vec<(&str, PersonId)> = self
            .graph
            .neighbors(index)
            .map(|neighbor| (self.graph[neighbor].code.as_str(), neighbor))
            .collect();
        neighbors.sort_by(|a, b| a.0.cmp(b.0));
        neighbors
    }
}

/// Graph statistics for embedding hosts.
#[derive(Debug, Serialize, Deserialize)]
pub struct SocialStats {
    pub people: usize,
    pub friendships: usize,
    pub groups: usize,
}

impl SocialGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> SocialStats {
        SocialStats {
            people: self.person_count(),
            friendships: self.friendship_count(),
            groups: self.group_count(),
        }
    }
}
