//! Kith - an in-memory social graph
//!
//! This crate manages a small social graph: registered persons,
//! symmetric friendships, named groups, and derived queries over the
//! relationships (direct friends, friends-of-friends, superlatives).
//!
//! # Architecture
//!
//! The graph uses petgraph internally with additional registries for:
//! - Code-based person lookups
//! - Name-based group lookups
//!
//! Friendships are undirected edges, so symmetry holds by construction:
//! one edge insertion makes the relationship visible from both ends.
//! Registries and derived sequences use ordered containers and are
//! reproducible across runs.
//!
//! # Example
//!
//! ```
//! use kith::SocialGraph;
//!
//! # fn main() -> kith::Result<()> {
//! let mut graph = SocialGraph::new();
//!
//! graph.register_person("ann", "Ann", "Archer")?;
//! graph.register_person("bob", "Bob", "Baker")?;
//! graph.add_friendship("ann", "bob")?;
//!
//! assert!(graph.friends_of("ann")?.contains("bob"));
//! assert_eq!(graph.person_with_most_friends(), Some("ann"));
//! # Ok(())
//! # }
//! ```

mod edge;
mod error;
mod graph;
mod group;
mod person;
mod query;

pub use edge::{Friendship, FriendshipEdge};
pub use error::{Result, SocialError};
pub use graph::{PersonId, SocialGraph, SocialStats};
pub use group::Group;
pub use person::Person;
