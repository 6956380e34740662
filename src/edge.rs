//! Edge types for the social graph.
//!
//! Friendship is the only relationship kind between persons, so the
//! edge weight carries no data; the edge itself is the fact.

use serde::{Deserialize, Serialize};

/// The weight of an undirected friendship edge.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Friendship;

/// A flattened friendship for graph export/visualization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipEdge {
    pub a: String,
    pub b: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_json_shape() {
        let edge = FriendshipEdge {
            a: "ann".to_string(),
            b: "bob".to_string(),
        };
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json, serde_json::json!({"a": "ann", "b": "bob"}));
    }
}
