//! Superlative queries over the social graph.
//!
//! These are pure reads composed over the registries: ranking is plain
//! key extraction over data the mutation paths have already validated,
//! so no query has an error path. Each returns `None` only when the
//! relevant registry is empty; every tie goes to the lexicographically
//! smallest code or name.

use crate::graph::{PersonId, SocialGraph};

impl SocialGraph {
    /// Code of the person with the most direct friends.
    pub fn person_with_most_friends(&self) -> Option<&str> {
        self.best_person_by(|graph, index| graph.graph.neighbors(index).count())
    }

    /// Code of the person with the most friends-of-friends.
    ///
    /// Ranked by the undeduplicated second-degree count: a person
    /// reachable through two different friends counts twice.
    pub fn person_with_most_second_degree_friends(&self) -> Option<&str> {
        self.best_person_by(Self::second_degree_count)
    }

    /// Code of the person belonging to the most groups.
    pub fn person_in_most_groups(&self) -> Option<&str> {
        self.best_person_by(|graph, index| graph.graph[index].groups().len())
    }

    /// Name of the group with the most members.
    pub fn largest_group(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for (name, group) in &self.groups {
            let size = group.members().len();
            if best.map_or(true, |(_, top)| size > top) {
                best = Some((name.as_str(), size));
            }
        }
        best.map(|(name, _)| name)
    }

    /// Scans persons in ascending code order and keeps the champion.
    ///
    /// Replacing only on a strictly greater score makes the smallest
    /// code win every tie.
    fn best_person_by<F>(&self, score: F) -> Option<&str>
    where
        F: Fn(&Self, PersonId) -> usize,
    {
        let mut best: Option<(&str, usize)> = None;
        for (code, &index) in &self.code_index {
            let value = score(self, index);
            if best.map_or(true, |(_, top)| value > top) {
                best = Some((code.as_str(), value));
            }
        }
        best.map(|(code, _)| code)
    }

    /// Second-degree reach with duplicates, used for ranking.
    fn second_degree_count(&self, index: PersonId) -> usize {
        self.graph
            .neighbors(index)
            .flat_map(|friend| self.graph.neighbors(friend))
            .filter(|&candidate| candidate != index)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered(codes: &[&str]) -> SocialGraph {
        let mut graph = SocialGraph::new();
        for code in codes {
            graph.register_person(*code, "First", "Last").unwrap();
        }
        graph
    }

    #[test]
    fn test_empty_registry_returns_none() {
        let graph = SocialGraph::new();
        assert_eq!(graph.person_with_most_friends(), None);
        assert_eq!(graph.person_with_most_second_degree_friends(), None);
        assert_eq!(graph.person_in_most_groups(), None);
        assert_eq!(graph.largest_group(), None);
    }

    #[test]
    fn test_most_friends() {
        let mut graph = registered(&["ann", "bob", "cara", "dan"]);
        graph.add_friendship("bob", "ann").unwrap();
        graph.add_friendship("bob", "cara").unwrap();
        graph.add_friendship("bob", "dan").unwrap();

        assert_eq!(graph.person_with_most_friends(), Some("bob"));
    }

    #[test]
    fn test_most_friends_tie_breaks_on_lowest_code() {
        let mut graph = registered(&["ann", "bob", "cara"]);
        graph.add_friendship("bob", "cara").unwrap();

        // bob and cara tie with one friend each; ann has none.
        assert_eq!(graph.person_with_most_friends(), Some("bob"));
    }

    #[test]
    fn test_most_friends_without_friendships() {
        let graph = registered(&["cara", "ann", "bob"]);

        // Everyone scores zero; the scan still yields the lowest code.
        assert_eq!(graph.person_with_most_friends(), Some("ann"));
    }

    #[test]
    fn test_most_second_degree_friends() {
        // ann - bob - cara - dan - eve
        // Only cara reaches two people at the second level.
        let mut graph = registered(&["ann", "bob", "cara", "dan", "eve"]);
        graph.add_friendship("ann", "bob").unwrap();
        graph.add_friendship("bob", "cara").unwrap();
        graph.add_friendship("cara", "dan").unwrap();
        graph.add_friendship("dan", "eve").unwrap();

        assert_eq!(graph.person_with_most_second_degree_friends(), Some("cara"));
    }

    #[test]
    fn test_second_degree_ranking_counts_duplicates() {
        // Diamond ann/bob/cara/dan plus the chain zed - w - u, w - v.
        // Every diamond member reaches one person along two paths and
        // ties the chain's distinct-reach members at two, so the scan
        // yields the lowest code; a deduplicated ranking would have
        // scored the diamond at one and picked "u" instead.
        let mut graph = registered(&["ann", "bob", "cara", "dan", "u", "v", "w", "zed"]);
        graph.add_friendship("ann", "bob").unwrap();
        graph.add_friendship("ann", "cara").unwrap();
        graph.add_friendship("bob", "dan").unwrap();
        graph.add_friendship("cara", "dan").unwrap();
        graph.add_friendship("zed", "w").unwrap();
        graph.add_friendship("w", "u").unwrap();
        graph.add_friendship("w", "v").unwrap();

        assert_eq!(graph.person_with_most_second_degree_friends(), Some("ann"));
    }

    #[test]
    fn test_largest_group() {
        let mut graph = registered(&["ann", "bob", "cara"]);
        graph.create_group("g1").unwrap();
        graph.create_group("g2").unwrap();
        graph.add_membership("ann", "g1").unwrap();
        graph.add_membership("bob", "g1").unwrap();
        graph.add_membership("cara", "g2").unwrap();

        assert_eq!(graph.largest_group(), Some("g1"));
    }

    #[test]
    fn test_largest_group_tie_breaks_on_lowest_name() {
        let mut graph = registered(&["ann", "bob"]);
        graph.create_group("zeta").unwrap();
        graph.create_group("alpha").unwrap();
        graph.add_membership("ann", "zeta").unwrap();
        graph.add_membership("bob", "alpha").unwrap();

        assert_eq!(graph.largest_group(), Some("alpha"));
    }

    #[test]
    fn test_person_in_most_groups() {
        let mut graph = registered(&["ann", "bob"]);
        graph.create_group("g1").unwrap();
        graph.create_group("g2").unwrap();
        graph.add_membership("bob", "g1").unwrap();
        graph.add_membership("bob", "g2").unwrap();
        graph.add_membership("ann", "g1").unwrap();

        assert_eq!(graph.person_in_most_groups(), Some("bob"));
    }

    #[test]
    fn test_person_in_most_groups_without_groups() {
        let graph = registered(&["bob", "ann"]);
        assert_eq!(graph.person_in_most_groups(), Some("ann"));
    }
}
