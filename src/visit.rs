//! Reachability traversals over a [`Graph`].
//!
//! Both traversals answer the same question and always agree on the
//! boolean result for the same input; they differ only in the order in
//! which vertices are discovered. Neighbors are explored in insertion
//! order in both cases.
//!
//! The depth-first variant is recursive and consumes one stack frame per
//! depth level, so its reach is bounded by the program stack. Graphs with
//! very long simple paths can exhaust it; this is an accepted limitation
//! of the recursive formulation, not something the queries guard against.

use std::{collections::VecDeque, hash::Hash};

use rustc_hash::FxHashSet;

use crate::graph::Graph;

/// Returns `true` if `target` is reachable from `start`, searching
/// breadth-first.
///
/// If either vertex is unknown, the answer is `false`; queries never
/// create vertices.
///
/// # Examples
///
/// ```
/// use grafo::{visit, Graph};
///
/// let mut graph = Graph::new_directed();
///
/// graph.add_edge("a", "b");
/// graph.add_edge("b", "c");
///
/// assert!(visit::is_reachable_bfs(&graph, &"a", &"c"));
/// assert!(!visit::is_reachable_bfs(&graph, &"c", &"a"));
/// ```
pub fn is_reachable_bfs<'a, V>(graph: &'a Graph<V>, start: &'a V, target: &V) -> bool
where
    V: Eq + Hash,
{
    if !graph.has_vertex(start) || !graph.has_vertex(target) {
        return false;
    }

    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();

    // Vertices are marked visited when enqueued, not when dequeued, so
    // that no vertex enters the queue twice.
    visited.insert(start);
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        if vertex == target {
            return true;
        }

        for (neighbor, _) in graph.edges_from(vertex) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    false
}

/// Returns `true` if `target` is reachable from `start`, searching
/// depth-first.
///
/// Equivalent to [`is_reachable_bfs`] in its answer; only the discovery
/// order differs. If either vertex is unknown, the answer is `false`.
pub fn is_reachable_dfs<'a, V>(graph: &'a Graph<V>, start: &'a V, target: &V) -> bool
where
    V: Eq + Hash,
{
    if !graph.has_vertex(start) || !graph.has_vertex(target) {
        return false;
    }

    let mut visited = FxHashSet::default();
    dfs_reaches(graph, start, target, &mut visited)
}

fn dfs_reaches<'a, V>(
    graph: &'a Graph<V>,
    vertex: &'a V,
    target: &V,
    visited: &mut FxHashSet<&'a V>,
) -> bool
where
    V: Eq + Hash,
{
    if vertex == target {
        return true;
    }

    visited.insert(vertex);

    for (neighbor, _) in graph.edges_from(vertex) {
        if !visited.contains(neighbor) && dfs_reaches(graph, neighbor, target, visited) {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn reachable_along_directed_path() {
        let mut graph = Graph::new_directed();
        graph.extend_with_edges([("a", "b"), ("b", "c"), ("c", "d")]);

        assert!(is_reachable_bfs(&graph, &"a", &"d"));
        assert!(is_reachable_dfs(&graph, &"a", &"d"));
    }

    #[test]
    fn direction_is_respected() {
        let mut graph = Graph::new_directed();
        graph.extend_with_edges([("a", "b"), ("b", "c")]);

        assert!(!is_reachable_bfs(&graph, &"c", &"a"));
        assert!(!is_reachable_dfs(&graph, &"c", &"a"));
    }

    #[test]
    fn undirected_edges_are_walkable_both_ways() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_edges([("a", "b"), ("b", "c")]);

        assert!(is_reachable_bfs(&graph, &"c", &"a"));
        assert!(is_reachable_dfs(&graph, &"c", &"a"));
    }

    #[test]
    fn start_equals_target() {
        let mut graph = Graph::new_directed();
        graph.add_vertex("a");

        assert!(is_reachable_bfs(&graph, &"a", &"a"));
        assert!(is_reachable_dfs(&graph, &"a", &"a"));
    }

    #[test]
    fn unknown_vertices_are_unreachable() {
        let mut graph = Graph::new_directed();
        graph.add_vertex("a");

        assert!(!is_reachable_bfs(&graph, &"a", &"x"));
        assert!(!is_reachable_bfs(&graph, &"x", &"a"));
        assert!(!is_reachable_dfs(&graph, &"a", &"x"));
        assert!(!is_reachable_dfs(&graph, &"x", &"a"));

        // The failed queries must not have created the vertex.
        assert!(!graph.has_vertex(&"x"));
    }

    #[test]
    fn disconnected_components_are_unreachable() {
        let mut graph = Graph::new_undirected();
        graph.extend_with_edges([("a", "b"), ("c", "d")]);

        assert!(!is_reachable_bfs(&graph, &"a", &"d"));
        assert!(!is_reachable_dfs(&graph, &"a", &"d"));
    }

    #[test]
    fn cycle_does_not_loop_forever() {
        let mut graph = Graph::new_directed();
        graph.extend_with_edges([("a", "b"), ("b", "a")]);

        assert!(is_reachable_bfs(&graph, &"a", &"b"));
        assert!(is_reachable_dfs(&graph, &"a", &"b"));
        assert!(!is_reachable_bfs(&graph, &"a", &"c"));
    }

    proptest! {
        #[test]
        fn bfs_and_dfs_agree(
            edges in proptest::collection::vec((0u8..8, 0u8..8), 0..32),
            directed: bool,
            start in 0u8..8,
            target in 0u8..8,
        ) {
            let mut graph = if directed {
                Graph::new_directed()
            } else {
                Graph::new_undirected()
            };
            graph.extend_with_edges(edges);

            prop_assert_eq!(
                is_reachable_bfs(&graph, &start, &target),
                is_reachable_dfs(&graph, &start, &target),
            );
        }
    }
}
