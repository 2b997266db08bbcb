//! Detect a [cycle] in a graph.
//!
//! The algorithm branches on the orientation of the graph, because the
//! notion of a cycle differs: in a directed graph a cycle is witnessed by
//! a back edge into the current exploration path, while in an undirected
//! graph every stored edge is its own trivial "back edge" (the adjacency
//! holds both directions) and must be discounted by tracking the
//! immediate predecessor.
//!
//! The exploration is recursive; see the [`visit`](crate::visit) module
//! notes on stack depth.
//!
//! [cycle]: https://en.wikipedia.org/wiki/Cycle_(graph_theory)
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::is_cyclic, Graph};
//!
//! let mut graph = Graph::new_undirected();
//!
//! graph.add_edge("a", "b");
//! graph.add_edge("b", "c");
//!
//! assert!(!is_cyclic(&graph));
//!
//! graph.add_edge("c", "a");
//!
//! assert!(is_cyclic(&graph));
//! ```

use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::Graph;

/// Returns `true` if the graph contains a cycle.
///
/// Every vertex is taken as an exploration root, so disconnected
/// components are covered. Runs in O(V + E).
pub fn is_cyclic<V>(graph: &Graph<V>) -> bool
where
    V: Eq + Hash,
{
    if graph.is_directed() {
        let mut state = FxHashMap::default();

        graph
            .vertices()
            .any(|root| !state.contains_key(root) && has_back_edge(graph, root, &mut state))
    } else {
        let mut visited = FxHashSet::default();

        // A root has no predecessor, so it passes itself.
        graph
            .vertices()
            .any(|root| !visited.contains(root) && joins_visited(graph, root, root, &mut visited))
    }
}

/// Exploration state of a vertex in the directed walk. Absence from the
/// state map means unvisited.
enum State {
    /// On the current recursion stack.
    Visiting,
    /// Fully explored without finding a cycle through it.
    Done,
}

fn has_back_edge<'a, V>(
    graph: &'a Graph<V>,
    vertex: &'a V,
    state: &mut FxHashMap<&'a V, State>,
) -> bool
where
    V: Eq + Hash,
{
    state.insert(vertex, State::Visiting);

    for (neighbor, _) in graph.edges_from(vertex) {
        match state.get(neighbor) {
            // A neighbor on the current recursion stack closes a cycle.
            Some(State::Visiting) => return true,
            Some(State::Done) => {}
            None => {
                if has_back_edge(graph, neighbor, state) {
                    return true;
                }
            }
        }
    }

    state.insert(vertex, State::Done);
    false
}

fn joins_visited<'a, V>(
    graph: &'a Graph<V>,
    vertex: &'a V,
    parent: &V,
    visited: &mut FxHashSet<&'a V>,
) -> bool
where
    V: Eq + Hash,
{
    visited.insert(vertex);

    for (neighbor, _) in graph.edges_from(vertex) {
        if !visited.contains(neighbor) {
            if joins_visited(graph, neighbor, vertex, visited) {
                return true;
            }
        } else if neighbor != parent {
            // Already visited and not the edge we came in through.
            return true;
        }
    }

    false
}
