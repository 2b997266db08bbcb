//! Find a [topologically sorted] collection of vertices of a directed
//! acyclic graph (DAG).
//!
//! The order is produced by a depth-first postorder walk: a vertex is
//! appended only after all its unvisited successors have been, and the
//! accumulated sequence is reversed at the end. The exact order is not
//! specified beyond the topological property and should not be relied
//! upon.
//!
//! **The sorter does not detect cycles.** On a cyclic graph it still
//! terminates and returns a permutation of the vertices, but that
//! permutation is not a topological order (none exists). Callers that
//! need the guarantee must check with
//! [`is_cyclic`](crate::algo::is_cyclic) first.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::toposort, Graph};
//!
//! let mut dependencies = Graph::new_directed();
//!
//! // Edge direction in "must be built before" relation.
//! dependencies.extend_with_edges([
//!     ("libc", "time"),
//!     ("serde", "time"),
//!     ("serde", "serde_json"),
//!     ("time", "cargo"),
//!     ("serde_json", "cargo"),
//! ]);
//!
//! let order = toposort(&dependencies).unwrap();
//! assert_eq!(order.last(), Some(&&"cargo"));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::graph::Graph;

/// The error returned by [`toposort`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Topological ordering is defined for directed graphs only.
    #[error("topological sort requires a directed graph")]
    Undirected,
}

/// Returns the vertices of a directed graph in topological order.
///
/// Fails with [`Error::Undirected`] if the graph is undirected, leaving
/// no partial effect. For directed graphs the result is a valid
/// topological order provided the graph is acyclic; see the
/// [module](self) documentation for the cyclic case.
pub fn toposort<V>(graph: &Graph<V>) -> Result<Vec<&V>, Error>
where
    V: Eq + Hash,
{
    if !graph.is_directed() {
        return Err(Error::Undirected);
    }

    let mut visited = FxHashSet::default();
    let mut order = Vec::with_capacity(graph.vertex_count());

    for root in graph.vertices() {
        if !visited.contains(root) {
            visit_postorder(graph, root, &mut visited, &mut order);
        }
    }

    order.reverse();
    Ok(order)
}

fn visit_postorder<'a, V>(
    graph: &'a Graph<V>,
    vertex: &'a V,
    visited: &mut FxHashSet<&'a V>,
    order: &mut Vec<&'a V>,
) where
    V: Eq + Hash,
{
    visited.insert(vertex);

    for (neighbor, _) in graph.edges_from(vertex) {
        if !visited.contains(neighbor) {
            visit_postorder(graph, neighbor, visited, order);
        }
    }

    order.push(vertex);
}
