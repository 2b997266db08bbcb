//! Small in-memory generic graph library.
//!
//! The central type is [`Graph`], an adjacency-list representation of a
//! weighted directed or undirected graph over arbitrary vertex labels. On
//! top of it the crate provides reachability queries ([`visit`]), cycle
//! detection and topological sorting ([`algo`]) and Graphviz export
//! ([`export`]).
//!
//! # Examples
//!
//! ```
//! use grafo::{algo, visit, Graph};
//!
//! let mut graph = Graph::new_directed();
//!
//! graph.add_edge("a", "b");
//! graph.add_edge("b", "c");
//! graph.add_edge("a", "c");
//!
//! assert!(visit::is_reachable_bfs(&graph, &"a", &"c"));
//! assert!(!algo::is_cyclic(&graph));
//!
//! let order = algo::toposort(&graph).unwrap();
//! assert_eq!(order.first(), Some(&&"a"));
//! ```

pub mod algo;
pub mod export;
pub mod graph;
pub mod unionfind;
pub mod visit;

pub use graph::Graph;
pub use unionfind::UnionFind;
