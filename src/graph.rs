//! The adjacency-list graph representation.

use std::{collections::hash_map::Entry, hash::Hash};

use rustc_hash::FxHashMap;

/// A weighted graph over arbitrary vertex labels, backed by adjacency lists.
///
/// The orientation (directed or undirected) is fixed at construction. For
/// undirected graphs every edge is stored in both endpoint lists and this
/// symmetry is maintained by all mutation operations.
///
/// Within a vertex's neighbor list, insertion order is preserved; this
/// affects traversal order, not correctness. The order in which
/// [`vertices`](Graph::vertices) yields vertices is unspecified.
///
/// Parallel edges and self-loops are accepted as ordinary entries and are
/// never deduplicated.
///
/// # Examples
///
/// ```
/// use grafo::Graph;
///
/// let mut graph = Graph::new_undirected();
///
/// graph.add_edge("a", "b");
/// graph.add_edge_weighted("b", "c", 3);
///
/// assert!(graph.has_edge(&"b", &"a"));
/// assert_eq!(graph.neighbors(&"b").collect::<Vec<_>>(), [&"a", &"c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adj: FxHashMap<V, Vec<(V, i64)>>,
    directed: bool,
}

impl<V> Graph<V> {
    /// Creates an empty graph with directed edges.
    pub fn new_directed() -> Self {
        Self {
            adj: FxHashMap::default(),
            directed: true,
        }
    }

    /// Creates an empty graph with undirected edges.
    pub fn new_undirected() -> Self {
        Self {
            adj: FxHashMap::default(),
            directed: false,
        }
    }

    /// Returns `true` if the graph was constructed as directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns an iterator over all vertices, in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adj.keys()
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash,
{
    /// Adds a vertex with an empty neighbor list.
    ///
    /// Idempotent: if the vertex is already present, the graph is left
    /// unchanged and `false` is returned.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        match self.adj.entry(vertex) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Vec::new());
                true
            }
        }
    }

    /// Adds an edge with the default weight of 1.
    ///
    /// See [`add_edge_weighted`](Graph::add_edge_weighted) for details.
    pub fn add_edge(&mut self, from: V, to: V)
    where
        V: Clone,
    {
        self.add_edge_weighted(from, to, 1);
    }

    /// Adds an edge with the given weight, implicitly adding both endpoints
    /// as vertices first.
    ///
    /// The entry is appended to `from`'s neighbor list; in an undirected
    /// graph the reciprocal entry is appended to `to`'s list as well. There
    /// is no duplicate check, so repeated insertion accumulates parallel
    /// edges. An undirected self-loop is stored as two identical entries.
    pub fn add_edge_weighted(&mut self, from: V, to: V, weight: i64)
    where
        V: Clone,
    {
        if self.directed {
            self.adj.entry(to.clone()).or_default();
        } else {
            self.adj
                .entry(to.clone())
                .or_default()
                .push((from.clone(), weight));
        }
        self.adj.entry(from).or_default().push((to, weight));
    }

    /// Adds edges from an iterator of `(from, to)` pairs, with the default
    /// weight.
    pub fn extend_with_edges<I>(&mut self, iter: I)
    where
        V: Clone,
        I: IntoIterator<Item = (V, V)>,
    {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }

    /// Removes all edges from `from` to `to`, including parallel duplicates.
    ///
    /// In an undirected graph the reciprocal entries are removed as well,
    /// preserving the symmetry of the adjacency lists. Unknown vertices make
    /// this a no-op; the endpoints themselves stay in the graph.
    pub fn remove_edge(&mut self, from: &V, to: &V) {
        if let Some(list) = self.adj.get_mut(from) {
            list.retain(|(target, _)| target != to);
        }

        if !self.directed {
            if let Some(list) = self.adj.get_mut(to) {
                list.retain(|(target, _)| target != from);
            }
        }
    }

    /// Removes a vertex together with all edges incident to it.
    ///
    /// Besides dropping the vertex's own neighbor list, this purges the
    /// vertex from every other neighbor list, so no dangling edge targets
    /// remain. This scans all lists, O(V + E). No-op if the vertex is
    /// unknown.
    pub fn remove_vertex(&mut self, vertex: &V) {
        if self.adj.remove(vertex).is_none() {
            return;
        }

        for list in self.adj.values_mut() {
            list.retain(|(target, _)| target != vertex);
        }
    }

    /// Returns `true` if the vertex is present in the graph.
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adj.contains_key(vertex)
    }

    /// Returns `true` if there is at least one edge from `from` to `to`.
    ///
    /// An unknown vertex is a normal negative answer, not an error.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edges_from(from).iter().any(|(target, _)| target == to)
    }

    /// Returns the neighbors of a vertex in insertion order, with weights
    /// stripped. Empty for an unknown vertex.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> {
        self.edges_from(vertex).iter().map(|(target, _)| target)
    }

    /// Returns the weighted neighbor list of a vertex, in insertion order.
    /// Empty for an unknown vertex.
    pub fn edges_from(&self, vertex: &V) -> &[(V, i64)] {
        self.adj.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of edges, counting each undirected edge once.
    ///
    /// Parallel edges contribute individually.
    pub fn edge_count(&self) -> usize {
        let entries: usize = self.adj.values().map(Vec::len).sum();

        if self.directed {
            entries
        } else {
            entries / 2
        }
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new_undirected()
    }
}
