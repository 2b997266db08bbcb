//! A disjoint-set (union-find) structure over arbitrary labels.
//!
//! Companion structure to [`Graph`](crate::Graph) with the same
//! label-keyed flavor and the same two policies for unknown elements:
//! mutation ([`union`](UnionFind::union)) inserts missing operands
//! implicitly, queries ([`find`](UnionFind::find),
//! [`same_set`](UnionFind::same_set)) treat them as a normal negative
//! answer.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Disjoint sets with path compression and union by size.
///
/// # Examples
///
/// ```
/// use grafo::UnionFind;
///
/// let mut sets = UnionFind::new();
///
/// sets.union("a", "b");
/// sets.union("c", "d");
///
/// assert!(sets.same_set(&"a", &"b"));
/// assert!(!sets.same_set(&"b", &"c"));
///
/// sets.union("b", "d");
/// assert!(sets.same_set(&"a", &"c"));
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parent: FxHashMap<T, T>,
    size: FxHashMap<T, usize>,
    set_count: usize,
}

impl<T> Default for UnionFind<T> {
    fn default() -> Self {
        Self {
            parent: FxHashMap::default(),
            size: FxHashMap::default(),
            set_count: 0,
        }
    }
}

impl<T> UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no element has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Inserts an element as a singleton set.
    ///
    /// Idempotent: returns `false` and changes nothing if the element is
    /// already present.
    pub fn insert(&mut self, element: T) -> bool {
        if self.parent.contains_key(&element) {
            return false;
        }

        self.parent.insert(element.clone(), element.clone());
        self.size.insert(element, 1);
        self.set_count += 1;
        true
    }

    /// Returns the representative of the element's set, or `None` if the
    /// element is unknown.
    ///
    /// Applies path compression, so repeated lookups flatten the tree.
    pub fn find(&mut self, element: &T) -> Option<&T> {
        if !self.parent.contains_key(element) {
            return None;
        }

        let root = self.root(element.clone());
        self.compress(element.clone(), root.clone());

        self.parent.get_key_value(&root).map(|(key, _)| key)
    }

    /// Returns `true` if both elements are present and belong to the same
    /// set.
    pub fn same_set(&mut self, left: &T, right: &T) -> bool {
        if !self.parent.contains_key(left) || !self.parent.contains_key(right) {
            return false;
        }

        self.root(left.clone()) == self.root(right.clone())
    }

    /// Merges the sets containing the two elements, inserting unknown
    /// operands as singletons first.
    ///
    /// Returns `true` if two distinct sets were merged, `false` if the
    /// elements were already together.
    pub fn union(&mut self, left: T, right: T) -> bool {
        self.insert(left.clone());
        self.insert(right.clone());

        let left_root = self.root(left.clone());
        let right_root = self.root(right.clone());

        if left_root == right_root {
            return false;
        }

        self.compress(left, left_root.clone());
        self.compress(right, right_root.clone());

        let left_size = self.size[&left_root];
        let right_size = self.size[&right_root];

        // Attach the smaller tree under the larger one.
        let (small, large) = if left_size < right_size {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };

        self.parent.insert(small.clone(), large.clone());
        self.size.remove(&small);
        if let Some(size) = self.size.get_mut(&large) {
            *size = left_size + right_size;
        }
        self.set_count -= 1;
        true
    }

    fn root(&self, element: T) -> T {
        let mut current = element;

        loop {
            let parent = self.parent[&current].clone();
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    fn compress(&mut self, element: T, root: T) {
        let mut current = element;

        while current != root {
            let parent = self.parent[&current].clone();
            self.parent.insert(current, root.clone());
            current = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut sets = UnionFind::new();

        assert!(sets.insert("a"));
        assert!(!sets.insert("a"));
        assert_eq!(sets.len(), 1);
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn union_merges_and_counts() {
        let mut sets = UnionFind::new();

        assert!(sets.union("a", "b"));
        assert!(sets.union("c", "d"));
        assert_eq!(sets.set_count(), 2);

        assert!(sets.union("b", "c"));
        assert_eq!(sets.set_count(), 1);

        assert!(!sets.union("a", "d"));
    }

    #[test]
    fn same_set_transitively() {
        let mut sets = UnionFind::new();

        sets.union(1, 2);
        sets.union(2, 3);

        assert!(sets.same_set(&1, &3));
        assert!(!sets.same_set(&1, &4));
    }

    #[test]
    fn unknown_elements_are_negative() {
        let mut sets = UnionFind::<i32>::new();
        sets.insert(1);

        assert_eq!(sets.find(&2), None);
        assert!(!sets.same_set(&1, &2));
        assert!(!sets.same_set(&2, &3));
    }

    #[test]
    fn find_returns_a_common_representative() {
        let mut sets = UnionFind::new();

        sets.union("a", "b");
        sets.union("b", "c");

        let root = sets.find(&"a").copied().unwrap();
        assert_eq!(sets.find(&"b").copied(), Some(root));
        assert_eq!(sets.find(&"c").copied(), Some(root));
    }

    #[test]
    fn union_inserts_unknown_operands() {
        let mut sets = UnionFind::new();

        sets.union("x", "y");

        assert_eq!(sets.len(), 2);
        assert!(sets.same_set(&"x", &"y"));
    }
}
