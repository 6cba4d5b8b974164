//! Prefix index over product names.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::ProductId;

#[derive(Debug, Clone, Default)]
struct Node {
    children: BTreeMap<char, Node>,
    /// Products whose full (lowercased) name ends at this node.
    ids: BTreeSet<ProductId>,
}

/// Trie mapping lowercase name prefixes to product IDs.
///
/// Children are kept in a `BTreeMap`, so the depth-first walk visits them in
/// character order and results are reproducible.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    root: Node,
    len: usize,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `name` (case-insensitively) under `id`.
    pub fn insert(&mut self, name: &str, id: ProductId) {
        let mut node = &mut self.root;
        for ch in name.to_lowercase().chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.ids.insert(id) {
            self.len += 1;
        }
    }

    /// All IDs stored under names starting with `prefix`, in depth-first order.
    ///
    /// An empty prefix matches everything; a prefix with no path yields nothing.
    pub fn search(&self, prefix: &str) -> Vec<ProductId> {
        let mut node = &self.root;
        for ch in prefix.to_lowercase().chars() {
            match node.children.get(&ch) {
                Some(next) => node = next,
                None => return Vec::new(),
            }
        }
        let mut out = Vec::new();
        collect(node, &mut out);
        out
    }

    /// Number of indexed (name, id) pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn collect(node: &Node, out: &mut Vec<ProductId>) {
    out.extend(node.ids.iter().copied());
    for child in node.children.values() {
        collect(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(names: &[&str]) -> PrefixIndex {
        let mut idx = PrefixIndex::new();
        for (i, name) in names.iter().enumerate() {
            idx.insert(name, ProductId::new(i as u64 + 1));
        }
        idx
    }

    #[test]
    fn empty_prefix_matches_all() {
        let idx = index(&["apple", "banana", "apricot"]);
        let mut ids = idx.search("");
        ids.sort();
        assert_eq!(
            ids,
            vec![ProductId::new(1), ProductId::new(2), ProductId::new(3)]
        );
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        let idx = index(&["Apple iPhone Case", "USB-C Cable", "apple charger"]);
        let ids = idx.search("APPLE");
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&ProductId::new(1)));
        assert!(ids.contains(&ProductId::new(3)));
    }

    #[test]
    fn missing_path_yields_nothing() {
        let idx = index(&["apple", "banana"]);
        assert!(idx.search("cherry").is_empty());
        assert!(idx.search("applex").is_empty());
    }

    #[test]
    fn exact_name_is_its_own_prefix() {
        let idx = index(&["cable", "cable 2m"]);
        let ids = idx.search("cable");
        assert_eq!(ids, vec![ProductId::new(1), ProductId::new(2)]);
    }

    #[test]
    fn duplicate_names_keep_both_ids() {
        let idx = index(&["widget", "Widget"]);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.search("wid"), vec![ProductId::new(1), ProductId::new(2)]);
    }

    #[test]
    fn new_index_is_empty() {
        let idx = PrefixIndex::new();
        assert!(idx.is_empty());
        assert!(idx.search("").is_empty());
    }
}
