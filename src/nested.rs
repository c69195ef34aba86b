use fnv::FnvHashMap;

/// Tree-shaped string-keyed mapping in the spirit of a nested default-dict,
/// with one important difference: a plain read never inserts anything.
/// Vivification of missing subtrees only happens through the explicit
/// [`NestedMap::subtree`] and [`NestedMap::insert`] methods, so the mutation
/// is visible at the call site and testable.
///
/// Every node can hold a value and children at the same time.
#[derive(Debug)]
pub struct NestedMap<V> {
    value: Option<V>,
    children: FnvHashMap<String, NestedMap<V>>,
}

impl<V> NestedMap<V> {

    pub fn new() -> Self {
        NestedMap {
            value: None,
            children: FnvHashMap::default(),
        }
    }

    /// The child node under `key`, inserting an empty one first when it is
    /// missing. This is the explicit form of auto-vivification.
    pub fn subtree(&mut self, key: &str) -> &mut NestedMap<V> {
        self.children
            .entry(key.to_owned())
            .or_insert_with(NestedMap::new)
    }

    /// Stores `value` at the node addressed by `path`, vivifying every
    /// intermediate node. An empty path addresses this node itself.
    pub fn insert(&mut self, path: &[&str], value: V) {
        let mut node = self;

        for key in path {
            node = node.subtree(key);
        }

        node.value = Some(value);
    }

    /// The value at `path`, without inserting anything along the way.
    pub fn get(&self, path: &[&str]) -> Option<&V> {
        let mut node = self;

        for key in path {
            node = node.children.get(*key)?;
        }

        node.value.as_ref()
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: V) {
        self.value = Some(value);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }
}

impl<V> Default for NestedMap<V> {
    fn default() -> Self {
        NestedMap::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn insert_vivifies_intermediate_nodes() {
        let mut map: NestedMap<u32> = NestedMap::new();

        map.insert(&["a", "b"], 1);
        map.insert(&["a", "c", "d"], 2);
        map.subtree("b");

        assert_eq!(map.get(&["a", "b"]), Some(&1));
        assert_eq!(map.get(&["a", "c", "d"]), Some(&2));
        assert!(map.contains_key("b"));
        assert!(map.subtree("b").is_empty());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn reads_never_insert() {
        let mut map: NestedMap<u32> = NestedMap::new();
        map.insert(&["a"], 1);

        assert_eq!(map.get(&["a", "b", "c"]), None);
        assert_eq!(map.get(&["z"]), None);

        // the failed lookups must not have grown the tree
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("z"));
    }

    #[test]
    fn nodes_hold_values_and_children_at_once() {
        let mut map: NestedMap<&str> = NestedMap::new();

        map.insert(&["a"], "branch");
        map.insert(&["a", "b"], "leaf");

        assert_eq!(map.get(&["a"]), Some(&"branch"));
        assert_eq!(map.get(&["a", "b"]), Some(&"leaf"));

        let keys: Vec<&str> = map.subtree("a").keys().collect();
        assert_eq!(keys, vec!["b"]);
    }
}
