use crate::internal::hash_table::node::{Link, Node};

/// A vacant node - one that has not been inserted yet. It holds the
/// empty link at the end of the key's chain.
pub struct VacantEntry<'a, K: Eq, V> {
    pub(crate) link: &'a mut Link<K, V>,
    pub(crate) element_count: &'a mut usize,
    pub(crate) key: K,
}

impl<'a, K: Eq, V> VacantEntry<'a, K, V> {
    /// Appends the key-value pair to the end of the chain.
    ///
    /// # Arguments
    ///
    /// `value`: The value to store.
    pub fn insert(self, value: V) -> &'a mut V {
        *self.element_count += 1;
        &mut self.link.insert(Box::new(Node::new(self.key, value))).val
    }

    /// Returns the key that would be inserted.
    pub fn key(&self) -> &K {
        &self.key
    }
}

/// An entry in a hash table.
pub enum Entry<'a, K: Eq, V> {
    /// There was a node found already for the key.
    Occupied(&'a mut Node<K, V>),
    /// There was not a node already present for the key.
    Vacant(VacantEntry<'a, K, V>),
}
