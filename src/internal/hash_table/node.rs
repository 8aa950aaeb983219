use std::borrow::Borrow;

/// An owned link to the next node in a chain
pub type Link<K, V> = Option<Box<Node<K, V>>>;

/// A node in a hashtable chain
pub struct Node<K: Eq, V> {
    pub key: K,
    pub val: V,
    pub next: Link<K, V>,
}

impl<K: Eq, V> Node<K, V> {
    /// Creates an unlinked node from a key/value
    ///
    /// # Arguments
    ///
    /// `key`: The key
    ///
    /// `val`: The value
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            val: value,
            next: None,
        }
    }

    /// Returns the key of the node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of the node
    pub fn value(&self) -> &V {
        &self.val
    }

    /// Returns the value of the node
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.val
    }

    /// Returns true if the probing key matches the node
    ///
    /// # Arguments
    ///
    /// `key`: The probing key, or a borrowed form of it
    pub fn matches<Q: Eq + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.key.borrow() == key
    }

    /// Returns the next node following this node
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }
}
