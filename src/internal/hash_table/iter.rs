use super::node::{Link, Node};

/// An iterator over the key-value pairs chained at a single bucket,
/// in insertion order
pub struct Chain<'a, K: Eq, V> {
    node: Option<&'a Node<K, V>>,
}

impl<'a, K: Eq, V> Chain<'a, K, V> {
    /// Creates an iterator starting at a chain's head
    ///
    /// # Arguments
    ///
    /// `head`: The bucket's link to its first node
    pub(crate) fn new(head: &'a Link<K, V>) -> Self {
        Self {
            node: head.as_deref(),
        }
    }
}

impl<'a, K: Eq, V> Iterator for Chain<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next();
        Some((node.key(), node.value()))
    }
}

/// An iterator that produces key-value pairs in a hash table. Buckets
/// are visited in index order and each chain in insertion order
pub struct Iter<'a, K: Eq, V> {
    bucket_iter: std::slice::Iter<'a, Link<K, V>>,
    chain: Chain<'a, K, V>,
}

impl<'a, K: Eq, V> Iter<'a, K, V> {
    /// Creates a new hash table iterator from the
    /// hash table's buckets
    ///
    /// # Arguments
    ///
    /// `buckets`: The slice of buckets owned by the
    /// hash table
    pub(crate) fn new(buckets: &'a [Link<K, V>]) -> Self {
        Self {
            bucket_iter: buckets.iter(),
            chain: Chain { node: None },
        }
    }
}

impl<'a, K: Eq, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.chain.next() {
                return Some(pair);
            }
            // move on to the next bucket, stopping after the last
            self.chain = Chain::new(self.bucket_iter.next()?);
        }
    }
}
