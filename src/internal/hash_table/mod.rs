use std::borrow::Borrow;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

use duplicate::duplicate_item;
use log::{debug, warn};

use crate::{
    error::{Result, TableError},
    hash::Hash,
};

use self::{
    entry::{Entry, VacantEntry},
    iter::{Chain, Iter},
    node::{Link, Node},
};

pub mod entry;
pub mod iter;
pub mod node;

/// A base hashtable with a fixed number of buckets. Each bucket owns a
/// chain of nodes kept in insertion order. The table never rehashes
pub struct HashTable<K: Eq, V, H: Hash<K>> {
    buckets: Box<[Link<K, V>]>,
    element_count: usize,
    _phantom_hash: PhantomData<H>,
}

impl<K: Eq, V, H: Hash<K>> HashTable<K, V, H> {
    /// Creates an empty hashtable with a fixed number of buckets
    ///
    /// # Arguments
    ///
    /// `bucket_count`: The number of buckets
    pub fn new(bucket_count: NonZeroUsize) -> Self {
        debug!("Created hash table with {} buckets", bucket_count);
        Self {
            buckets: std::iter::repeat_with(|| None)
                .take(bucket_count.get())
                .collect(),
            element_count: 0,
            _phantom_hash: PhantomData,
        }
    }

    /// Creates an empty hashtable with a fixed number of buckets, failing
    /// if there would be no buckets to hash into
    ///
    /// # Arguments
    ///
    /// `bucket_count`: The number of buckets
    pub fn with_bucket_count(bucket_count: usize) -> Result<Self> {
        match NonZeroUsize::new(bucket_count) {
            Some(bucket_count) => Ok(Self::new(bucket_count)),
            None => {
                warn!("Cannot create hash table: bucket count must be non-zero");
                Err(TableError::InvalidCapacity(bucket_count))
            }
        }
    }

    /// Returns the number of buckets, which is fixed at construction
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the index of the bucket for the given key
    ///
    /// # Arguments
    ///
    /// `key`: The key, or a borrowed form of it
    pub fn bucket_index<Q: ?Sized>(&self, key: &Q) -> usize
    where
        H: Hash<Q>,
    {
        <H as Hash<Q>>::hash(key) % self.buckets.len()
    }

    /// Returns an iterator over the nodes chained at a bucket, or `None`
    /// if the index is out of range
    ///
    /// # Arguments
    ///
    /// `index`: The bucket index
    pub fn chain(&self, index: usize) -> Option<Chain<K, V>> {
        self.buckets.get(index).map(Chain::new)
    }

    /// Returns the number of nodes chained at a bucket. Out of range
    /// buckets hold nothing
    ///
    /// # Arguments
    ///
    /// `index`: The bucket index
    pub fn chain_len(&self, index: usize) -> usize {
        self.chain(index).map_or(0, |chain| chain.count())
    }

    /// Returns an iterator over every bucket's chain, in bucket order
    pub fn chains(&self) -> impl Iterator<Item = Chain<'_, K, V>> {
        self.buckets.iter().map(Chain::new)
    }

    /// Checks if the hash table contains the given key
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    pub fn contains_key<Q: Eq + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        H: Hash<Q>,
    {
        self.get(key).is_some()
    }

    /// Finds the node for a key. Otherwise, returns an entry that appends
    /// the key to the end of its bucket's chain without another lookup.
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    pub fn entry(&mut self, key: K) -> Entry<K, V> {
        let index = self.bucket_index(&key);
        let element_count = &mut self.element_count;
        let mut link = &mut self.buckets[index];
        while let Some(node) = link {
            if node.matches(&key) {
                return Entry::Occupied(&mut **node);
            }
            link = &mut node.next;
        }
        Entry::Vacant(VacantEntry {
            link,
            element_count,
            key,
        })
    }

    /// Fetches the associated value for a key
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    pub fn get<Q: Eq + ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        H: Hash<Q>,
    {
        let bucket = &self.buckets[self.bucket_index(key)];
        Self::find_in_chain(bucket, key).map(|node| (node.key(), node.value()))
    }

    /// Fetches the associated value for a key
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    pub fn get_mut<Q: Eq + ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        H: Hash<Q>,
    {
        let index = self.bucket_index(key);
        Self::find_in_chain_mut(&mut self.buckets[index], key).map(|node| node.value_mut())
    }

    /// Inserts the key-value pair into the hash table, returning the
    /// previous value if the key was already present
    ///
    /// # Arguments
    ///
    /// `key`: The key with which to insert the pair
    ///
    /// `value`: The associated value
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.entry(key) {
            Entry::Occupied(node) => Some(std::mem::replace(node.value_mut(), value)),
            Entry::Vacant(entry) => {
                entry.insert(value);
                None
            }
        }
    }

    /// Returns true if the hash table is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the hash table's key-value pairs in
    /// bucket order, then chain order
    pub fn iter(&self) -> Iter<K, V> {
        Iter::new(&self.buckets)
    }

    /// Returns the number of elements in the hash table
    pub fn len(&self) -> usize {
        self.element_count
    }

    /// Finds a key's node in a chain
    ///
    /// # Arguments
    ///
    /// `link`: The head of the chain
    ///
    /// `key`: The probing key
    #[duplicate_item(
        find_in_chain        reference(ty)    borrow(place);
        [find_in_chain]      [&'a ty]         [&place];
        [find_in_chain_mut]  [&'a mut ty]     [&mut place];
    )]
    fn find_in_chain<'a, Q: Eq + ?Sized>(
        mut link: reference([Link<K, V>]),
        key: &Q,
    ) -> Option<reference([Node<K, V>])>
    where
        K: Borrow<Q>,
    {
        while let Some(node) = link {
            if node.matches(key) {
                return Some(borrow([**node]));
            }
            link = borrow([node.next]);
        }
        None
    }
}

impl<K: Eq, V, H: Hash<K>> Drop for HashTable<K, V, H> {
    fn drop(&mut self) {
        // unlink one node at a time so long chains don't recurse
        for bucket in self.buckets.iter_mut() {
            let mut link = bucket.take();
            while let Some(mut node) = link {
                link = node.next.take();
            }
        }
    }
}
