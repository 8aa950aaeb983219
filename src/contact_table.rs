use std::fmt::{Debug, Display, Formatter};
use std::num::NonZeroUsize;

use itertools::Itertools;
use log::trace;

use crate::{
    contact::Contact,
    error::Result,
    hash::{CharSumHash, Hash},
    internal::hash_table::{entry::Entry, HashTable},
};

/// The number of buckets used by [`ContactTable::new`]
pub const DEFAULT_CAPACITY: usize = 10;

const DEFAULT_BUCKETS: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
    Some(buckets) => buckets,
    None => panic!("the default capacity must be non-zero"),
};

/// A table of contacts keyed by name. It has a fixed number of buckets,
/// and names that hash to the same bucket are chained in insertion order.
///
/// # Notes
///
/// The default hash is [`CharSumHash`], which puts anagrams in the same
/// bucket. [`Fnv1Hash`](crate::hash::Fnv1Hash) spreads names more evenly
pub struct ContactTable<H: Hash<String> + Hash<str> = CharSumHash> {
    contacts: HashTable<String, Contact, H>,
}

impl ContactTable<CharSumHash> {
    /// Creates an empty contact table with [`DEFAULT_CAPACITY`] buckets
    pub fn new() -> Self {
        Self {
            contacts: HashTable::new(DEFAULT_BUCKETS),
        }
    }

    /// Creates an empty contact table with a fixed number of buckets
    ///
    /// # Arguments
    ///
    /// `capacity`: The number of buckets, which must be non-zero
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_capacity_and_hash(capacity)
    }
}

impl<H: Hash<String> + Hash<str>> ContactTable<H> {
    /// Creates an empty contact table with a fixed number of buckets,
    /// hashing names with `H`
    ///
    /// # Arguments
    ///
    /// `capacity`: The number of buckets, which must be non-zero
    pub fn with_capacity_and_hash(capacity: usize) -> Result<Self> {
        Ok(Self {
            contacts: HashTable::with_bucket_count(capacity)?,
        })
    }

    /// Returns the number of buckets
    pub fn capacity(&self) -> usize {
        self.contacts.bucket_count()
    }

    /// Checks if a contact is stored under the given name
    ///
    /// # Arguments
    ///
    /// `key`: The name to search for
    pub fn contains(&self, key: &str) -> bool {
        self.contacts.contains_key(key)
    }

    /// Renders every bucket on its own line, either as
    /// `Index {i}: Empty` or as the bucket's contacts in chain order
    pub fn dump(&self) -> String {
        self.to_string()
    }

    /// Returns the bucket index a name hashes to
    ///
    /// # Arguments
    ///
    /// `key`: The name to hash
    pub fn hash(&self, key: &str) -> usize {
        self.contacts.bucket_index(key)
    }

    /// Stores a contact. If the name is already present its number is
    /// overwritten in place, otherwise a new contact is appended to the
    /// end of its bucket's chain
    ///
    /// # Arguments
    ///
    /// `key`: The contact's name
    ///
    /// `number`: The contact's phone number
    pub fn insert<N: Into<String>, P: Into<String>>(&mut self, key: N, number: P) {
        let key = key.into();
        let index = self.hash(&key);
        match self.contacts.entry(key) {
            Entry::Occupied(node) => {
                trace!("Updating contact '{}' in bucket {}", node.key(), index);
                node.value_mut().set_number(number);
            }
            Entry::Vacant(entry) => {
                trace!("Appending contact '{}' to bucket {}", entry.key(), index);
                let contact = Contact::new(entry.key().as_str(), number);
                entry.insert(contact);
            }
        }
    }

    /// Returns true if the table holds no contacts
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns an iterator over the contacts in bucket order, then chain
    /// order
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter().map(|(_, contact)| contact)
    }

    /// Returns the number of contacts in the table
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns the number of contacts chained at a bucket
    ///
    /// # Arguments
    ///
    /// `index`: The bucket index
    pub fn load(&self, index: usize) -> usize {
        self.contacts.chain_len(index)
    }

    /// Stores a whole contact under its name, returning the contact it
    /// replaced. A contact with a new name is appended to the end of its
    /// bucket's chain
    ///
    /// # Arguments
    ///
    /// `contact`: The contact to store
    pub fn replace(&mut self, contact: Contact) -> Option<Contact> {
        let key = contact.name().to_string();
        trace!("Storing contact '{}' in bucket {}", key, self.hash(&key));
        self.contacts.insert(key, contact)
    }

    /// Fetches the contact stored under a name
    ///
    /// # Arguments
    ///
    /// `key`: The name to search for
    pub fn search(&self, key: &str) -> Option<&Contact> {
        self.contacts.get(key).map(|(_, contact)| contact)
    }

    /// Fetches the contact stored under a name
    ///
    /// # Arguments
    ///
    /// `key`: The name to search for
    pub fn search_mut(&mut self, key: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(key)
    }
}

impl<H: Hash<String> + Hash<str>> Debug for ContactTable<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|contact| format!("{:?}: {:?}", contact.name(), contact.number()))
                .join(", ")
        )
    }
}

impl<H: Hash<String> + Hash<str>> Display for ContactTable<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, chain) in self.contacts.chains().enumerate() {
            let mut chain = chain.peekable();
            if chain.peek().is_none() {
                writeln!(f, "Index {}: Empty", index)?;
            } else {
                writeln!(
                    f,
                    "Index {}: {}",
                    index,
                    chain.map(|(_, contact)| format!("- {}", contact)).join(" ")
                )?;
            }
        }
        Ok(())
    }
}

impl Default for ContactTable<CharSumHash> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Into<String>, P: Into<String>, H: Hash<String> + Hash<str>> Extend<(N, P)>
    for ContactTable<H>
{
    fn extend<T: IntoIterator<Item = (N, P)>>(&mut self, iter: T) {
        iter.into_iter()
            .for_each(|(key, number)| self.insert(key, number));
    }
}

impl<N: Into<String>, P: Into<String>> FromIterator<(N, P)> for ContactTable<CharSumHash> {
    fn from_iter<T: IntoIterator<Item = (N, P)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use crate::contact::Contact;
    use crate::error::TableError;
    use crate::hash::Fnv1Hash;

    use super::{ContactTable, DEFAULT_CAPACITY};

    /// The contacts inserted by the walkthrough scenarios
    fn walkthrough() -> ContactTable {
        let mut table = ContactTable::with_capacity(10).unwrap();
        table.insert("John", "909-876-1234");
        table.insert("Rebecca", "111-555-0002");
        table.insert("Amy", "111-222-3333");
        table.insert("May", "222-333-1111");
        table.insert("Rebecca", "999-444-9999");
        table
    }

    #[test]
    fn default() {
        let table: ContactTable = ContactTable::default();
        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert!(table.is_empty());
        assert_eq!(ContactTable::new().capacity(), 10);
    }

    #[test]
    fn zero_capacity() {
        assert_eq!(
            ContactTable::with_capacity(0).err(),
            Some(TableError::InvalidCapacity(0))
        );
        assert!(ContactTable::<Fnv1Hash>::with_capacity_and_hash(0).is_err());
    }

    #[test]
    fn search() {
        let mut table = ContactTable::with_capacity(10).unwrap();
        table.insert("John", "909-876-1234");
        table.insert("Rebecca", "111-555-0002");

        let john = table.search("John").unwrap();
        assert_eq!(john.name(), "John");
        assert_eq!(john.number(), "909-876-1234");
        assert_eq!(john.to_string(), "John: 909-876-1234");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn update_in_place() {
        let table = walkthrough();
        let rebecca = table.search("Rebecca").unwrap();
        assert_eq!(rebecca.number(), "999-444-9999");
        assert_eq!(table.load(table.hash("Rebecca")), 1);
        assert_eq!(table.iter().filter(|c| c.name() == "Rebecca").count(), 1);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn collisions() {
        let table = walkthrough();
        assert_eq!(table.hash("Amy"), 5);
        assert_eq!(table.hash("May"), 5);
        assert_eq!(table.search("Amy").unwrap().number(), "111-222-3333");
        assert_eq!(table.search("May").unwrap().number(), "222-333-1111");
        assert_eq!(table.load(5), 2);
    }

    #[test]
    fn not_found() {
        let table = walkthrough();
        // shares bucket 5 with "Amy" and "May"
        assert_eq!(table.hash("Chris"), 5);
        assert!(table.search("Chris").is_none());
        assert!(!table.contains("Chris"));
        assert!(ContactTable::new().search("").is_none());
    }

    #[test]
    fn empty_key() {
        let mut table = ContactTable::new();
        assert_eq!(table.hash(""), 0);
        table.insert("", "");
        assert_eq!(table.search("").unwrap().to_string(), ": ");
        assert_eq!(table.load(0), 1);
    }

    #[test]
    fn dump() {
        assert_eq!(
            walkthrough().dump(),
            "Index 0: Empty\n\
             Index 1: Empty\n\
             Index 2: Empty\n\
             Index 3: Empty\n\
             Index 4: Empty\n\
             Index 5: - Amy: 111-222-3333 - May: 222-333-1111\n\
             Index 6: Empty\n\
             Index 7: - Rebecca: 999-444-9999\n\
             Index 8: Empty\n\
             Index 9: - John: 909-876-1234\n"
        );
        assert_eq!(
            ContactTable::with_capacity(2).unwrap().dump(),
            "Index 0: Empty\nIndex 1: Empty\n"
        );
    }

    #[test]
    fn dump_is_read_only() {
        let mut table = walkthrough();
        let before = table.dump();
        assert_eq!(table.dump(), before);
        assert_eq!(table.len(), 4);
        assert_eq!(table.search("May").unwrap().number(), "222-333-1111");

        table.insert("Chris", "555-555-5555");
        assert!(table.dump().contains(
            "Index 5: - Amy: 111-222-3333 - May: 222-333-1111 - Chris: 555-555-5555\n"
        ));
    }

    #[test]
    fn search_mut() {
        let mut table = walkthrough();
        if let Some(contact) = table.search_mut("John") {
            contact.set_number("000-000-0000");
        }
        assert_eq!(table.search("John").unwrap().number(), "000-000-0000");
        assert!(table.search_mut("Chris").is_none());
    }

    #[test]
    fn replace() {
        let mut table = walkthrough();
        assert_eq!(
            table.replace(Contact::new("May", "000")),
            Some(Contact::new("May", "222-333-1111"))
        );
        assert_eq!(table.replace(Contact::new("yaM", "111")), None);
        assert_eq!(table.load(5), 3);
        assert_eq!(table.search("May").unwrap().number(), "000");
        assert_eq!(table.search("yaM").unwrap().to_string(), "yaM: 111");
    }

    #[test]
    fn anagram_chain() {
        let mut table = ContactTable::with_capacity(7).unwrap();
        let names = "abcd"
            .chars()
            .permutations(4)
            .map(|chars| chars.into_iter().collect::<String>())
            .collect::<Vec<String>>();
        for (n, name) in names.iter().enumerate() {
            table.insert(name.as_str(), n.to_string());
        }

        let index = table.hash("abcd");
        assert_eq!(table.load(index), 24);
        assert_eq!(table.len(), 24);
        for (n, name) in names.iter().enumerate() {
            assert_eq!(table.hash(name), index);
            assert_eq!(table.search(name).unwrap().number(), n.to_string());
        }
        // chains keep insertion order
        itertools::assert_equal(table.iter().map(|c| c.name()), names.iter().map(String::as_str));
    }

    #[test]
    fn reinsert_keeps_one_entry() {
        let mut table = ContactTable::with_capacity(13).unwrap();
        for n in 0..200 {
            table.insert(format!("key{}", n), "old");
        }
        for n in 0..200 {
            table.insert(format!("key{}", n), format!("new{}", n));
        }

        assert_eq!(table.len(), 200);
        assert_eq!((0..13).map(|i| table.load(i)).sum::<usize>(), 200);
        for n in 0..200 {
            let key = format!("key{}", n);
            let contact = table.search(&key).unwrap();
            assert_eq!(contact.name(), key);
            assert_eq!(contact.number(), format!("new{}", n));
            assert_eq!(table.hash(&key), table.hash(&key));
        }
        for n in 200..300 {
            assert!(table.search(&format!("key{}", n)).is_none());
        }
    }

    #[test]
    fn fnv1_table() {
        let mut table = ContactTable::<Fnv1Hash>::with_capacity_and_hash(10).unwrap();
        table.insert("Amy", "111-222-3333");
        table.insert("May", "222-333-1111");
        assert_eq!(table.hash("Amy"), 4);
        assert_eq!(table.hash("May"), 6);
        assert_eq!(table.load(4), 1);
        assert_eq!(table.search("May").unwrap().number(), "222-333-1111");
    }

    #[test]
    fn from_iter() {
        let mut table: ContactTable = [("John", "1"), ("Amy", "2"), ("John", "3")]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.search("John").unwrap().number(), "3");

        table.extend([("May", "4")]);
        assert_eq!(
            format!("{:?}", table),
            r#"{"Amy": "2", "May": "4", "John": "3"}"#
        );
    }
}
