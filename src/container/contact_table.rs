use std::num::NonZeroUsize;

use crate::common::config::{BucketIndex, DEFAULT_BUCKETS, TableConfig};
use crate::common::exception::TableError;
use crate::container::chained_hash_table::ChainedHashTable;
use crate::container::hash_table::{BucketDump, HashTable, InsertOutcome, TableStats};
use crate::record::contact::Contact;

/// Phone book keyed by name.
///
/// Every insert stores a `Contact` whose name is the key itself.
#[derive(Debug)]
pub struct ContactTable {
    inner: ChainedHashTable<Contact>,
}

impl ContactTable {
    pub fn new(bucket_count: usize) -> Result<Self, TableError> {
        Ok(Self {
            inner: ChainedHashTable::try_new(bucket_count)?,
        })
    }

    pub fn from_config(config: &TableConfig) -> Result<Self, TableError> {
        Ok(Self::with_bucket_count(config.validate()?))
    }

    pub fn with_bucket_count(bucket_count: NonZeroUsize) -> Self {
        Self {
            inner: ChainedHashTable::new(bucket_count),
        }
    }

    /// A new, empty table with the same bucket count.
    pub fn empty_like(&self) -> Self {
        Self {
            inner: self.inner.empty_like(),
        }
    }

    /// Stores `number` under `key`; the last write for a key wins.
    pub fn insert(&mut self, key: &str, number: &str) -> InsertOutcome {
        self.inner.insert(key, Contact::new(key, number))
    }

    pub fn search(&self, key: &str) -> Option<&Contact> {
        self.inner.find(key)
    }

    pub fn dump(&self) -> Vec<BucketDump> {
        self.inner.dump()
    }

    pub fn bucket_of(&self, key: &str) -> BucketIndex {
        self.inner.bucket_of(key)
    }

    pub fn bucket_count(&self) -> usize {
        self.inner.bucket_count()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        self.inner.stats()
    }

    /// Contacts stored in `bucket`, head first.
    pub fn contacts_in(&self, bucket: BucketIndex) -> impl Iterator<Item = &Contact> {
        self.inner.chain(bucket).map(|(_, contact)| contact)
    }
}

impl Default for ContactTable {
    fn default() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKETS)
    }
}
