//! # Separate-Chaining Hash Table
//!
//! A fixed-bucket hash table keyed by strings. Keys that land in the same
//! bucket are kept in a singly linked chain. The bucket count is chosen at
//! construction and never changes: there is no resizing and no removal.
//!
//! ## Architecture
//!
//! ```text
//!   buckets: Box<[Option<EntryId>]>        entries: Vec<Entry<V>> (append-only arena)
//!   (length fixed at creation)
//!
//!     [0] None
//!     ...
//!     [5] Some(2) ───────────────────────► #2 { key: "Amy", next: Some(3) }
//!     ...                                                          │
//!     [7] Some(1) ──────────► #1 { key: "Rebecca", next: None }    │
//!     [8] None                                                     ▼
//!     [9] Some(0) ──► #0 { key: "John", next: None }   #3 { key: "May", next: None }
//! ```
//!
//! Entries are only ever appended to the arena and linked at the tail of
//! their chain, so every chain is finite and acyclic, and an entry belongs
//! to exactly one chain.
//!
//! ## Operations
//!
//! | Method          | Complexity     | Description                               |
//! |-----------------|----------------|-------------------------------------------|
//! | `insert(k, v)`  | O(chain)       | Update on match, else append at the tail  |
//! | `find(&k)`      | O(chain)       | First entry in the chain with key `k`     |
//! | `chain(i)`      | O(1) + lazy    | Iterate bucket `i` from head to tail      |
//! | `dump()`        | O(n + buckets) | One description per bucket, index order   |
//! | `stats()`       | O(n + buckets) | Occupancy and longest chain               |
//!
//! ## Thread Safety
//!
//! None. Callers sharing a table across threads must wrap the whole table
//! in a single lock held for the duration of each operation.

use std::fmt::Display;
use std::num::NonZeroUsize;

use log::{debug, info, trace};

use crate::common::config::{BucketIndex, EntryId};
use crate::common::exception::TableError;
use crate::container::hash_function::HashFunction;
use crate::container::hash_table::{BucketDump, HashTable, InsertOutcome, TableStats};

#[derive(Debug)]
struct Entry<V> {
    key: String,
    value: V,
    next: Option<EntryId>,
}

#[derive(Debug)]
pub struct ChainedHashTable<V> {
    bucket_count: NonZeroUsize,
    buckets: Box<[Option<EntryId>]>,
    entries: Vec<Entry<V>>,
    hash_fn: HashFunction,
}

impl<V> ChainedHashTable<V> {
    /// Creates an empty table with `bucket_count` buckets.
    pub fn new(bucket_count: NonZeroUsize) -> Self {
        info!("Creating chained hash table with {} buckets", bucket_count);
        Self {
            bucket_count,
            buckets: vec![None; bucket_count.get()].into_boxed_slice(),
            entries: Vec::new(),
            hash_fn: HashFunction::new(),
        }
    }

    /// Creates an empty table, rejecting a bucket count of zero.
    pub fn try_new(bucket_count: usize) -> Result<Self, TableError> {
        let bucket_count =
            NonZeroUsize::new(bucket_count).ok_or(TableError::InvalidBucketCount(bucket_count))?;
        Ok(Self::new(bucket_count))
    }

    pub fn empty_like(&self) -> Self {
        Self::new(self.bucket_count)
    }

    /// Bucket that `key` hashes to in this table.
    pub fn bucket_of(&self, key: &str) -> BucketIndex {
        self.hash_fn.bucket_index(key, self.bucket_count)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Iterates the chain of `bucket` from head to tail.
    ///
    /// A bucket index outside the table yields an empty iterator.
    pub fn chain(&self, bucket: BucketIndex) -> ChainIter<'_, V> {
        ChainIter {
            entries: &self.entries,
            next: self.buckets.get(bucket).copied().flatten(),
        }
    }

    pub fn stats(&self) -> TableStats {
        let mut occupied_buckets = 0;
        let mut longest_chain = 0;
        for bucket in 0..self.buckets.len() {
            let chain_len = self.chain(bucket).count();
            if chain_len > 0 {
                occupied_buckets += 1;
            }
            longest_chain = longest_chain.max(chain_len);
        }

        TableStats {
            bucket_count: self.bucket_count.get(),
            entries: self.entries.len(),
            occupied_buckets,
            longest_chain,
        }
    }

    fn push_entry(&mut self, key: &str, value: V) -> EntryId {
        let id = self.entries.len();
        self.entries.push(Entry {
            key: key.to_string(),
            value,
            next: None,
        });
        id
    }
}

impl<V: Display> ChainedHashTable<V> {
    /// Describes every bucket in index order.
    ///
    /// Empty buckets come back as [`BucketDump::Empty`]; occupied ones carry
    /// the `Display` rendering of each value from head to tail.
    pub fn dump(&self) -> Vec<BucketDump> {
        (0..self.buckets.len())
            .map(|bucket| {
                let rendered: Vec<String> = self
                    .chain(bucket)
                    .map(|(_, value)| value.to_string())
                    .collect();
                if rendered.is_empty() {
                    BucketDump::Empty
                } else {
                    BucketDump::Chain(rendered)
                }
            })
            .collect()
    }
}

impl<V> HashTable<V> for ChainedHashTable<V> {
    fn insert(&mut self, key: &str, value: V) -> InsertOutcome {
        let bucket = self.bucket_of(key);

        let Some(head) = self.buckets[bucket] else {
            let id = self.push_entry(key, value);
            self.buckets[bucket] = Some(id);
            debug!("Inserted '{}' as head of bucket {}", key, bucket);
            return InsertOutcome::Inserted { bucket };
        };

        // A matching key anywhere in the chain wins over appending.
        let mut current = head;
        loop {
            let entry = &mut self.entries[current];
            if entry.key == key {
                entry.value = value;
                debug!("Updated '{}' in bucket {}", key, bucket);
                return InsertOutcome::Updated { bucket };
            }
            match entry.next {
                Some(next) => {
                    trace!("Bucket {}: '{}' != '{}', advancing", bucket, entry.key, key);
                    current = next;
                }
                None => break,
            }
        }

        let id = self.push_entry(key, value);
        self.entries[current].next = Some(id);
        debug!("Appended '{}' to chain of bucket {} (collision)", key, bucket);
        InsertOutcome::Inserted { bucket }
    }

    fn find(&self, key: &str) -> Option<&V> {
        let bucket = self.bucket_of(key);
        let found = self
            .chain(bucket)
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, value)| value);
        if found.is_none() {
            trace!("'{}' not found in bucket {}", key, bucket);
        }
        found
    }

    fn bucket_count(&self) -> usize {
        self.bucket_count.get()
    }

    fn len(&self) -> usize {
        // entries are never removed, and each key has exactly one entry
        self.entries.len()
    }
}

/// Iterator over one bucket's chain, yielding `(key, value)` head first.
pub struct ChainIter<'a, V> {
    entries: &'a [Entry<V>],
    next: Option<EntryId>,
}

impl<'a, V> Iterator for ChainIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = &self.entries[self.next?];
        self.next = entry.next;
        Some((entry.key.as_str(), &entry.value))
    }
}
