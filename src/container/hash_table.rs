use std::fmt;

use crate::common::config::BucketIndex;

/// Operations shared by the string-keyed tables in this crate.
pub trait HashTable<V> {
    /// Inserts `value` under `key`, replacing the value of an existing key.
    ///
    /// # Returns
    ///
    /// Whether a new entry was created or an existing one was updated, and
    /// which bucket it lives in.
    fn insert(&mut self, key: &str, value: V) -> InsertOutcome;

    /// Performs a point query on the table.
    ///
    /// # Returns
    ///
    /// The value stored under `key`, or `None` when the key was never inserted.
    fn find(&self, key: &str) -> Option<&V>;

    fn bucket_count(&self) -> usize;

    /// Number of distinct keys stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What an insert did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new entry was appended to the bucket's chain.
    Inserted { bucket: BucketIndex },
    /// The key was already present and its value was replaced.
    Updated { bucket: BucketIndex },
}

impl InsertOutcome {
    pub fn bucket(&self) -> BucketIndex {
        match self {
            InsertOutcome::Inserted { bucket } | InsertOutcome::Updated { bucket } => *bucket,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, InsertOutcome::Updated { .. })
    }
}

/// Description of one bucket as produced by a dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketDump {
    Empty,
    /// Renderings of the chain's values, head first.
    Chain(Vec<String>),
}

impl BucketDump {
    pub fn is_empty(&self) -> bool {
        matches!(self, BucketDump::Empty)
    }

    pub fn entries(&self) -> &[String] {
        match self {
            BucketDump::Empty => &[],
            BucketDump::Chain(entries) => entries,
        }
    }
}

impl fmt::Display for BucketDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketDump::Empty => write!(f, "Empty"),
            BucketDump::Chain(entries) => {
                for (i, rendered) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "- {}", rendered)?;
                }
                Ok(())
            }
        }
    }
}

/// Point-in-time shape of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub bucket_count: usize,
    pub entries: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
}

impl TableStats {
    /// Entries per bucket. Reported only; the table never resizes.
    pub fn load_factor(&self) -> f64 {
        self.entries as f64 / self.bucket_count as f64
    }
}
