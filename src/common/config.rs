use std::num::NonZeroUsize;

use crate::common::exception::TableError;

/** Number of buckets a table gets when none is requested. */
pub const DEFAULT_BUCKET_COUNT: usize = 10;

pub(crate) const DEFAULT_BUCKETS: NonZeroUsize = match NonZeroUsize::new(DEFAULT_BUCKET_COUNT) {
    Some(bucket_count) => bucket_count,
    None => panic!("DEFAULT_BUCKET_COUNT must be positive"),
};

pub type BucketIndex = usize; // slot in the fixed bucket array
pub type EntryId = usize; // position of an entry in the table's arena

/// Construction-time settings for a contact table.
///
/// The bucket count is fixed for the lifetime of the table built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub bucket_count: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

impl TableConfig {
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Checks the bucket count is usable as a modulus.
    pub fn validate(&self) -> Result<NonZeroUsize, TableError> {
        NonZeroUsize::new(self.bucket_count)
            .ok_or(TableError::InvalidBucketCount(self.bucket_count))
    }
}
