use std::num::NonZeroUsize;

use crate::common::config::BucketIndex;

/// Character-sum hash over string keys.
///
/// Every key hashes to the sum of its chars' Unicode scalar values. Position
/// carries no weight, so anagrams ("Amy", "May") always collide. No seed is
/// involved: the same key maps to the same bucket on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashFunction;

impl HashFunction {
    pub fn new() -> Self {
        Self
    }

    /// Returns the raw hash of `key`.
    ///
    /// Accumulation wraps on overflow, which only matters for keys far longer
    /// than any realistic name.
    pub fn get_hash(&self, key: &str) -> u64 {
        key.chars().fold(0u64, |sum, ch| sum.wrapping_add(u64::from(ch)))
    }

    /// Reduces the hash of `key` to a slot in `[0, bucket_count)`.
    pub fn bucket_index(&self, key: &str, bucket_count: NonZeroUsize) -> BucketIndex {
        // usize -> u64 is lossless on every supported target
        (self.get_hash(key) % bucket_count.get() as u64) as BucketIndex
    }
}
