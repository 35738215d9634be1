use std::num::NonZeroUsize;

use contact_table::container::hash_function::HashFunction;

#[test]
fn test_hash_is_char_code_sum() {
    let hash_function = HashFunction::new();
    // t e s t _ k e y
    let expected: u64 = 116 + 101 + 115 + 116 + 95 + 107 + 101 + 121;
    assert_eq!(expected, 872);
    assert_eq!(hash_function.get_hash("test_key"), expected);
    assert_eq!(
        hash_function.bucket_index("test_key", NonZeroUsize::new(10).unwrap()),
        2
    );
}

#[test]
fn test_permutations_share_a_bucket() {
    let hash_function = HashFunction::new();
    let buckets = NonZeroUsize::new(13).unwrap();
    let expected = hash_function.bucket_index("abc", buckets);
    for key in ["acb", "bac", "bca", "cab", "cba"] {
        assert_eq!(hash_function.bucket_index(key, buckets), expected);
    }
}

#[test]
fn test_hash_is_deterministic_across_instances() {
    let a = HashFunction::new();
    let b = HashFunction::default();
    assert_eq!(a.get_hash("Rebecca"), b.get_hash("Rebecca"));
}
