use contact_table::container::contact_table::ContactTable;
use contact_table::container::hash_table::{BucketDump, InsertOutcome};
use contact_table::record::contact::Contact;

use crate::common::logger::init_test_logger;

fn table() -> ContactTable {
    init_test_logger();
    ContactTable::new(10).unwrap()
}

fn non_empty_buckets(dump: &[BucketDump]) -> Vec<(usize, &BucketDump)> {
    dump.iter()
        .enumerate()
        .filter(|(_, bucket)| !bucket.is_empty())
        .collect()
}

#[test]
fn test_two_contacts_in_separate_buckets() {
    let mut table = table();
    table.insert("John", "909-876-1234");
    table.insert("Rebecca", "111-555-0002");

    assert_eq!(
        table.search("John"),
        Some(&Contact::new("John", "909-876-1234"))
    );

    let dump = table.dump();
    assert_eq!(
        non_empty_buckets(&dump),
        vec![
            (
                7,
                &BucketDump::Chain(vec!["Rebecca: 111-555-0002".to_string()])
            ),
            (9, &BucketDump::Chain(vec!["John: 909-876-1234".to_string()])),
        ]
    );
}

#[test]
fn test_anagram_collision_keeps_both_records() {
    let mut table = table();
    assert_eq!(table.bucket_of("Amy"), table.bucket_of("May"));

    table.insert("Amy", "111-222-3333");
    table.insert("May", "222-333-1111");

    assert_eq!(table.search("Amy"), Some(&Contact::new("Amy", "111-222-3333")));
    assert_eq!(table.search("May"), Some(&Contact::new("May", "222-333-1111")));

    let chain: Vec<&Contact> = table.contacts_in(table.bucket_of("Amy")).collect();
    assert_eq!(chain.len(), 2);
}

#[test]
fn test_reinsert_updates_in_place() {
    let mut table = table();
    table.insert("John", "909-876-1234");
    table.insert("Rebecca", "111-555-0002");
    let outcome = table.insert("Rebecca", "999-444-9999");

    assert_eq!(outcome, InsertOutcome::Updated { bucket: 7 });
    assert_eq!(
        table.search("Rebecca"),
        Some(&Contact::new("Rebecca", "999-444-9999"))
    );
    let rebeccas = table
        .contacts_in(7)
        .filter(|contact| contact.name() == "Rebecca")
        .count();
    assert_eq!(rebeccas, 1);
}

#[test]
fn test_search_never_inserted() {
    let mut table = table();
    assert_eq!(table.search("Sam"), None);
    table.insert("John", "909-876-1234");
    assert_eq!(table.search("Sam"), None);
}

#[test]
fn test_fresh_table_dump_is_all_empty() {
    let table = table();
    let dump = table.dump();
    assert_eq!(dump.len(), 10);
    assert!(dump.iter().all(|bucket| bucket.to_string() == "Empty"));
}

#[test]
fn test_round_trip_with_last_write_wins() {
    let mut table = table();
    let mut expected = std::collections::HashMap::new();
    for i in 0..100 {
        let key = format!("user{}", i % 37);
        let number = format!("555-{:04}", i);
        table.insert(&key, &number);
        expected.insert(key, number);
    }

    assert_eq!(table.len(), expected.len());
    for (key, number) in &expected {
        let contact = table.search(key).unwrap();
        assert_eq!(contact.name(), key);
        assert_eq!(contact.number(), number);
    }

    let rendered: usize = table.dump().iter().map(|b| b.entries().len()).sum();
    assert_eq!(rendered, expected.len());
}

#[test]
fn test_independent_tables_do_not_interact() {
    let mut first = table();
    let second = table();
    first.insert("John", "909-876-1234");
    assert!(second.search("John").is_none());
    assert!(second.is_empty());
}
