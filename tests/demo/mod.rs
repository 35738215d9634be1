use contact_table::common::result_writer::BufferedResultWriter;
use contact_table::container::contact_table::ContactTable;
use contact_table::demo::run_demo;

use crate::common::logger::init_test_logger;

#[test]
fn test_demo_leaves_expected_table() {
    init_test_logger();
    let mut table = ContactTable::default();
    let mut writer = BufferedResultWriter::new();
    run_demo(&mut table, &mut writer);

    assert_eq!(table.len(), 4);
    assert_eq!(
        table.search("Rebecca").map(|c| c.number()),
        Some("999-444-9999")
    );
    assert!(table.search("Sam").is_none());

    let stats = table.stats();
    assert_eq!(stats.occupied_buckets, 3);
    assert_eq!(stats.longest_chain, 2);
}

#[test]
fn test_demo_on_single_bucket_table() {
    init_test_logger();
    let mut table = ContactTable::new(1).unwrap();
    let mut writer = BufferedResultWriter::new();
    run_demo(&mut table, &mut writer);

    let lines = writer.into_lines();
    assert!(lines.contains(
        &"- John: 909-876-1234 - Rebecca: 999-444-9999 - Amy: 111-222-3333 - May: 222-333-1111"
            .to_string()
    ));
}
