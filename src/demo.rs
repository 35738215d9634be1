//! Scripted walk through the table: plain inserts, a lookup, an anagram
//! collision, a duplicate-key update and a miss.

use log::info;

use crate::common::result_writer::ResultWriter;
use crate::container::contact_table::ContactTable;

pub fn run_demo(table: &mut ContactTable, writer: &mut impl ResultWriter) {
    info!("Running demo against a table with {} buckets", table.bucket_count());

    writer.write_section("Empty Table");
    writer.write_dump(&table.dump());

    writer.write_section("Adding Contacts");
    table.insert("John", "909-876-1234");
    table.insert("Rebecca", "111-555-0002");
    writer.write_dump(&table.dump());

    writer.write_section("Search Test");
    writer.write_search("John", table.search("John"));

    writer.write_section("Collision Test");
    table.insert("Amy", "111-222-3333");
    table.insert("May", "222-333-1111");
    writer.write_dump(&table.dump());

    writer.write_section("Duplicate Key Test");
    table.insert("Rebecca", "999-444-9999");
    writer.write_dump(&table.dump());

    writer.write_section("Search Missing Contact");
    writer.write_search("Sam", table.search("Sam"));
}
