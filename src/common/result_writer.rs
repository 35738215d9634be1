use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

use crate::container::hash_table::{BucketDump, TableStats};
use crate::record::contact::Contact;

/// Sink for everything the demo and the REPL want to show the user.
pub trait ResultWriter {
    fn write_section(&mut self, title: &str);
    fn write_dump(&mut self, dump: &[BucketDump]);
    fn write_search(&mut self, key: &str, result: Option<&Contact>);
    fn write_stats(&mut self, stats: &TableStats);
    fn write_message(&mut self, message: &str);
}

/// Terminal writer: box-drawn tables and coloured headings.
#[derive(Default)]
pub struct CliResultWriter;

impl CliResultWriter {
    pub fn new() -> Self {
        Self
    }

    fn new_table(headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(
            headers
                .iter()
                .map(|h| Cell::new(&h.bold().to_string()))
                .collect(),
        ));
        table
    }
}

impl ResultWriter for CliResultWriter {
    fn write_section(&mut self, title: &str) {
        println!("\n{}", format!("--- {} ---", title).blue().bold());
    }

    fn write_dump(&mut self, dump: &[BucketDump]) {
        let mut table = Self::new_table(&["Bucket", "Chain"]);
        for (bucket, description) in dump.iter().enumerate() {
            let rendered = match description {
                BucketDump::Empty => description.to_string().dimmed().to_string(),
                BucketDump::Chain(_) => description.to_string(),
            };
            table.add_row(Row::new(vec![
                Cell::new(&bucket.to_string()),
                Cell::new(&rendered),
            ]));
        }
        table.printstd();
    }

    fn write_search(&mut self, key: &str, result: Option<&Contact>) {
        match result {
            Some(contact) => println!("Search result: {}", contact.to_string().green()),
            None => println!("Search result: {}", format!("{} not found", key).yellow()),
        }
    }

    fn write_stats(&mut self, stats: &TableStats) {
        let mut table = Self::new_table(&["Statistic", "Value"]);
        let rows = [
            ("Buckets", stats.bucket_count.to_string()),
            ("Entries", stats.entries.to_string()),
            ("Occupied buckets", stats.occupied_buckets.to_string()),
            ("Longest chain", stats.longest_chain.to_string()),
            ("Load factor", format!("{:.2}", stats.load_factor())),
        ];
        for (name, value) in rows {
            table.add_row(Row::new(vec![Cell::new(name), Cell::new(&value)]));
        }
        table.printstd();
    }

    fn write_message(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Collects plain, uncoloured lines instead of printing them.
#[derive(Debug, Default)]
pub struct BufferedResultWriter {
    lines: Vec<String>,
}

impl BufferedResultWriter {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl ResultWriter for BufferedResultWriter {
    fn write_section(&mut self, title: &str) {
        self.lines.push(format!("--- {} ---", title));
    }

    fn write_dump(&mut self, dump: &[BucketDump]) {
        self.lines
            .extend(dump.iter().map(|description| description.to_string()));
    }

    fn write_search(&mut self, key: &str, result: Option<&Contact>) {
        match result {
            Some(contact) => self.lines.push(format!("Search result: {}", contact)),
            None => self.lines.push(format!("Search result: {} not found", key)),
        }
    }

    fn write_stats(&mut self, stats: &TableStats) {
        self.lines.push(format!(
            "buckets={} entries={} occupied={} longest_chain={} load_factor={:.2}",
            stats.bucket_count,
            stats.entries,
            stats.occupied_buckets,
            stats.longest_chain,
            stats.load_factor()
        ));
    }

    fn write_message(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
