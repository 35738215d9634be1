use clap::Parser;
use colored::*;
use log::{debug, info};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::common::config::TableConfig;
use crate::common::exception::CliError;
use crate::common::logger::initialize_logger;
use crate::common::result_writer::{CliResultWriter, ResultWriter};
use crate::container::contact_table::ContactTable;
use crate::demo::run_demo;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of buckets in the table
    #[arg(short, long)]
    pub buckets: Option<usize>,

    /// Run the scripted demo and exit
    #[arg(long)]
    pub demo: bool,
}

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert { name: String, number: String },
    Search { name: String },
    Dump,
    Stats,
    Demo,
    Help,
    Exit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CliError> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            return Err(CliError::UnknownCommand(String::new()));
        };
        let args: Vec<&str> = parts.collect();

        match verb.to_lowercase().as_str() {
            // Names may span several words; the number is always the last one.
            "insert" => match args.split_last() {
                Some((number, name)) if !name.is_empty() => Ok(Command::Insert {
                    name: name.join(" "),
                    number: number.to_string(),
                }),
                _ => Err(CliError::MissingArgument {
                    command: "insert",
                    expected: "<name> <number>",
                }),
            },
            "search" if !args.is_empty() => Ok(Command::Search {
                name: args.join(" "),
            }),
            "search" => Err(CliError::MissingArgument {
                command: "search",
                expected: "<name>",
            }),
            "dump" | "print" => Ok(Command::Dump),
            "stats" => Ok(Command::Stats),
            "demo" => Ok(Command::Demo),
            "help" => Ok(Command::Help),
            "exit" | "quit" => Ok(Command::Exit),
            other => Err(CliError::UnknownCommand(other.to_string())),
        }
    }
}

pub struct CLI {
    table: ContactTable,
    demo_only: bool,
}

impl CLI {
    pub fn new() -> Result<Self, CliError> {
        initialize_logger();
        let args = Args::parse();
        Self::from_args(args)
    }

    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let config = match args.buckets {
            Some(buckets) => TableConfig::default().with_bucket_count(buckets),
            None => TableConfig::default(),
        };
        debug!("Table config: {:?}", config);

        Ok(Self {
            table: ContactTable::from_config(&config)?,
            demo_only: args.demo,
        })
    }

    pub fn table(&self) -> &ContactTable {
        &self.table
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        let mut writer = CliResultWriter::new();

        if self.demo_only {
            run_demo(&mut self.table, &mut writer);
            return Ok(());
        }

        println!("{}", "\nContact Table".blue().bold());
        println!(
            "{} buckets. Type 'help' for commands\n",
            self.table.bucket_count()
        );

        let mut rl = DefaultEditor::new()?;
        loop {
            match rl.readline("contacts> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line)?;

                    match Command::parse(line) {
                        Ok(Command::Exit) => {
                            println!("Bye");
                            break;
                        }
                        Ok(command) => self.execute(command, &mut writer),
                        Err(e) => println!("{}", format!("Error: {}", e).red()),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        info!("Session ended with {} contacts", self.table.len());
        Ok(())
    }

    pub fn execute(&mut self, command: Command, writer: &mut impl ResultWriter) {
        match command {
            Command::Insert { name, number } => {
                let outcome = self.table.insert(&name, &number);
                let verb = if outcome.is_update() { "Updated" } else { "Inserted" };
                writer.write_message(&format!(
                    "{} {} in bucket {}",
                    verb,
                    name,
                    outcome.bucket()
                ));
            }
            Command::Search { name } => writer.write_search(&name, self.table.search(&name)),
            Command::Dump => writer.write_dump(&self.table.dump()),
            Command::Stats => writer.write_stats(&self.table.stats()),
            Command::Demo => {
                // The script expects an empty table; never run it on the session's contacts.
                let mut scratch = self.table.empty_like();
                run_demo(&mut scratch, writer);
            }
            Command::Help => display_help(writer),
            Command::Exit => {}
        }
    }
}

fn display_help(writer: &mut impl ResultWriter) {
    writer.write_section("Available Commands");
    writer.write_message("  insert <name> <number>  - Add or update a contact");
    writer.write_message("  search <name>           - Look up a contact");
    writer.write_message("  dump                    - Show every bucket and its chain");
    writer.write_message("  stats                   - Show occupancy and chain lengths");
    writer.write_message("  demo                    - Run the scripted demo");
    writer.write_message("  help                    - Show this help message");
    writer.write_message("  exit                    - Leave");
}
