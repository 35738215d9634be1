use contact_table::cli::CLI;
use contact_table::common::exception::CliError;

fn main() -> Result<(), CliError> {
    let mut cli = CLI::new()?;
    cli.run()
}
