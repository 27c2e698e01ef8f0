use anyhow::Result;
use todos::commands::Cli;
use todos::libs::logging;

fn main() -> Result<()> {
    logging::init();
    Cli::menu()
}
