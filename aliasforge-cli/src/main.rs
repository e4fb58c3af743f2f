//! AliasForge command-line entry point

use aliasforge_cli::commands::Commands;
use clap::Parser;

/// Generate likely username candidates from a name, aliases and birth date
#[derive(Debug, Parser)]
#[command(name = "aliasforge", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
