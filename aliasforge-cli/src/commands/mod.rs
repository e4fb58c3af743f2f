//! CLI command implementations

use crate::error::CliResult;
use crate::output::OutputFormat;
use aliasforge_core::Style;
use clap::Subcommand;

pub mod generate;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate username candidates for one person
    Generate(generate::GenerateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available naming styles
    Styles,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Generate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Listing text for this subcommand
    pub fn render(self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Styles => {
                out.push_str("Available naming styles:\n");
                for style in Style::all() {
                    let window = style.length_window();
                    out.push_str(&format!(
                        "  {:<10} {} (length {window})\n",
                        style.code(),
                        style.description()
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                for (name, description) in OutputFormat::descriptions() {
                    out.push_str(&format!("  {name:<10} {description}\n"));
                }
            }
        }
        out
    }
}
