//! Generate command implementation

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{write_usernames, OutputFormat};
use crate::prompt;
use aliasforge_core::{Config, Generator, NameProfile, Style, Wordlist};
use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// First name (Western) or given name(s) (Chinese), e.g. "Tai Man"
    #[arg(long, value_name = "NAME", required = true)]
    pub first: String,

    /// Surname
    #[arg(long, value_name = "NAME", required = true)]
    pub last: String,

    /// Middle name (Western style only)
    #[arg(long, value_name = "NAME")]
    pub middle: Option<String>,

    /// English alias or nickname
    #[arg(long, value_name = "NAME")]
    pub alias: Option<String>,

    /// Second alias
    #[arg(long, value_name = "NAME")]
    pub alias2: Option<String>,

    /// Year of birth (YYYY); overrides the year of --dob
    #[arg(long, value_name = "YYYY")]
    pub year: Option<String>,

    /// Date of birth (YYYY/MM/DD or YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub dob: Option<String>,

    /// Naming style; prompted for when neither given here nor in the config file
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Emit every pattern variant instead of the curated default set
    #[arg(long)]
    pub full: bool,

    /// Shortest accepted username
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Longest accepted username
    #[arg(long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write the word list to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not print the word list to stdout
    #[arg(long)]
    pub no_print: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress the run summary and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported naming styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StyleArg {
    /// Surname first, given name(s) plus English alias
    Chinese,
    /// Given name first, optional middle name and nickname
    Western,
}

impl From<StyleArg> for Style {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Chinese => Style::Chinese,
            StyleArg::Western => Style::Western,
        }
    }
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting username generation");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let style = self.resolve_style(&file_config)?;
        let config = self.build_config(&file_config, style)?;
        let profile = self.profile();

        let wordlist = Generator::with_config(config)?
            .generate(&profile)
            .map_err(|e| match e {
                aliasforge_core::Error::Validation(err) => CliError::InvalidInput(err.to_string()),
                other => CliError::ConfigError(other.to_string()),
            })?;

        if let Some(warning) = wordlist.empty_warning() {
            log::warn!("{warning}");
        }

        let format = self
            .format
            .or(file_config.output.format)
            .unwrap_or_default();
        let no_print = self.no_print || file_config.output.no_print;

        if !no_print {
            let mut formatter = format.formatter(io::stdout());
            write_usernames(formatter.as_mut(), wordlist.usernames())?;
        }

        if let Some(path) = &self.output {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut formatter = format.formatter(BufWriter::new(file));
            write_usernames(formatter.as_mut(), wordlist.usernames())
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        if !self.quiet {
            eprint!("{}", self.summary(&wordlist));
        }

        Ok(())
    }

    /// Command line first, then the config file, then ask
    fn resolve_style(&self, file_config: &CliConfig) -> CliResult<Style> {
        if let Some(style) = self.style {
            return Ok(style.into());
        }
        if let Some(style) = file_config.style()? {
            return Ok(style);
        }

        let stdin = io::stdin();
        prompt::prompt_style(&mut stdin.lock(), &mut io::stderr())
    }

    /// Merge flags over config file values over style defaults
    fn build_config(&self, file_config: &CliConfig, style: Style) -> CliResult<Config> {
        let generation = &file_config.generation;
        let mut builder = Config::builder()
            .style(style.code())?
            .full(self.full || generation.full);

        if let Some(min) = self.min_length.or(generation.min_length) {
            builder = builder.min_length(min);
        }
        if let Some(max) = self.max_length.or(generation.max_length) {
            builder = builder.max_length(max);
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    fn profile(&self) -> NameProfile {
        let mut builder = NameProfile::builder().first(&self.first).last(&self.last);
        if let Some(middle) = &self.middle {
            builder = builder.middle(middle);
        }
        if let Some(alias) = &self.alias {
            builder = builder.alias(alias);
        }
        if let Some(alias2) = &self.alias2 {
            builder = builder.alias2(alias2);
        }
        if let Some(year) = &self.year {
            builder = builder.year(year);
        }
        if let Some(dob) = &self.dob {
            builder = builder.dob(dob);
        }
        builder.build()
    }

    /// Run summary shown on stderr
    fn summary(&self, wordlist: &Wordlist) -> String {
        let name = match wordlist.style() {
            Style::Chinese => format!("{} {}", self.last, self.first),
            Style::Western => [Some(&self.first), self.middle.as_ref(), Some(&self.last)]
                .into_iter()
                .flatten()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" "),
        };

        let mut lines = vec![
            format!("Style:    {}", wordlist.style()),
            format!("Name:     {name}"),
        ];
        for (label, value) in [
            ("Alias:   ", &self.alias),
            ("Alias 2: ", &self.alias2),
            ("Year:    ", &self.year),
            ("DOB:     ", &self.dob),
        ] {
            if let Some(value) = value {
                lines.push(format!("{label} {value}"));
            }
        }
        lines.push(format!("Mode:     {}", wordlist.mode()));
        lines.push(format!("Length:   {}", wordlist.window()));
        lines.push(format!("Total:    {} usernames", wordlist.len()));
        if let Some(path) = &self.output {
            lines.push(format!("Saved to: {}", path.display()));
        }

        let mut summary = lines.join("\n");
        summary.push('\n');
        summary
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running in-process
            if let Err(e) = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init()
            {
                log::debug!("Keeping the existing logger: {e}");
            }
        }
    }
}
