use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "casemap")]
#[command(about = "Test-case inventory generator for JavaScript test suites", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan test sources and generate a test-case inventory
    Generate {
        /// Project root to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Configuration file (defaults to <path>/.casemap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (overrides the configured default)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Jest JSON result file to join pass/fail status from
        #[arg(long = "results", visible_alias = "jest-json")]
        results: Option<PathBuf>,
    },

    /// List discovered test cases without the full report columns
    List {
        /// Project root to scan
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Configuration file (defaults to <path>/.casemap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Listing format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ListFormat,
    },

    /// Initialize a .casemap.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Execute the configured test suites and summarize the outcome
    Run {
        /// Project root holding the configuration
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Configuration file (defaults to <path>/.casemap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Run only the named suite
        #[arg(long)]
        only: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Markdown,
    Json,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Terminal,
    Markdown,
}

impl From<OutputFormat> for crate::report::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Csv => crate::report::OutputFormat::Csv,
            OutputFormat::Markdown => crate::report::OutputFormat::Markdown,
            OutputFormat::Json => crate::report::OutputFormat::Json,
            OutputFormat::Terminal => crate::report::OutputFormat::Terminal,
        }
    }
}
