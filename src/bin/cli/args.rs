//! CLI Argument Structures
//!
//! Command definitions and argument types used by the bandplan binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use bandplan_rs::io::reports::OutputFormat;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Band plan XML to firmware table converter
#[derive(Parser)]
#[command(name = "bandplan")]
#[command(version = VERSION)]
#[command(about = "Convert a band plan XML document into C initializer rows")]
#[command(long_about = "
Convert RangeEntry elements of a band plan XML document into rows of a C
initializer table for radio firmware. Rows are written to standard output;
logs go to standard error.

Common Usage:

  # Convert ./BandPlan.xml
  bandplan convert

  # Convert a specific file and keep HF bands
  bandplan convert --min-frequency 1000000 ./plans/BandPlan.xml

  # Write a starting configuration file
  bandplan init-config
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a band plan into firmware table rows
    Convert(ConvertArgs),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a bandplan configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Band plan XML document [default: BandPlan.xml, or `input` from the config]
    pub input: Option<PathBuf>,

    /// Configuration file (defaults to .bandplan.yml or .bandplan.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write rows to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "c")]
    pub format: FormatArg,

    /// Lowest accepted lower band edge, Hz
    #[arg(long)]
    pub min_frequency: Option<i64>,

    /// Highest accepted upper band edge, Hz
    #[arg(long)]
    pub max_frequency: Option<i64>,
}

/// Output formats selectable on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// C initializer rows
    C,
    /// JSON array
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::C => OutputFormat::C,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".bandplan.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(short, long, required = true)]
    pub config: PathBuf,
}
