use clap::{Args, Parser, Subcommand};
use grantham::core::config::MatrixFormat;
use grantham::core::models::amino_acid::AminoAcid;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "grantham",
    version,
    about = "Grantham Score Calculator - compute the Grantham distance between two amino acids.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S display.classify=true
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the Grantham score for a wildtype -> mutant substitution.
    Score(ScoreArgs),
    /// List the 20 amino acids that can be selected.
    Codes,
    /// Print the full symmetric Grantham matrix.
    Matrix(MatrixArgs),
    /// Show version and environment information for troubleshooting.
    Env,
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Wildtype amino acid (e.g. Ala, ALA or A). Falls back to `default-wildtype`.
    #[arg(value_name = "WILDTYPE")]
    pub wildtype: Option<AminoAcid>,

    /// Mutant amino acid (e.g. Cys, CYS or C). Falls back to `default-mutant`.
    #[arg(value_name = "MUTANT")]
    pub mutant: Option<AminoAcid>,

    /// Also report the substitution class (conservative ... radical).
    #[arg(long)]
    pub classify: bool,
}

/// Arguments for the `matrix` subcommand.
#[derive(Args, Debug)]
pub struct MatrixArgs {
    /// Output format: 'table' or 'csv'. Overrides `display.matrix-format`.
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<MatrixFormat>,
}
