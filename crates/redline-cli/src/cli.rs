use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "redline",
    about = "Redline: section-aware comparison of document revisions",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML engine configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two revisions: whole-document diff and per-section redline
    Compare(CompareArgs),
    /// Show the sections extracted from a document
    Sections(SectionsArgs),
    /// Summarize the changes between two revisions
    Summary(PairArgs),
    /// Write a JSON report with statistics, summary and section titles
    Report(ReportArgs),
}

#[derive(Args)]
pub struct PairArgs {
    pub original: PathBuf,
    pub revised: PathBuf,
}

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub files: PairArgs,
    /// Only produce the whole-document diff
    #[arg(long)]
    pub no_sections: bool,
}

#[derive(Args)]
pub struct SectionsArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub files: PairArgs,
    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
