// src/cli.rs

use crate::config::{IndentStyle, ReportFormat};
use clap::{Args, Parser, Subcommand};

/// Scans Gherkin feature files and renders a searchable report.
///
/// featlist recursively walks a directory for `.feature` files (English or
/// Russian keywords) and either lists their features and scenarios, with the
/// author, export flag and task references found in their tags, or checks
/// them for inconsistent indentation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the feature list: one row per scenario.
    List(ReportArgs),
    /// Check indentation: one row per diagnostic.
    Indent(ReportArgs),
    /// Serve a live report page that re-renders as files are analyzed.
    #[cfg(feature = "web")]
    Serve(ServeArgs),
}

/// Options shared by every trigger.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Directory to scan for .feature files.
    #[arg(env = "FEATLIST_ROOT", value_name = "ROOT")]
    pub root: Option<String>,

    /// Indentation feature files are expected to use.
    #[arg(
        long,
        env = "FEATLIST_INDENTATION",
        value_name = "STYLE",
        default_value_t = IndentStyle::Unspecified
    )]
    pub indentation: IndentStyle,

    /// Do not collect or show @tasks= values.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_tasks: bool,

    /// Do not collect or show @author= values.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_author: bool,

    /// Skip files/directories matching these glob patterns (relative to ROOT, repeatable).
    #[arg(short = 'i', long = "ignore", value_name = "GLOB", num_args = 1..)]
    pub ignore_patterns: Option<Vec<String>>,
}

/// Where and how the report is written.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Report format: html, markdown or json.
    #[arg(short = 'F', long, value_name = "FORMAT", default_value_t = ReportFormat::Html)]
    pub format: ReportFormat,

    /// Write the report to the specified file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,

    #[cfg(feature = "clipboard")]
    /// Copy the report to the system clipboard.
    #[arg(short = 'p', long, action = clap::ArgAction::SetTrue, conflicts_with = "output_file")]
    pub paste: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[cfg(feature = "web")]
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Port to listen on (localhost only).
    #[arg(long, default_value_t = 8470)]
    pub port: u16,

    /// Do not open the report page in a browser.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_open: bool,
}
