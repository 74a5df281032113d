//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "checktls")]
#[command(version)]
#[command(about = "Summarize SSL Labs scan results into CSV/HTML reports", long_about = None)]
pub struct Cli {
    /// JSON file written by ssllabs-scan. Every host must have an assessed
    /// endpoint, otherwise the report is not built
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Type of report
    #[arg(short = 't', long = "type", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Save into file ("-" for stdout)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    pub output: String,

    /// Also write an HTML summary to <PREFIX>-<date>.html
    #[arg(short = 'S', long, value_name = "PREFIX")]
    pub summary: Option<String>,

    /// Do not fill the Mozilla Observatory grade
    #[arg(short = 'M', long)]
    pub ignore_mozilla: bool,

    /// Do not fill the tls.imirhil.fr grade
    #[arg(short = 'I', long)]
    pub ignore_imirhil: bool,

    /// Only list wildcard certificates
    #[arg(short = 'W', long)]
    pub wildcards: bool,

    /// Site to contract CSV file
    #[arg(short, long, value_name = "FILE")]
    pub contracts: Option<PathBuf>,

    /// CSV of already known external grades (host,mozilla,imirhil)
    #[arg(short, long, value_name = "FILE")]
    pub grades: Option<PathBuf>,

    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug mode
    #[arg(short = 'D', long)]
    pub debug: bool,
}

impl Cli {
    /// Log filter implied by -v / -D
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    /// Whether output goes to stdout
    pub fn to_stdout(&self) -> bool {
        self.output.is_empty() || self.output == "-"
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terminal tables (default)
    Text,
    /// CSV rows followed by both summaries
    Csv,
    /// HTML table
    Html,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}
