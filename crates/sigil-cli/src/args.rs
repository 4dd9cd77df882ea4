use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use sigil_core::config::{DEFAULT_MAX_PATTERN_LEN, InspectConfig};

#[derive(Debug, Parser)]
#[command(
    name = "sigil",
    version,
    about = "Identify a file's true type from its magic number and flag extension masquerading"
)]
pub struct Args {
    /// Path to the file to inspect
    pub file: PathBuf,

    /// Path to the JSON signature catalog
    pub catalog: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Shorthand for `--format json`
    #[arg(long, conflicts_with = "format")]
    pub json: bool,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Skip the SHA-256 fingerprint of the inspected file
    #[arg(long)]
    pub no_hash: bool,

    /// Reject catalog patterns longer than this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_PATTERN_LEN)]
    pub max_pattern_len: usize,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    pub fn inspect_config(&self) -> InspectConfig {
        InspectConfig {
            max_pattern_len: self.max_pattern_len,
            hash_artifact: !self.no_hash,
        }
    }
}
