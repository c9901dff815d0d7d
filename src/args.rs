use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::constants::*;

/// What to do when two records synthesize the same key.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum DuplicatePolicy {
    /// Abort the run on the second occurrence.
    #[default]
    Reject,
    /// Emit both entries; readers keep the last one.
    Overwrite,
}

/// Rewrites an opcode descriptor list into a table keyed by opcode.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON array of opcode records to read.
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Where the keyed JSON object is written. Existing content is replaced.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Field holding the opcode numeral, e.g. "0x3E".
    #[arg(long, default_value = DEFAULT_OPCODE_FIELD)]
    pub opcode_field: String,

    /// Optional field holding the prefix numeral, e.g. "0xCB".
    #[arg(long, default_value = DEFAULT_PREFIX_FIELD)]
    pub prefix_field: String,

    /// How to handle two records that produce the same key.
    #[arg(long, value_enum, default_value_t = DuplicatePolicy::Reject)]
    pub duplicates: DuplicatePolicy,

    // Read the written file back and check the entry count.
    #[arg(long)]
    pub verify: bool,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,
}
