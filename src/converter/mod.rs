mod error;
mod loader;
mod numeral;
mod record;
mod writer;

pub use error::ConvertError;
pub use loader::{load_records, parse_records};
pub use numeral::extract_numeral;
pub use record::{OpcodeRecord, Payload, synthesize_key};
pub use writer::ObjectWriter;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::args::{Args, DuplicatePolicy};
use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub opcode_field: String,
    pub prefix_field: String,
    pub duplicates: DuplicatePolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            opcode_field: DEFAULT_OPCODE_FIELD.to_string(),
            prefix_field: DEFAULT_PREFIX_FIELD.to_string(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl From<&Args> for ConvertOptions {
    fn from(args: &Args) -> Self {
        Self {
            opcode_field: args.opcode_field.clone(),
            prefix_field: args.prefix_field.clone(),
            duplicates: args.duplicates,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Entries written, one per input record.
    pub records: usize,
    /// Keys a reader of the output will see. Lower than `records` only when
    /// duplicates were let through.
    pub distinct_keys: usize,
}

/// Rekeys every record into `out`, in input order. Stops at the first bad
/// record; entries before it have already been written.
pub fn convert_records<W: Write>(
    records: Vec<OpcodeRecord>,
    out: W,
    options: &ConvertOptions,
) -> Result<(W, ConvertSummary), ConvertError> {
    let mut writer = ObjectWriter::begin(out)?;
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(records.len());

    for record in records {
        let index = record.index;
        let (key, payload) = record.rekey(options)?;

        if let Some(&first_index) = seen.get(&key) {
            match options.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(ConvertError::DuplicateKey {
                        index,
                        key,
                        first_index,
                    });
                }
                DuplicatePolicy::Overwrite => {
                    warn!(
                        "record {}: key '{}' overrides record {}",
                        index, key, first_index
                    );
                }
            }
        }

        debug!("record {} -> {}", index, key);
        writer.entry(&key, &payload)?;
        seen.insert(key, index);
    }

    let summary = ConvertSummary {
        records: writer.entries(),
        distinct_keys: seen.len(),
    };
    Ok((writer.finish()?, summary))
}

/// Converts a document held in memory, returning the output text.
pub fn convert_str(json: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let records = parse_records(json)?;
    let (out, _) = convert_records(records, Vec::new(), options)?;
    // Only serde_json output and ASCII punctuation were written.
    String::from_utf8(out).map_err(|err| {
        ConvertError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}

/// Reads `input` fully, then truncates `output` and streams the keyed
/// object into it.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConvertSummary, ConvertError> {
    let records = load_records(input)?;
    info!("Read {} records", records.len());

    let file = File::create(output).map_err(|err| ConvertError::from(err).at_path(output))?;
    let (_, summary) = convert_records(records, BufWriter::new(file), options)
        .map_err(|err| err.at_path(output))?;

    info!(
        "Wrote {} entries to '{}'",
        summary.records,
        output.display()
    );
    Ok(summary)
}
