use std::fs;
use std::path::Path;

use log::info;
use serde_json::{Map, Value};

use super::error::ConvertError;
use super::record::OpcodeRecord;

/// Reads the whole source document before any record is looked at.
pub fn load_records(path: &Path) -> Result<Vec<OpcodeRecord>, ConvertError> {
    info!("Loading opcode records from '{}'", path.display());
    let json = fs::read_to_string(path).map_err(|err| ConvertError::from(err).at_path(path))?;
    parse_records(&json)
}

/// The document must be an array of objects; anything else is a parse error.
pub fn parse_records(json: &str) -> Result<Vec<OpcodeRecord>, ConvertError> {
    let raw: Vec<Map<String, Value>> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .map(|(index, fields)| OpcodeRecord::new(index, fields))
        .collect())
}
