//! Read side of a converted document: entries looked up by key or by the
//! numeric opcode a decoder has in hand.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::info;
use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::converter::ConvertError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedTable {
    entries: Map<String, Value>,
}

impl KeyedTable {
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let json = fs::read_to_string(path).map_err(|err| ConvertError::from(err).at_path(path))?;
        json.parse()
    }

    pub fn get(&self, key: &str) -> Option<&Map<String, Value>> {
        self.entries.get(key).and_then(Value::as_object)
    }

    /// Prefixed opcodes are addressed as 16-bit codes, e.g. 0xCB11.
    pub fn get_code(&self, code: u16) -> Option<&Map<String, Value>> {
        self.get(&format!("0x{:02x}", code))
            .or_else(|| self.get(&format!("0x{:02X}", code)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for KeyedTable {
    type Err = ConvertError;

    /// Every value has to be an object; duplicate keys keep the last entry.
    fn from_str(json: &str) -> Result<Self, Self::Err> {
        let entries: Map<String, Value> = serde_json::from_str(json)?;
        if let Some((key, _)) = entries.iter().find(|(_, value)| !value.is_object()) {
            let err = serde_json::Error::custom(format!("entry '{}' is not an object", key));
            return Err(ConvertError::Parse(err));
        }
        Ok(Self { entries })
    }
}

/// Reads a written document back and checks it holds `expected` entries.
pub fn verify_output(path: &Path, expected: usize) -> Result<KeyedTable, ConvertError> {
    let table = KeyedTable::load(path)?;
    if table.len() != expected {
        return Err(ConvertError::Verify {
            expected,
            found: table.len(),
        });
    }
    info!("Verified {} entries in '{}'", table.len(), path.display());
    Ok(table)
}
