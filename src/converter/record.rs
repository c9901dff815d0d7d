use log::trace;
use serde::Serialize;
use serde_json::{Map, Value};

use super::ConvertOptions;
use super::error::ConvertError;
use super::numeral::extract_numeral;
use crate::constants::KEY_MARKER;

/// Everything a record carries besides its key-source fields. Field order
/// is kept as it was read.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(pub Map<String, Value>);

impl Payload {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One element of the input array together with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct OpcodeRecord {
    pub index: usize,
    pub payload: Payload,
}

impl OpcodeRecord {
    pub fn new(index: usize, fields: Map<String, Value>) -> Self {
        Self {
            index,
            payload: Payload(fields),
        }
    }

    /// Consumes the record, returning its synthesized key and the payload
    /// with the opcode and prefix fields removed.
    pub fn rekey(self, options: &ConvertOptions) -> Result<(String, Payload), ConvertError> {
        let OpcodeRecord { index, payload } = self;
        let mut fields = payload.0;

        let opcode_value = fields.shift_remove(&options.opcode_field).ok_or_else(|| {
            ConvertError::MissingField {
                index,
                field: options.opcode_field.clone(),
            }
        })?;
        let opcode = extract_numeral(index, &options.opcode_field, &opcode_value)?;
        trace!("record {}: removed '{}'", index, options.opcode_field);

        let prefix = match fields.shift_remove(&options.prefix_field) {
            Some(value) => {
                trace!("record {}: removed '{}'", index, options.prefix_field);
                extract_numeral(index, &options.prefix_field, &value)?
            }
            None => String::new(),
        };

        Ok((synthesize_key(&prefix, &opcode), Payload(fields)))
    }
}

pub fn synthesize_key(prefix: &str, opcode: &str) -> String {
    let mut key = String::with_capacity(KEY_MARKER.len() + prefix.len() + opcode.len());
    key.push_str(KEY_MARKER);
    key.push_str(prefix);
    key.push_str(opcode);
    key
}
