use serde_json::Value;

use super::error::ConvertError;
use crate::constants::NUMERAL_MARKER_LEN;

/// Strips the two-character marker ("0x", "$C", ...) from a numeral field.
/// The marker itself is not checked, only its length.
pub fn extract_numeral(index: usize, field: &str, value: &Value) -> Result<String, ConvertError> {
    let text = match value {
        Value::String(text) => text,
        other => {
            return Err(ConvertError::Format {
                index,
                field: field.to_string(),
                found: describe(other),
            });
        }
    };

    // Character based so a multi-byte marker never splits a code point.
    let mut chars = text.char_indices().skip(NUMERAL_MARKER_LEN - 1);
    match chars.next() {
        Some((offset, marker_tail)) => Ok(text[offset + marker_tail.len_utf8()..].to_string()),
        None => Err(ConvertError::Format {
            index,
            field: field.to_string(),
            found: describe(value),
        }),
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
