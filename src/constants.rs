pub const DEFAULT_INPUT_PATH: &str = "opcodes.json";
pub const DEFAULT_OUTPUT_PATH: &str = "newcodes.json";

pub const DEFAULT_OPCODE_FIELD: &str = "opcode";
pub const DEFAULT_PREFIX_FIELD: &str = "prefix";

/// Every synthesized key starts with this, regardless of the marker the
/// source fields carried.
pub const KEY_MARKER: &str = "0x";

/// Number of leading characters stripped from a numeral field, e.g. "0x".
pub const NUMERAL_MARKER_LEN: usize = 2;
