use std::fs;
use std::path::{Path, PathBuf};

use opcode_rekey::args::{Args, DuplicatePolicy};
use serde_json::Value;
use tempfile::TempDir;

/// A small slice of an opcode listing in the shape the converter reads.
pub const SAMPLE_OPCODES: &str = r#"[
    {"opcode": "0x00", "mnemonic": "NOP", "operands": [], "bytes": 1, "cycles": 4, "flagsZNHC": ["-", "-", "-", "-"]},
    {"opcode": "0x3E", "mnemonic": "LD", "operands": ["out A", "d8"], "bytes": 2, "cycles": 8, "flagsZNHC": ["-", "-", "-", "-"]},
    {"opcode": "0xAF", "mnemonic": "XOR", "operands": ["A"], "bytes": 1, "cycles": 4, "flagsZNHC": ["Z", "0", "0", "0"]},
    {"opcode": "0x11", "prefix": "0xCB", "mnemonic": "RL", "operands": ["inout C"], "bytes": 2, "cycles": 8, "flagsZNHC": ["Z", "0", "0", "C"]},
    {"opcode": "0x7C", "prefix": "0xCB", "mnemonic": "BIT", "operands": ["7", "H"], "bytes": 2, "cycles": 8, "flagsZNHC": ["Z", "0", "1", "-"]}
]"#;

/// Scratch directory holding one input and one output file.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn with_input(contents: &str) -> Self {
        let workspace = Self::new();
        fs::write(workspace.input(), contents).expect("write input");
        workspace
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn input(&self) -> PathBuf {
        self.dir.path().join("opcodes.json")
    }

    pub fn output(&self) -> PathBuf {
        self.dir.path().join("newcodes.json")
    }

    pub fn output_text(&self) -> String {
        fs::read_to_string(self.output()).expect("read output")
    }

    pub fn output_json(&self) -> Value {
        serde_json::from_str(&self.output_text()).expect("output is valid JSON")
    }

    pub fn args(&self) -> Args {
        Args {
            input: self.input(),
            output: self.output(),
            opcode_field: "opcode".to_string(),
            prefix_field: "prefix".to_string(),
            duplicates: DuplicatePolicy::Reject,
            verify: false,
            log_path: None,
        }
    }
}
