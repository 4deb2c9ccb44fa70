// Tue Jan 13 2026 - Alex

use crate::opcode::OpcodeMap;
use serde_json::{to_string, to_string_pretty};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Writes an [`OpcodeMap`] as a JSON object of `"opcode": "name"` pairs.
pub struct JsonSerializer {
    pretty_print: bool,
    sort_keys: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            sort_keys: true,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// When disabled, opcodes keep jump-table order.
    pub fn with_sort_keys(mut self, sort: bool) -> Self {
        self.sort_keys = sort;
        self
    }

    pub fn serialize(&self, opcodes: &OpcodeMap) -> Result<String, JsonError> {
        if self.sort_keys {
            let sorted: BTreeMap<_, _> = opcodes.iter().collect();
            self.render(&sorted)
        } else {
            self.render(opcodes)
        }
    }

    fn render<T: serde::Serialize>(&self, value: &T) -> Result<String, JsonError> {
        let text = if self.pretty_print {
            to_string_pretty(value)?
        } else {
            to_string(value)?
        };
        Ok(text)
    }

    pub fn serialize_to_file<P: AsRef<Path>>(&self, opcodes: &OpcodeMap, path: P) -> Result<(), JsonError> {
        let json_str = self.serialize(opcodes)?;

        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json_str.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(())
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opcodes() -> OpcodeMap {
        let mut opcodes = OpcodeMap::new();
        opcodes.record(0x2A0, "ActorMove");
        opcodes.record(0x10, "ActorControl");
        opcodes
    }

    #[test]
    fn test_sorted_output() {
        let json = JsonSerializer::new().with_pretty_print(false).serialize(&opcodes()).unwrap();
        assert_eq!(json, r#"{"16":"ActorControl","672":"ActorMove"}"#);
    }

    #[test]
    fn test_insertion_order_output() {
        let json = JsonSerializer::new()
            .with_pretty_print(false)
            .with_sort_keys(false)
            .serialize(&opcodes())
            .unwrap();
        assert_eq!(json, r#"{"672":"ActorMove","16":"ActorControl"}"#);
    }

    #[test]
    fn test_empty_map() {
        let json = JsonSerializer::new().serialize(&OpcodeMap::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_serialize_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opcodes.json");
        JsonSerializer::new().serialize_to_file(&opcodes(), &path).unwrap();

        let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["16"], "ActorControl");
        assert_eq!(written["672"], "ActorMove");
    }
}
