// Wed Jan 15 2026 - Alex

use indexmap::IndexMap;
use serde::Serialize;

pub type Opcode = i64;

/// Recovered opcode → handler name mapping, kept in the order opcodes were
/// first recorded. Re-recording an opcode replaces its name in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OpcodeMap {
    entries: IndexMap<Opcode, String>,
}

impl OpcodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, opcode: Opcode, name: impl Into<String>) -> Option<String> {
        self.entries.insert(opcode, name.into())
    }

    pub fn get(&self, opcode: Opcode) -> Option<&str> {
        self.entries.get(&opcode).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Opcode, &str)> {
        self.entries.iter().map(|(&opcode, name)| (opcode, name.as_str()))
    }

    pub fn sorted(&self) -> Vec<(Opcode, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|&(opcode, _)| opcode);
        entries
    }
}

impl<'a> IntoIterator for &'a OpcodeMap {
    type Item = (&'a Opcode, &'a String);
    type IntoIter = indexmap::map::Iter<'a, Opcode, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
