// Tue Jan 13 2026 - Alex

use crate::dispatch::StructuralLayout;
use crate::opcode::IndexNameMap;
use crate::pattern::join_signature_lines;
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use json_comments::CommentSettings;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

pub const VTABLE_METHOD: &str = "vtable";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid \"{field}\" in opcode map: {reason}")]
    Schema { field: String, reason: String },
}

impl ConfigError {
    fn schema(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionMethod {
    VTable,
    Other(String),
}

impl From<&str> for ExtractionMethod {
    fn from(method: &str) -> Self {
        if method == VTABLE_METHOD {
            Self::VTable
        } else {
            Self::Other(method.to_string())
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VTable => write!(f, "{}", VTABLE_METHOD),
            Self::Other(method) => write!(f, "{:?}", method),
        }
    }
}

/// Signature as written in the file: one string, or lines to be joined.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SignatureText {
    Text(String),
    Lines(Vec<String>),
}

impl SignatureText {
    pub fn compact(&self) -> String {
        match self {
            Self::Text(text) => join_signature_lines([text]),
            Self::Lines(lines) => join_signature_lines(lines),
        }
    }
}

/// Everything the vtable method needs from the opcode map file.
#[derive(Debug, Clone)]
pub struct VTableConfig {
    pub signature: String,
    pub names: IndexNameMap,
    pub layout: StructuralLayout,
}

/// Parsed opcode map file. Fields are decoded lazily so each schema failure
/// names the field it came from.
#[derive(Debug, Clone)]
pub struct OpcodeMapFile {
    document: Map<String, Value>,
}

impl OpcodeMapFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Self::from_reader(text.as_bytes())
    }

    /// Parses JSON that may contain `//` and `/* */` comments.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let stripped = CommentSettings::c_style().strip_comments(reader);
        match serde_json::from_reader(stripped)? {
            Value::Object(document) => Ok(Self { document }),
            other => Err(ConfigError::schema("<root>", format!("expected an object, found {}", kind_of(&other)))),
        }
    }

    fn field<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, ConfigError> {
        match self.document.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|e| ConfigError::schema(name, e.to_string())),
        }
    }

    fn required<T: DeserializeOwned>(&self, name: &str) -> Result<T, ConfigError> {
        self.field(name)?
            .ok_or_else(|| ConfigError::schema(name, "missing required field"))
    }

    pub fn method(&self) -> Result<ExtractionMethod, ConfigError> {
        let method: Option<String> = self.field("method")?;
        Ok(ExtractionMethod::from(method.as_deref().unwrap_or("")))
    }

    pub fn signature(&self) -> Result<SignatureText, ConfigError> {
        self.required("signature")
    }

    /// Inverts the file's `name → slot` table. A slot listed twice keeps the
    /// later name.
    pub fn names(&self) -> Result<IndexNameMap, ConfigError> {
        let raw: IndexMap<String, i64> = self.required("map")?;
        let mut names = IndexNameMap::new();

        for (name, slot) in raw {
            let slot = i32::try_from(slot)
                .ok()
                .filter(|slot| *slot >= 0)
                .ok_or_else(|| ConfigError::schema("map", format!("slot {} for {} is not a valid vtable index", slot, name)))?;

            if let Some(previous) = names.insert(slot, name.as_str()) {
                log::warn!("Slot {} is mapped to both {} and {}; keeping {}", slot, previous, name, name);
            }
        }

        Ok(names)
    }

    pub fn layout(&self) -> Result<StructuralLayout, ConfigError> {
        Ok(self.field("layout")?.unwrap_or_default())
    }

    pub fn vtable_config(&self) -> Result<VTableConfig, ConfigError> {
        Ok(VTableConfig {
            signature: self.signature()?.compact(),
            names: self.names()?,
            layout: self.layout()?,
        })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
