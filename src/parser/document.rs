//! Line-oriented parser for VCU encoder configuration files.
//!
//! The grammar is a small INI dialect:
//!
//! ```text
//! # full-line comment
//! [INPUT]
//! Width  = 1920      # trailing comment
//! Format = NV12
//! [GOP]
//! Gop.Length = 30
//! ```
//!
//! Section names are case-insensitive and stored upper-cased. Keys are
//! case-sensitive and may contain dots (`Gop.Length` is one key, not a path).

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::value::{Value, parse_value};

/// Errors raised while tokenizing a configuration document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: parameter '{key}' found outside of section")]
    OutsideSection { line: usize, key: String },
}

/// A named group of `key = value` entries
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    name: String,
    entries: IndexMap<String, Value>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite an entry. An overwritten key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Sections serialize as their entry map; the name is the key in the parent
impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// A parsed configuration: sections in the order they first appeared
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    /// Parse a configuration from text.
    ///
    /// Fails only when an assignment appears before the first section header.
    /// Lines that are neither headers nor assignments are ignored.
    pub fn parse_str(source: &str) -> Result<Self, ParseError> {
        let mut sections: IndexMap<String, Section> = IndexMap::new();
        let mut current: Option<String> = None;

        for (index, raw) in source.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = section_header(line) {
                let name = name.to_uppercase();
                debug!(line = line_no, section = %name, "section header");
                sections
                    .entry(name.clone())
                    .or_insert_with(|| Section::new(name.clone()));
                current = Some(name);
                continue;
            }

            if !line.contains('=') {
                debug!(line = line_no, text = line, "ignoring line without assignment");
                continue;
            }

            let content = line.split_once('#').map_or(line, |(before, _)| before);
            let Some((key, value)) = content.split_once('=') else {
                // The only '=' was inside the comment
                continue;
            };
            let key = key.trim();

            let Some(section_name) = current.as_deref() else {
                return Err(ParseError::OutsideSection {
                    line: line_no,
                    key: key.to_string(),
                });
            };

            let parsed = parse_value(value);
            debug!(
                line = line_no,
                section = section_name,
                key,
                kind = parsed.type_name(),
                "entry"
            );
            sections
                .entry(section_name.to_string())
                .or_insert_with(|| Section::new(section_name))
                .insert(key, parsed);
        }

        Ok(Self { sections })
    }

    /// Read and parse a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let document = Self::parse_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(document)
    }

    /// Look up a section by name (case-insensitive)
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(&name.to_uppercase())
    }

    /// Look up a single value
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.section(section).and_then(|s| s.get(key))
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// `[name]` at the start of a line; anything after the `]` is ignored
fn section_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.find(']')?;
    let name = &rest[..end];
    (!name.is_empty()).then_some(name)
}
