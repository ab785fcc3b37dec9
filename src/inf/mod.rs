// Windows INF descriptor: sections of positional, comma-separated entries

pub mod parser;
pub mod strings;

use std::char;
use std::str::FromStr;

use crate::error::{Error, Result};

pub use parser::Parser;
pub use strings::{StringTable, expand};

pub const SCHEME_SECTION: &str = "Scheme.Reg";
pub const STRINGS_SECTION: &str = "Strings";

/// Byte Order Mark for UTF-16 LE, the encoding Windows tooling usually saves INF files in.
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    sections: Vec<Section>,
}

impl Descriptor {
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let sections = Parser::new(text).into_sections()?;
        Ok(Self { sections })
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::parse(&decode_text(data))
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section names are matched exactly, including case.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }
}

impl FromStr for Descriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    pub(crate) fn new(name: String, entries: Vec<Entry>) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries declared under `key`, in source order. Entries without a key use `""`.
    pub fn entries_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |entry| entry.key == key)
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}

/// One logical line of a section. Fields are addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    key: String,
    fields: Vec<String>,
    value: String,
}

impl Entry {
    /// The value is the fields joined with `,`.
    pub fn new(key: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            key: key.into(),
            value: fields.join(","),
            fields,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn last_field(&self) -> Option<&str> {
        self.fields.last().map(String::as_str)
    }

    /// Everything after the key as it was written, without quoting.
    pub fn value(&self) -> &str {
        &self.value
    }
}

pub fn decode_text(data: &[u8]) -> String {
    if let Some(body) = data.strip_prefix(BOM_UTF16_LE) {
        let units = body
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect::<Vec<u16>>();

        char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    } else {
        let body = data.strip_prefix(BOM_UTF8).unwrap_or(data);
        String::from_utf8_lossy(body).into_owned()
    }
}
