use std::collections::HashMap;

use crate::error::{Error, Result};

use super::{Descriptor, STRINGS_SECTION, Section};

/// `%NAME%` replacements from the `[Strings]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    values: HashMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descriptor(descriptor: &Descriptor) -> Result<Self> {
        descriptor
            .section(STRINGS_SECTION)
            .map(Self::from_section)
            .ok_or(Error::MissingStrings)
    }

    /// The first declaration of a name wins. Entries without a name are skipped.
    pub fn from_section(section: &Section) -> Self {
        let mut values = HashMap::with_capacity(section.entries().len());

        for entry in section.entries() {
            if entry.key().is_empty() {
                continue;
            }
            values
                .entry(entry.key().to_string())
                .or_insert_with(|| entry.value().to_string());
        }

        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn expand(&self, text: &str) -> String {
        expand(text, self)
    }
}

impl<K, V> FromIterator<(K, V)> for StringTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}

/// Replaces each `%token%` found in `table` with its value, in a single left-to-right pass.
///
/// Unknown tokens (directory IDs such as `%10%` among them) are copied through unchanged,
/// and replacement text is never scanned again. A trailing unmatched `%` is literal.
pub fn expand(text: &str, table: &StringTable) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('%') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('%') else {
            result.push_str(&rest[open..]);
            return result;
        };

        match table.get(&after[..close]) {
            Some(value) => result.push_str(value),
            None => result.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    result.push_str(rest);
    result
}
