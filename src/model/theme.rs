use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use super::roles::CursorRole;

pub const THEME_VERSION: &str = "0.1.0";

/// Role-based cursor theme manifest, serialized as TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    theme: String,

    #[serde(default = "default_version")]
    version: String,

    #[serde(rename = "cursor", default)]
    cursors: Vec<CursorEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorEntry {
    name: String,

    input: String,

    #[serde(default)]
    aliases: Vec<String>,
}

fn default_version() -> String {
    THEME_VERSION.to_string()
}

impl ThemeDescriptor {
    /// Entries with an empty `input` are dropped.
    pub fn new(
        theme: impl Into<String>,
        version: impl Into<String>,
        cursors: impl IntoIterator<Item = CursorEntry>,
    ) -> Self {
        Self {
            theme: theme.into(),
            version: version.into(),
            cursors: cursors
                .into_iter()
                .filter(|cursor| !cursor.input.is_empty())
                .collect(),
        }
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn cursors(&self) -> &[CursorEntry] {
        &self.cursors
    }

    pub fn cursor(&self, name: &str) -> Option<&CursorEntry> {
        self.cursors.iter().find(|cursor| cursor.name == name)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let content = self.to_toml_string().map_err(io::Error::other)?;
        fs::write(path, content)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl CursorEntry {
    pub fn new(name: impl Into<String>, input: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            aliases,
        }
    }

    /// Entry for `role` carrying its static alias list.
    pub fn for_role(role: CursorRole, input: impl Into<String>) -> Self {
        let aliases = role.aliases().iter().map(|alias| alias.to_string()).collect();
        Self::new(role.name(), input, aliases)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}
