use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed descriptor at line {line}: {kind}")]
    MalformedDescriptor { line: usize, kind: SyntaxError },

    #[error("descriptor has no [Scheme.Reg] entry")]
    MissingScheme,

    #[error("descriptor has no [Strings] section")]
    MissingStrings,

    #[error("scheme entry lists {found} cursor paths, expected {expected}")]
    MalformedScheme { expected: usize, found: usize },

    /// Reported through the log sink, never returned.
    #[error("cursor file {file_name:?} not found under {}", .search_root.display())]
    CursorFileNotFound {
        file_name: String,
        search_root: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    UnterminatedSectionHeader,
    SectionNameEmpty,
    UnexpectedCharacter { c: char },
    UnterminatedString,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::UnterminatedSectionHeader => "unterminated section header".fmt(f),
            Self::SectionNameEmpty => "section name cannot be empty".fmt(f),
            Self::UnexpectedCharacter { c } => write!(f, "unexpected character after section header: {c:?}"),
            Self::UnterminatedString => "unterminated string".fmt(f),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
